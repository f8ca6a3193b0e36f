//! Leave request screens
//!
//! The one entity with a derived field: the inclusive day count between the
//! two dates, recomputed on every edit.

use campus_engine::Column;
use campus_forms::{DerivedField, FieldDescriptor, FieldType, FormSchema, SelectOption};

use super::EntityConfig;

pub fn leave_requests() -> EntityConfig {
    let fields = vec![
        FieldDescriptor::new("staff_id", "Staff Member", FieldType::SearchSelect)
            .remote("/staff", "id", "name")
            .required(),
        FieldDescriptor::new("leave_type", "Leave Type", FieldType::Select).options(vec![
            SelectOption::new("casual", "Casual Leave"),
            SelectOption::new("sick", "Sick Leave"),
            SelectOption::new("earned", "Earned Leave"),
            SelectOption::new("unpaid", "Unpaid Leave"),
        ]),
        FieldDescriptor::new("from_date", "From Date", FieldType::Date).required(),
        FieldDescriptor::new("to_date", "To Date", FieldType::Date).required(),
        FieldDescriptor::new("total_days", "Total Days", FieldType::Number),
        FieldDescriptor::new("reason", "Reason", FieldType::Textarea),
        FieldDescriptor::new("status", "Status", FieldType::Select)
            .options(vec![
                SelectOption::new("pending", "Pending"),
                SelectOption::new("approved", "Approved"),
                SelectOption::new("rejected", "Rejected"),
            ])
            .default_value("pending"),
    ];
    let schema = FormSchema::new(fields)
        .with_derived(DerivedField::date_range_days("total_days", "from_date", "to_date"));
    EntityConfig {
        endpoint: "/leave-requests",
        schema,
        columns: vec![
            Column::new("staff_id", "Staff"),
            Column::new("leave_type", "Type"),
            Column::new("from_date", "From"),
            Column::new("to_date", "To"),
            Column::new("total_days", "Days"),
            Column::new("status", "Status"),
        ],
    }
}
