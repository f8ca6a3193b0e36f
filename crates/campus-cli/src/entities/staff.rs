//! Staff screens

use campus_engine::Column;
use campus_forms::{FieldDescriptor, FieldType, FormSchema, SelectOption};

use super::EntityConfig;

pub fn staff() -> EntityConfig {
    let fields = vec![
        FieldDescriptor::new("name", "Full Name", FieldType::Text).required(),
        FieldDescriptor::new("email", "Email", FieldType::Email).required(),
        FieldDescriptor::new("phone", "Phone", FieldType::Text),
        FieldDescriptor::new("department_id", "Department", FieldType::SearchSelect)
            .remote("/departments", "id", "name")
            .required(),
        FieldDescriptor::new("designation", "Designation", FieldType::Select).options(vec![
            SelectOption::new("teacher", "Teacher"),
            SelectOption::new("head_of_department", "Head of Department"),
            SelectOption::new("administrator", "Administrator"),
            SelectOption::new("support", "Support Staff"),
        ]),
        FieldDescriptor::new("joining_date", "Joining Date", FieldType::Date),
        FieldDescriptor::new("employment_type", "Employment Type", FieldType::Select)
            .options(vec![
                SelectOption::new("permanent", "Permanent"),
                SelectOption::new("contract", "Contract"),
                SelectOption::new("probation", "Probation"),
            ])
            .default_value("permanent"),
        FieldDescriptor::new("probation_end_date", "Probation End Date", FieldType::Date)
            .when("employment_type", "probation"),
        FieldDescriptor::new("is_active", "Active", FieldType::Checkbox).default_value(true),
    ];
    EntityConfig {
        endpoint: "/staff",
        schema: FormSchema::new(fields),
        columns: vec![
            Column::new("name", "Name"),
            Column::new("email", "Email"),
            Column::new("designation", "Designation"),
            Column::new("employment_type", "Type"),
        ],
    }
}
