//! Vendor contract screens

use campus_engine::Column;
use campus_forms::{FieldDescriptor, FieldType, FormSchema, SelectOption};

use super::EntityConfig;

pub fn contracts() -> EntityConfig {
    let fields = vec![
        FieldDescriptor::new("title", "Contract Title", FieldType::Text).required(),
        FieldDescriptor::new("vendor_id", "Vendor", FieldType::SearchSelect)
            .remote("/vendors", "id", "name")
            .required(),
        FieldDescriptor::new("start_date", "Start Date", FieldType::Date).required(),
        FieldDescriptor::new("end_date", "End Date", FieldType::Date),
        FieldDescriptor::new("amount", "Contract Amount", FieldType::Number),
        FieldDescriptor::new("status", "Status", FieldType::Select)
            .options(vec![
                SelectOption::new("draft", "Draft"),
                SelectOption::new("active", "Active"),
                SelectOption::new("expired", "Expired"),
                SelectOption::new("terminated", "Terminated"),
            ])
            .default_value("draft"),
        FieldDescriptor::new("notes", "Notes", FieldType::Textarea),
    ];
    EntityConfig {
        endpoint: "/contracts",
        schema: FormSchema::new(fields),
        columns: vec![
            Column::new("title", "Title"),
            Column::new("vendor_id", "Vendor"),
            Column::new("start_date", "Start"),
            Column::new("end_date", "End"),
            Column::new("status", "Status"),
        ],
    }
}
