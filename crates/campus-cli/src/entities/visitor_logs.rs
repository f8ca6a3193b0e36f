//! Visitor log screens

use campus_engine::Column;
use campus_forms::{FieldDescriptor, FieldType, FormSchema};

use super::EntityConfig;

pub fn visitor_logs() -> EntityConfig {
    let fields = vec![
        FieldDescriptor::new("name", "Visitor Name", FieldType::Text).required(),
        FieldDescriptor::new("purpose", "Purpose", FieldType::Textarea),
        FieldDescriptor::new("meeting_with", "Meeting With", FieldType::SearchSelect)
            .remote("/staff", "id", "name"),
        FieldDescriptor::new("visit_date", "Visit Date", FieldType::Date).required(),
        FieldDescriptor::new("check_in", "Check In", FieldType::Time),
        FieldDescriptor::new("check_out", "Check Out", FieldType::Time),
    ];
    EntityConfig {
        endpoint: "/visitor-logs",
        schema: FormSchema::new(fields),
        columns: vec![
            Column::new("name", "Name"),
            Column::new("visit_date", "Date"),
            Column::new("check_in", "In"),
            Column::new("check_out", "Out"),
        ],
    }
}
