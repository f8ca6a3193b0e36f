//! Planner entry screens

use campus_engine::Column;
use campus_forms::{FieldDescriptor, FieldType, FormSchema};

use super::EntityConfig;

pub fn planner_entries() -> EntityConfig {
    let fields = vec![
        FieldDescriptor::new("title", "Title", FieldType::Text).required(),
        FieldDescriptor::new("date", "Date", FieldType::Date).required(),
        FieldDescriptor::new("start_time", "Start Time", FieldType::Time),
        FieldDescriptor::new("end_time", "End Time", FieldType::Time),
        FieldDescriptor::new("notes", "Notes", FieldType::Textarea),
    ];
    EntityConfig {
        endpoint: "/planner-entries",
        schema: FormSchema::new(fields),
        columns: vec![
            Column::new("title", "Title"),
            Column::new("date", "Date"),
            Column::new("start_time", "Start"),
            Column::new("end_time", "End"),
        ],
    }
}
