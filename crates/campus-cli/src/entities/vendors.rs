//! Vendor screens

use campus_engine::Column;
use campus_forms::{FieldDescriptor, FieldType, FormSchema};

use super::EntityConfig;

pub fn vendors() -> EntityConfig {
    let fields = vec![
        FieldDescriptor::new("name", "Vendor Name", FieldType::Text).required(),
        FieldDescriptor::new("contact_person", "Contact Person", FieldType::Text),
        FieldDescriptor::new("email", "Email", FieldType::Email),
        FieldDescriptor::new("phone", "Phone", FieldType::Text),
        FieldDescriptor::new("address", "Address", FieldType::Textarea),
        FieldDescriptor::new("is_active", "Active", FieldType::Checkbox).default_value(true),
    ];
    EntityConfig {
        endpoint: "/vendors",
        schema: FormSchema::new(fields),
        columns: vec![
            Column::new("name", "Name"),
            Column::new("contact_person", "Contact"),
            Column::new("phone", "Phone"),
        ],
    }
}
