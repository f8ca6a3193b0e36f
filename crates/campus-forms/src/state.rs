//! Form state and server validation errors

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::descriptor::FormSchema;

/// Flat mapping from field name to current value.
///
/// Invariant: after initialization every descriptor name in the schema has a
/// key here, even if its value is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: HashMap<String, Value>,
}

impl FormState {
    /// Create-mode state: defaults where declared, type-appropriate empties
    /// otherwise.
    pub fn from_defaults(schema: &FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|f| {
                let v = f.default_value.clone().unwrap_or_else(|| f.empty_value());
                (f.name.clone(), v)
            })
            .collect();
        Self { values }
    }

    /// Edit-mode state: the fetched record verbatim, then empties for any
    /// schema field the record did not carry.
    pub fn from_record(schema: &FormSchema, record: &Value) -> Self {
        let mut values: HashMap<String, Value> = match record {
            Value::Object(map) => map.clone().into_iter().collect(),
            _ => HashMap::new(),
        };
        for f in &schema.fields {
            values.entry(f.name.clone()).or_insert_with(|| f.empty_value());
        }
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The full payload sent on submit. Hidden conditional fields are
    /// included as-is; the server decides what to keep.
    pub fn to_payload(&self) -> Value {
        let map: Map<String, Value> =
            self.values.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        Value::Object(map)
    }
}

/// Per-field validation messages reported by the server on a failed submit.
///
/// Populated only from a 422 response; cleared field-by-field the moment the
/// user edits that field again.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    by_field: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn replace(&mut self, errors: HashMap<String, Vec<String>>) {
        self.by_field = errors;
    }

    pub fn clear_field(&mut self, name: &str) {
        self.by_field.remove(name);
    }

    pub fn clear_all(&mut self) {
        self.by_field.clear();
    }

    pub fn field(&self, name: &str) -> &[String] {
        self.by_field.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First message of the first offending field, in schema order if a
    /// schema is available to order by.
    pub fn first_message(&self, field_order: &[String]) -> Option<&str> {
        for name in field_order {
            if let Some(msgs) = self.by_field.get(name) {
                if let Some(m) = msgs.first() {
                    return Some(m);
                }
            }
        }
        // Fields the schema does not know about still count.
        self.by_field.values().flatten().next().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_field.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{FieldDescriptor, FieldType, FormSchema};
    use serde_json::json;

    fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldDescriptor::new("name", "Name", FieldType::Text),
            FieldDescriptor::new("email", "Email", FieldType::Email),
            FieldDescriptor::new("is_active", "Active", FieldType::Checkbox),
            FieldDescriptor::new("status", "Status", FieldType::Select).default_value("pending"),
        ])
    }

    #[test]
    fn create_mode_key_set_equals_descriptor_names() {
        let state = FormState::from_defaults(&schema());
        let mut keys: Vec<&str> = state.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["email", "is_active", "name", "status"]);
        assert_eq!(state.get("name"), Some(&json!("")));
        assert_eq!(state.get("is_active"), Some(&json!(false)));
        assert_eq!(state.get("status"), Some(&json!("pending")));
    }

    #[test]
    fn edit_mode_keeps_record_and_fills_gaps() {
        let record = json!({"id": 7, "name": "Ada", "extra": "kept"});
        let state = FormState::from_record(&schema(), &record);
        assert_eq!(state.get("name"), Some(&json!("Ada")));
        assert_eq!(state.get("id"), Some(&json!(7)));
        assert_eq!(state.get("extra"), Some(&json!("kept")));
        assert_eq!(state.get("email"), Some(&json!("")));
        assert_eq!(state.get("is_active"), Some(&json!(false)));
    }

    #[test]
    fn errors_clear_per_field() {
        let mut errors = ValidationErrors::default();
        errors.replace(HashMap::from([
            ("name".to_string(), vec!["Name is required".to_string()]),
            ("email".to_string(), vec!["Invalid email".to_string()]),
        ]));
        assert_eq!(errors.field("name"), ["Name is required"]);
        errors.clear_field("name");
        assert!(errors.field("name").is_empty());
        assert_eq!(errors.field("email"), ["Invalid email"]);
    }

    #[test]
    fn first_message_follows_schema_order() {
        let mut errors = ValidationErrors::default();
        errors.replace(HashMap::from([
            ("email".to_string(), vec!["Invalid email".to_string()]),
            ("name".to_string(), vec!["Name is required".to_string()]),
        ]));
        let order = vec!["name".to_string(), "email".to_string()];
        assert_eq!(errors.first_message(&order), Some("Name is required"));
    }
}
