//! Field descriptors
//!
//! The descriptor array is the wire format every entity page is written in.
//! Serialized keys are preserved exactly as the backend configuration emits
//! them (`defaultValue`, `valueField`, `search-select`, ...), so descriptor
//! arrays can round-trip through JSON untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::derived::DerivedField;

/// Input control type for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Number,
    Email,
    Date,
    Time,
    Textarea,
    Checkbox,
    Select,
    SearchSelect,
}

impl FieldType {
    /// Whether this type draws choices from an option source.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::SearchSelect)
    }
}

/// One selectable choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: Value,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<Value>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }
}

/// Visibility condition: render only when another field currently equals `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    pub field: String,
    pub value: Value,
}

/// Declarative description of one form/list field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// Unique key within the array; form-state key and server payload key.
    pub name: String,
    /// Human-readable text.
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Native input constraint only; never re-checked before submit.
    #[serde(default)]
    pub required: bool,
    /// Seed for create mode; absent means a type-appropriate empty value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Static choices, used when no `endpoint` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    /// When present, choices are fetched remotely instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Key of the option value in each fetched record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_field: Option<String>,
    /// Key of the shown label in each fetched record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<Conditional>,
}

impl FieldDescriptor {
    /// Descriptor with nothing but the mandatory parts.
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            required: false,
            default_value: None,
            options: None,
            endpoint: None,
            value_field: None,
            display_field: None,
            conditional: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = Some(options);
        self
    }

    /// Remote option source: `endpoint` plus the record keys used for
    /// option value and label.
    pub fn remote(
        mut self,
        endpoint: impl Into<String>,
        value_field: impl Into<String>,
        display_field: impl Into<String>,
    ) -> Self {
        self.endpoint = Some(endpoint.into());
        self.value_field = Some(value_field.into());
        self.display_field = Some(display_field.into());
        self
    }

    pub fn when(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditional = Some(Conditional { field: field.into(), value: value.into() });
        self
    }

    /// The type-appropriate empty value used when no default is declared.
    pub fn empty_value(&self) -> Value {
        match self.field_type {
            FieldType::Checkbox => Value::Bool(false),
            _ => Value::String(String::new()),
        }
    }
}

/// A full entity form: ordered fields plus derived-field rules.
#[derive(Debug, Clone, Default)]
pub struct FormSchema {
    pub fields: Vec<FieldDescriptor>,
    pub derived: Vec<DerivedField>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields, derived: Vec::new() }
    }

    pub fn with_derived(mut self, derived: DerivedField) -> Self {
        self.derived.push(derived);
        self
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_format_round_trips() {
        let raw = json!({
            "name": "department_id",
            "label": "Department",
            "type": "search-select",
            "required": true,
            "endpoint": "/departments",
            "valueField": "id",
            "displayField": "name"
        });
        let desc: FieldDescriptor = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(desc.field_type, FieldType::SearchSelect);
        assert_eq!(desc.value_field.as_deref(), Some("id"));
        assert_eq!(serde_json::to_value(&desc).unwrap(), raw);
    }

    #[test]
    fn default_value_key_is_camel_case() {
        let desc = FieldDescriptor::new("status", "Status", FieldType::Select)
            .default_value("active")
            .options(vec![SelectOption::new("active", "Active")]);
        let v = serde_json::to_value(&desc).unwrap();
        assert_eq!(v["defaultValue"], json!("active"));
        assert_eq!(v["options"][0], json!({"value": "active", "label": "Active"}));
    }

    #[test]
    fn empty_value_by_type() {
        let text = FieldDescriptor::new("a", "A", FieldType::Text);
        let check = FieldDescriptor::new("b", "B", FieldType::Checkbox);
        assert_eq!(text.empty_value(), json!(""));
        assert_eq!(check.empty_value(), json!(false));
    }

    #[test]
    fn conditional_deserializes() {
        let raw = json!({
            "name": "probation_end",
            "label": "Probation End",
            "type": "date",
            "conditional": { "field": "employment_type", "value": "probation" }
        });
        let desc: FieldDescriptor = serde_json::from_value(raw).unwrap();
        let cond = desc.conditional.unwrap();
        assert_eq!(cond.field, "employment_type");
        assert_eq!(cond.value, json!("probation"));
    }
}
