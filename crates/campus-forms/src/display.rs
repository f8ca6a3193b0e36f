//! Read-only value formatting for the detail view

use chrono::NaiveDate;
use serde_json::Value;

use crate::descriptor::{FieldDescriptor, FieldType};
use crate::resolve::{options_for, OptionCache};

/// Format one raw value for read-only presentation.
///
/// Checkboxes render as Yes/No, dates through locale-style formatting, and
/// both select types resolve to their option label through the uniform
/// option source. Everything else renders raw, with `-` for empty values.
pub fn format_value(desc: &FieldDescriptor, value: Option<&Value>, cache: &OptionCache) -> String {
    let value = match value {
        None | Some(Value::Null) => return "-".to_string(),
        Some(v) => v,
    };
    match desc.field_type {
        FieldType::Checkbox => {
            if value.as_bool().unwrap_or(false) { "Yes" } else { "No" }.to_string()
        }
        FieldType::Date => match value.as_str() {
            Some(s) if !s.is_empty() => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(|d| d.format("%b %-d, %Y").to_string())
                .unwrap_or_else(|_| s.to_string()),
            _ => "-".to_string(),
        },
        FieldType::Select | FieldType::SearchSelect => options_for(desc, cache)
            .iter()
            .find(|o| &o.value == value)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| raw_text(value)),
        _ => {
            let text = raw_text(value);
            if text.is_empty() { "-".to_string() } else { text }
        }
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SelectOption;
    use serde_json::json;

    #[test]
    fn checkbox_renders_yes_no() {
        let desc = FieldDescriptor::new("active", "Active", FieldType::Checkbox);
        let cache = OptionCache::new();
        assert_eq!(format_value(&desc, Some(&json!(true)), &cache), "Yes");
        assert_eq!(format_value(&desc, Some(&json!(false)), &cache), "No");
    }

    #[test]
    fn date_renders_locale_style() {
        let desc = FieldDescriptor::new("joined", "Joined", FieldType::Date);
        let cache = OptionCache::new();
        assert_eq!(format_value(&desc, Some(&json!("2024-03-05")), &cache), "Mar 5, 2024");
    }

    #[test]
    fn unparseable_date_renders_raw() {
        let desc = FieldDescriptor::new("joined", "Joined", FieldType::Date);
        assert_eq!(format_value(&desc, Some(&json!("soon")), &OptionCache::new()), "soon");
    }

    #[test]
    fn static_select_resolves_label() {
        let desc = FieldDescriptor::new("status", "Status", FieldType::Select)
            .options(vec![SelectOption::new("active", "Active")]);
        assert_eq!(format_value(&desc, Some(&json!("active")), &OptionCache::new()), "Active");
    }

    #[test]
    fn remote_select_resolves_label_from_cache() {
        let desc = FieldDescriptor::new("dept", "Department", FieldType::SearchSelect)
            .remote("/departments", "id", "name");
        let mut cache = OptionCache::new();
        cache.insert("dept".to_string(), vec![SelectOption::new(4, "Science")]);
        assert_eq!(format_value(&desc, Some(&json!(4)), &cache), "Science");
    }

    #[test]
    fn unknown_option_value_falls_back_to_raw() {
        let desc = FieldDescriptor::new("status", "Status", FieldType::Select)
            .options(vec![SelectOption::new("active", "Active")]);
        assert_eq!(format_value(&desc, Some(&json!("gone")), &OptionCache::new()), "gone");
    }

    #[test]
    fn empty_and_missing_render_dash() {
        let desc = FieldDescriptor::new("note", "Note", FieldType::Text);
        let cache = OptionCache::new();
        assert_eq!(format_value(&desc, None, &cache), "-");
        assert_eq!(format_value(&desc, Some(&Value::Null), &cache), "-");
        assert_eq!(format_value(&desc, Some(&json!("")), &cache), "-");
    }
}
