//! Remote option loading
//!
//! One fetch per descriptor with an `endpoint`, issued at form (or detail)
//! mount. Results land in a name-keyed [`OptionCache`]; a failed fetch is
//! logged and leaves that field with an empty choice list while the rest of
//! the view stays usable.

use campus_api::Api;
use campus_forms::descriptor::FieldDescriptor;
use campus_forms::resolve::OptionCache;
use campus_forms::SelectOption;
use serde_json::Value;

/// Fetch options for every remote-backed select field in `fields`.
pub async fn load_options(api: &dyn Api, fields: &[FieldDescriptor]) -> OptionCache {
    let mut cache = OptionCache::new();
    for field in fields {
        let endpoint = match (&field.endpoint, field.field_type.has_options()) {
            (Some(e), true) => e,
            _ => continue,
        };
        match api.get(endpoint).await {
            Ok(body) => {
                cache.insert(field.name.clone(), records_to_options(field, &body));
            }
            Err(e) => {
                tracing::warn!(field = %field.name, endpoint = %endpoint, error = %e,
                    "option fetch failed; field will render with no choices");
            }
        }
    }
    cache
}

/// Project fetched records into options using the descriptor's
/// value/display keys.
fn records_to_options(field: &FieldDescriptor, body: &Value) -> Vec<SelectOption> {
    let value_key = field.value_field.as_deref().unwrap_or("id");
    let display_key = field.display_field.as_deref().unwrap_or("name");
    let records = match body.as_array() {
        Some(records) => records,
        None => {
            tracing::warn!(field = %field.name, "option endpoint returned a non-collection body");
            return Vec::new();
        }
    };
    records
        .iter()
        .filter_map(|record| {
            let value = record.get(value_key)?.clone();
            let label = match record.get(display_key) {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => return None,
            };
            Some(SelectOption { value, label })
        })
        .collect()
}
