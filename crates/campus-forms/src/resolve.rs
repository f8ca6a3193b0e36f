//! Shared field resolution
//!
//! One module turns `(descriptor, state, errors, options)` into a
//! [`ResolvedField`] ready to present. Both the form engine and the list
//! engine's inline create/edit overlay go through here, so the two can never
//! drift apart.

use std::collections::HashMap;

use serde_json::Value;

use crate::descriptor::{FieldDescriptor, FieldType, SelectOption};
use crate::state::{FormState, ValidationErrors};

/// Name-keyed cache of remotely fetched options, one entry per field with an
/// `endpoint`. Populated once per form mount, never invalidated within the
/// form's lifetime.
pub type OptionCache = HashMap<String, Vec<SelectOption>>;

/// Uniform option lookup: the static array or the resolved remote cache,
/// whichever the descriptor declares.
pub fn options_for<'a>(desc: &'a FieldDescriptor, cache: &'a OptionCache) -> &'a [SelectOption] {
    if desc.endpoint.is_some() {
        cache.get(&desc.name).map(Vec::as_slice).unwrap_or(&[])
    } else {
        desc.options.as_deref().unwrap_or(&[])
    }
}

/// Visibility predicate: a conditional descriptor renders only when the
/// referenced field currently equals the configured value.
pub fn is_visible(desc: &FieldDescriptor, state: &FormState) -> bool {
    match &desc.conditional {
        Some(cond) => state.get(&cond.field) == Some(&cond.value),
        None => true,
    }
}

/// The control an input renders as, with everything it needs to draw itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Text { kind: FieldType },
    Textarea,
    Checkbox { checked: bool },
    Select { options: Vec<SelectOption>, selected: Value },
    SearchSelect { options: Vec<SelectOption> },
}

/// One field resolved against current form state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub value: Value,
    pub control: Control,
    /// First server-reported validation message, if any.
    pub error: Option<String>,
}

/// Resolve one descriptor, or `None` when its visibility condition fails.
pub fn resolve_field(
    desc: &FieldDescriptor,
    state: &FormState,
    errors: &ValidationErrors,
    cache: &OptionCache,
) -> Option<ResolvedField> {
    if !is_visible(desc, state) {
        return None;
    }
    let value = state.get(&desc.name).cloned().unwrap_or_else(|| desc.empty_value());
    let control = match desc.field_type {
        FieldType::Textarea => Control::Textarea,
        FieldType::Checkbox => Control::Checkbox { checked: value.as_bool().unwrap_or(false) },
        FieldType::Select => Control::Select {
            options: options_for(desc, cache).to_vec(),
            selected: value.clone(),
        },
        FieldType::SearchSelect => {
            Control::SearchSelect { options: options_for(desc, cache).to_vec() }
        }
        kind => Control::Text { kind },
    };
    Some(ResolvedField {
        name: desc.name.clone(),
        label: desc.label.clone(),
        required: desc.required,
        value,
        control,
        error: errors.field(&desc.name).first().cloned(),
    })
}

/// Resolve a whole descriptor array in order, skipping hidden fields.
pub fn resolve_fields(
    fields: &[FieldDescriptor],
    state: &FormState,
    errors: &ValidationErrors,
    cache: &OptionCache,
) -> Vec<ResolvedField> {
    fields.iter().filter_map(|d| resolve_field(d, state, errors, cache)).collect()
}
