//! Record form engine
//!
//! Turns a schema plus an optional record id into a working create/edit
//! form: state seeding, remote option loading, conditional rendering,
//! derived-field recomputation, submission and server-error mapping.

use std::sync::Arc;

use campus_api::{Api, ApiError};
use campus_forms::resolve::{resolve_fields, OptionCache};
use campus_forms::{FormSchema, FormState, ResolvedField, SearchSelect, ValidationErrors};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::notify::Notifier;
use crate::options::load_options;

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Server accepted; the caller navigates back to the list.
    Saved(Value),
    /// Client-side guard stopped the submit before any network call.
    Blocked,
    /// Server rejected (validation or otherwise); the form stays open.
    Failed,
    /// The owning view was disposed while the request was in flight;
    /// nothing was mutated.
    Cancelled,
}

/// Generic create/edit form over one entity endpoint.
pub struct FormEngine {
    schema: FormSchema,
    endpoint: String,
    api: Arc<dyn Api>,
    notifier: Arc<dyn Notifier>,
    record_id: Option<String>,
    state: FormState,
    errors: ValidationErrors,
    options: OptionCache,
    saving: bool,
    cancel: CancellationToken,
}

impl FormEngine {
    /// Create-mode form: state from descriptor defaults.
    pub async fn create(
        schema: FormSchema,
        endpoint: impl Into<String>,
        api: Arc<dyn Api>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let state = FormState::from_defaults(&schema);
        let options = load_options(api.as_ref(), &schema.fields).await;
        Self {
            schema,
            endpoint: endpoint.into(),
            api,
            notifier,
            record_id: None,
            state,
            errors: ValidationErrors::default(),
            options,
            saving: false,
            cancel: CancellationToken::new(),
        }
    }

    /// Edit-mode form: state is the fetched record verbatim.
    ///
    /// A failed fetch surfaces a blocking notification and yields an error;
    /// there is no usable form in that case.
    pub async fn edit(
        schema: FormSchema,
        endpoint: impl Into<String>,
        api: Arc<dyn Api>,
        notifier: Arc<dyn Notifier>,
        id: &str,
    ) -> Result<Self, ApiError> {
        let endpoint = endpoint.into();
        let record = match api.get(&format!("{endpoint}/{id}")).await {
            Ok(record) => record,
            Err(e) => {
                notifier.error("Failed to load record");
                return Err(e);
            }
        };
        let state = FormState::from_record(&schema, &record);
        let options = load_options(api.as_ref(), &schema.fields).await;
        Ok(Self {
            schema,
            endpoint,
            api,
            notifier,
            record_id: Some(id.to_string()),
            state,
            errors: ValidationErrors::default(),
            options,
            saving: false,
            cancel: CancellationToken::new(),
        })
    }

    pub fn is_edit(&self) -> bool {
        self.record_id.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn options(&self) -> &OptionCache {
        &self.options
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.state.get(name)
    }

    /// Token the owning view cancels on unmount; a response resolving after
    /// that mutates nothing.
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Record one user edit: the field's server errors clear immediately and
    /// every derived rule depending on it recomputes.
    pub fn set_value(&mut self, name: &str, value: impl Into<Value>) {
        self.errors.clear_field(name);
        self.state.set(name, value);
        for rule in &self.schema.derived {
            if rule.depends_on(name) {
                if let Some(computed) = rule.compute(&self.state) {
                    self.state.set(rule.target.clone(), computed);
                }
            }
        }
    }

    /// Currently visible fields, resolved against state, errors and options.
    pub fn fields(&self) -> Vec<ResolvedField> {
        resolve_fields(&self.schema.fields, &self.state, &self.errors, &self.options)
    }

    /// Searchable-select widget for a field, preselected from current state.
    pub fn search_widget(&self, name: &str) -> Option<SearchSelect> {
        let desc = self.schema.field(name)?;
        let options = campus_forms::resolve::options_for(desc, &self.options).to_vec();
        let mut widget = SearchSelect::new(options);
        if let Some(value) = self.state.get(name) {
            widget.preselect(value);
        }
        Some(widget)
    }

    /// Submit the full form state: `POST {endpoint}` on create,
    /// `PUT {endpoint}/{id}` on edit.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if let Some(message) = self.negative_derived_guard() {
            self.notifier.warning(&message);
            return SubmitOutcome::Blocked;
        }

        let payload = self.state.to_payload();
        self.saving = true;
        let result = match &self.record_id {
            Some(id) => self.api.put(&format!("{}/{id}", self.endpoint), &payload).await,
            None => self.api.post(&self.endpoint, &payload).await,
        };
        self.saving = false;
        if self.cancel.is_cancelled() {
            return SubmitOutcome::Cancelled;
        }

        match result {
            Ok(saved) => {
                self.errors.clear_all();
                self.notifier.success("Record saved");
                SubmitOutcome::Saved(saved)
            }
            Err(ApiError::Validation { errors, message }) => {
                self.errors.replace(errors);
                let order: Vec<String> =
                    self.schema.fields.iter().map(|f| f.name.clone()).collect();
                let first = self
                    .errors
                    .first_message(&order)
                    .map(str::to_string)
                    .unwrap_or(message);
                self.notifier.error(&first);
                SubmitOutcome::Failed
            }
            Err(e) => {
                self.notifier.error(&e.server_message());
                SubmitOutcome::Failed
            }
        }
    }

    /// A derived target holding a negative number blocks submission before
    /// any network call.
    fn negative_derived_guard(&self) -> Option<String> {
        for rule in &self.schema.derived {
            let negative = match self.state.get(&rule.target) {
                Some(Value::Number(n)) => n.as_f64().map(|v| v < 0.0).unwrap_or(false),
                Some(Value::String(s)) => s.trim().parse::<f64>().map(|v| v < 0.0).unwrap_or(false),
                _ => false,
            };
            if negative {
                let label = self
                    .schema
                    .field(&rule.target)
                    .map(|f| f.label.clone())
                    .unwrap_or_else(|| rule.target.clone());
                return Some(format!("{label} cannot be negative"));
            }
        }
        None
    }
}
