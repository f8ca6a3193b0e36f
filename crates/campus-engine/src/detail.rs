//! Record detail engine
//!
//! Read-only projection of one fetched record on its own route, independent
//! of the list engine's inline view. Values render type-aware: dates through
//! locale formatting, checkboxes as Yes/No, and both select flavors resolved
//! to their option label (remote sources included, via the option cache
//! loaded at mount).

use std::sync::Arc;

use campus_api::{Api, ApiError};
use campus_forms::resolve::{is_visible, OptionCache};
use campus_forms::{format_value, FormSchema, FormState};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::list::DeleteOutcome;
use crate::notify::Notifier;
use crate::options::load_options;

/// Generic single-record screen over one entity endpoint.
pub struct DetailEngine {
    schema: FormSchema,
    endpoint: String,
    api: Arc<dyn Api>,
    notifier: Arc<dyn Notifier>,
    record: Option<Value>,
    options: OptionCache,
    cancel: CancellationToken,
}

impl DetailEngine {
    pub fn new(
        schema: FormSchema,
        endpoint: impl Into<String>,
        api: Arc<dyn Api>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            schema,
            endpoint: endpoint.into(),
            api,
            notifier,
            record: None,
            options: OptionCache::new(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Fetch the record and the option lists needed for label lookup.
    /// A failed record fetch is fatal to the view.
    pub async fn load(&mut self, id: &str) -> Result<(), ApiError> {
        let record = match self.api.get(&format!("{}/{id}", self.endpoint)).await {
            Ok(record) => record,
            Err(e) => {
                self.notifier.error("Failed to load record");
                return Err(e);
            }
        };
        if self.cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        self.options = load_options(self.api.as_ref(), &self.schema.fields).await;
        self.record = Some(record);
        Ok(())
    }

    pub fn record(&self) -> Option<&Value> {
        self.record.as_ref()
    }

    /// Formatted label/value rows for every visible descriptor.
    pub fn rows(&self) -> Vec<(String, String)> {
        let record = match &self.record {
            Some(record) => record,
            None => return Vec::new(),
        };
        let state = FormState::from_record(&self.schema, record);
        self.schema
            .fields
            .iter()
            .filter(|d| is_visible(d, &state))
            .map(|d| {
                let formatted = format_value(d, record.get(&d.name), &self.options);
                (d.label.clone(), formatted)
            })
            .collect()
    }

    /// Same confirm-then-delete contract as the list engine. On success the
    /// caller navigates back to the list route.
    pub async fn delete(&mut self, id: &str) -> DeleteOutcome {
        let confirmed = self
            .notifier
            .confirm("Delete record", "This action cannot be undone. Continue?")
            .await;
        if !confirmed {
            return DeleteOutcome::Declined;
        }
        match self.api.delete(&format!("{}/{id}", self.endpoint)).await {
            Ok(_) => {
                if self.cancel.is_cancelled() {
                    return DeleteOutcome::Cancelled;
                }
                self.notifier.success("Record deleted");
                self.record = None;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                self.notifier.error(&e.server_message());
                DeleteOutcome::Failed
            }
        }
    }
}
