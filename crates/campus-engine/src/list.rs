//! Record list engine
//!
//! Lists a collection and owns the create/edit/delete/view transitions
//! around it. Create/edit reuse [`FormEngine`] with the same schema, so the
//! inline overlay and the standalone form page resolve fields identically.
//! Every successful mutation re-fetches the full list; the view always
//! reflects server truth.

use std::sync::Arc;

use campus_api::{Api, ApiError};
use campus_forms::resolve::is_visible;
use campus_forms::{FormSchema, FormState};
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::form::{FormEngine, SubmitOutcome};
use crate::notify::Notifier;

/// Caller-supplied column projection for the table view.
#[derive(Debug, Clone)]
pub struct Column {
    pub key: String,
    pub label: String,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into() }
    }
}

/// Result of a delete attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// User declined the confirmation; no request was made.
    Declined,
    Failed,
    Cancelled,
}

/// Generic collection screen over one entity endpoint.
pub struct ListEngine {
    schema: FormSchema,
    endpoint: String,
    columns: Vec<Column>,
    api: Arc<dyn Api>,
    notifier: Arc<dyn Notifier>,
    records: Vec<Value>,
    cancel: CancellationToken,
}

impl ListEngine {
    pub fn new(
        schema: FormSchema,
        endpoint: impl Into<String>,
        columns: Vec<Column>,
        api: Arc<dyn Api>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            schema,
            endpoint: endpoint.into(),
            columns,
            api,
            notifier,
            records: Vec::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Fetch the collection. No client-side pagination, sorting or
    /// filtering happens here. A failure is fatal to the view.
    pub async fn load(&mut self) -> Result<(), ApiError> {
        let body = match self.api.get(&self.endpoint).await {
            Ok(body) => body,
            Err(e) => {
                self.notifier.error("Failed to load records");
                return Err(e);
            }
        };
        if self.cancel.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        self.records = match body {
            Value::Array(records) => records,
            other => {
                tracing::warn!(endpoint = %self.endpoint, "collection body was not an array");
                return Err(ApiError::Decode(format!("expected a collection, got {other}")));
            }
        };
        Ok(())
    }

    pub fn records(&self) -> &[Value] {
        &self.records
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Table rows: raw values projected through the columns, `-` for
    /// empty cells.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.records
            .iter()
            .map(|r| self.columns.iter().map(|c| raw_cell(r.get(&c.key))).collect())
            .collect()
    }

    /// Open the inline create overlay.
    pub async fn create_form(&self) -> FormEngine {
        FormEngine::create(
            self.schema.clone(),
            self.endpoint.clone(),
            self.api.clone(),
            self.notifier.clone(),
        )
        .await
    }

    /// Open the inline edit overlay for one record.
    pub async fn edit_form(&self, id: &str) -> Result<FormEngine, ApiError> {
        FormEngine::edit(
            self.schema.clone(),
            self.endpoint.clone(),
            self.api.clone(),
            self.notifier.clone(),
            id,
        )
        .await
    }

    /// Submit an overlay form; a successful save re-fetches the whole list.
    pub async fn submit_inline(&mut self, form: &mut FormEngine) -> SubmitOutcome {
        let outcome = form.submit().await;
        if matches!(outcome, SubmitOutcome::Saved(_)) {
            if let Err(e) = self.load().await {
                tracing::warn!(error = %e, "list refresh after save failed");
            }
        }
        outcome
    }

    /// Confirm-then-delete. Declining issues no request; success re-fetches
    /// the list.
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
                if let Err(e) = self.load().await {
                    tracing::warn!(error = %e, "list refresh after delete failed");
                }
                DeleteOutcome::Deleted
            }
            Err(e) => {
                self.notifier.error(&e.server_message());
                DeleteOutcome::Failed
            }
        }
    }

    /// Inline read-only projection of one loaded record: label/value pairs
    /// for every visible descriptor, raw values with a `-` fallback. The
    /// type-aware formatting belongs to the detail engine, not here.
    pub fn view(&self, id: &str) -> Option<Vec<(String, String)>> {
        let record = self.records.iter().find(|r| record_id_matches(r, id))?;
        let state = FormState::from_record(&self.schema, record);
        let rows = self
            .schema
            .fields
            .iter()
            .filter(|d| is_visible(d, &state))
            .map(|d| (d.label.clone(), raw_cell(record.get(&d.name))))
            .collect();
        Some(rows)
    }
}

fn raw_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) if s.is_empty() => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn record_id_matches(record: &Value, id: &str) -> bool {
    match record.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockApi, RecordingNotifier, ScriptedError};
    use campus_forms::{FieldDescriptor, FieldType};
    use serde_json::json;

    fn visitor_schema() -> FormSchema {
        FormSchema::new(vec![
            FieldDescriptor::new("name", "Name", FieldType::Text),
            FieldDescriptor::new("purpose", "Purpose", FieldType::Textarea),
        ])
    }

    fn engine(api: Arc<MockApi>, notifier: Arc<RecordingNotifier>) -> ListEngine {
        ListEngine::new(
            visitor_schema(),
            "/visitors",
            vec![Column::new("name", "Name"), Column::new("purpose", "Purpose")],
            api,
            notifier,
        )
    }

    #[tokio::test]
    async fn load_projects_rows_with_dash_fallback() {
        let api = MockApi::arc();
        api.ok(
            "GET /visitors",
            json!([
                { "id": 1, "name": "Grace", "purpose": "Delivery" },
                { "id": 2, "name": "Alan", "purpose": null },
            ]),
        );
        let mut list = engine(api, RecordingNotifier::arc(true));
        list.load().await.unwrap();

        assert_eq!(list.records().len(), 2);
        assert_eq!(list.rows()[0], vec!["Grace", "Delivery"]);
        assert_eq!(list.rows()[1], vec!["Alan", "-"]);
    }

    #[tokio::test]
    async fn load_failure_is_fatal_and_notified() {
        let api = MockApi::arc();
        api.fail("GET /visitors", ScriptedError::Transport);
        let notifier = RecordingNotifier::arc(true);
        let mut list = engine(api, notifier.clone());

        assert!(list.load().await.is_err());
        assert_eq!(notifier.of_kind("error"), vec!["Failed to load records"]);
    }

    #[tokio::test]
    async fn confirmed_delete_issues_one_delete_and_one_refetch() {
        let api = MockApi::arc();
        api.ok("GET /visitors", json!([ { "id": 1, "name": "Grace" } ]));
        api.ok("DELETE /visitors/1", json!(null));
        let notifier = RecordingNotifier::arc(true);
        let mut list = engine(api.clone(), notifier.clone());
        list.load().await.unwrap();

        assert_eq!(list.delete("1").await, DeleteOutcome::Deleted);
        assert_eq!(api.calls_matching("DELETE /visitors/1"), 1);
        // Initial load plus the post-delete refresh.
        assert_eq!(api.calls_matching("GET /visitors"), 2);
        assert_eq!(notifier.of_kind("success"), vec!["Record deleted"]);
    }

    #[tokio::test]
    async fn declined_delete_issues_zero_calls() {
        let api = MockApi::arc();
        let notifier = RecordingNotifier::arc(false);
        let mut list = engine(api.clone(), notifier);

        assert_eq!(list.delete("1").await, DeleteOutcome::Declined);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn delete_failure_surfaces_generic_notification() {
        let api = MockApi::arc();
        api.fail("DELETE /visitors/1", ScriptedError::Status(500, "cannot delete".into()));
        let notifier = RecordingNotifier::arc(true);
        let mut list = engine(api, notifier.clone());

        assert_eq!(list.delete("1").await, DeleteOutcome::Failed);
        assert_eq!(notifier.of_kind("error"), vec!["cannot delete"]);
    }

    #[tokio::test]
    async fn inline_save_refetches_the_full_list() {
        let api = MockApi::arc();
        api.ok("GET /visitors", json!([]));
        api.ok("POST /visitors", json!({ "id": 7, "name": "Ada" }));
        let notifier = RecordingNotifier::arc(true);
        let mut list = engine(api.clone(), notifier);
        list.load().await.unwrap();

        let mut form = list.create_form().await;
        form.set_value("name", "Ada");
        let outcome = list.submit_inline(&mut form).await;
        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert_eq!(api.calls_matching("GET /visitors"), 2);
    }

    #[tokio::test]
    async fn view_projects_raw_values() {
        let api = MockApi::arc();
        api.ok("GET /visitors", json!([ { "id": 3, "name": "Grace", "purpose": "" } ]));
        let mut list = engine(api, RecordingNotifier::arc(true));
        list.load().await.unwrap();

        let rows = list.view("3").unwrap();
        assert_eq!(
            rows,
            vec![("Name".to_string(), "Grace".to_string()), ("Purpose".to_string(), "-".to_string())]
        );
        assert!(list.view("99").is_none());
    }
}
