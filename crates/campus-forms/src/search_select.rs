//! Searchable select widget state
//!
//! A stateful widget over a loaded option list. The front end owns key/click
//! events; this struct owns the query, the filtered view, the open/closed
//! dropdown state and the committed display label.

use serde_json::Value;

use crate::descriptor::SelectOption;

#[derive(Debug, Clone, Default)]
pub struct SearchSelect {
    options: Vec<SelectOption>,
    query: String,
    open: bool,
    selected_display: Option<String>,
}

impl SearchSelect {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options, query: String::new(), open: false, selected_display: None }
    }

    /// Free-text filtering; typing opens the dropdown.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.open = true;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected_display(&self) -> Option<&str> {
        self.selected_display.as_deref()
    }

    /// Case-insensitive substring match against both the label and the value.
    pub fn filtered(&self) -> Vec<&SelectOption> {
        let needle = self.query.to_lowercase();
        self.options
            .iter()
            .filter(|o| {
                needle.is_empty()
                    || o.label.to_lowercase().contains(&needle)
                    || value_text(&o.value).to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Whether the current query matches nothing: the explicit
    /// "no results" presentation state.
    pub fn no_results(&self) -> bool {
        !self.options.is_empty() && self.filtered().is_empty()
    }

    /// Commit the option at `index` within the filtered view.
    ///
    /// Returns the scalar value to write into form state; the query becomes
    /// the option's label and the dropdown closes.
    pub fn select(&mut self, index: usize) -> Option<Value> {
        let option = self.filtered().get(index).cloned().cloned()?;
        self.query = option.label.clone();
        self.selected_display = Some(option.label);
        self.open = false;
        Some(option.value)
    }

    /// Outside-click/escape dismissal. Leaves query and selection untouched.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Seed the display label from an existing value (edit mode).
    pub fn preselect(&mut self, value: &Value) {
        if let Some(option) = self.options.iter().find(|o| &o.value == value) {
            self.query = option.label.clone();
            self.selected_display = Some(option.label.clone());
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> SearchSelect {
        SearchSelect::new(vec![
            SelectOption::new(1, "Mathematics"),
            SelectOption::new(2, "Physics"),
            SelectOption::new("chem-01", "Chemistry"),
        ])
    }

    #[test]
    fn substring_on_label_narrows_to_one() {
        let mut w = widget();
        w.set_query("phys");
        let filtered = w.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, "Physics");
        assert!(w.is_open());
    }

    #[test]
    fn substring_on_value_also_matches() {
        let mut w = widget();
        w.set_query("chem-0");
        let filtered = w.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, "Chemistry");
    }

    #[test]
    fn no_match_is_an_explicit_state() {
        let mut w = widget();
        w.set_query("zzz");
        assert!(w.filtered().is_empty());
        assert!(w.no_results());
    }

    #[test]
    fn empty_query_shows_everything() {
        let w = widget();
        assert_eq!(w.filtered().len(), 3);
        assert!(!w.no_results());
    }

    #[test]
    fn select_commits_value_and_label() {
        let mut w = widget();
        w.set_query("math");
        let value = w.select(0).unwrap();
        assert_eq!(value, json!(1));
        assert_eq!(w.query(), "Mathematics");
        assert_eq!(w.selected_display(), Some("Mathematics"));
        assert!(!w.is_open());
    }

    #[test]
    fn dismiss_closes_without_losing_query() {
        let mut w = widget();
        w.set_query("ph");
        w.dismiss();
        assert!(!w.is_open());
        assert_eq!(w.query(), "ph");
    }

    #[test]
    fn preselect_restores_label_for_existing_value() {
        let mut w = widget();
        w.preselect(&json!(2));
        assert_eq!(w.selected_display(), Some("Physics"));
        assert_eq!(w.query(), "Physics");
    }
}
