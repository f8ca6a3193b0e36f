//! Derived fields
//!
//! A derived field is recomputed from other fields' current values whenever
//! one of its inputs changes. Rules are declared on the schema, so the
//! engines stay free of entity knowledge; the leave-request day count is just
//! one rule built with [`DerivedField::date_range_days`].

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;

use crate::state::FormState;

type ComputeFn = dyn Fn(&FormState) -> Option<Value> + Send + Sync;

/// One derived-field rule: `target` is recomputed from `inputs`.
#[derive(Clone)]
pub struct DerivedField {
    pub target: String,
    pub inputs: Vec<String>,
    compute: Arc<ComputeFn>,
}

impl DerivedField {
    pub fn new(
        target: impl Into<String>,
        inputs: Vec<String>,
        compute: impl Fn(&FormState) -> Option<Value> + Send + Sync + 'static,
    ) -> Self {
        Self { target: target.into(), inputs, compute: Arc::new(compute) }
    }

    /// Inclusive day count between two date fields, clamped at zero.
    pub fn date_range_days(
        target: impl Into<String>,
        from_field: impl Into<String>,
        to_field: impl Into<String>,
    ) -> Self {
        let from_field = from_field.into();
        let to_field = to_field.into();
        let inputs = vec![from_field.clone(), to_field.clone()];
        Self::new(target, inputs, move |state| {
            let from = state.get(&from_field).and_then(Value::as_str)?;
            let to = state.get(&to_field).and_then(Value::as_str)?;
            date_range_days(from, to).map(Value::from)
        })
    }

    pub fn depends_on(&self, field: &str) -> bool {
        self.inputs.iter().any(|i| i == field)
    }

    pub fn compute(&self, state: &FormState) -> Option<Value> {
        (self.compute)(state)
    }
}

impl fmt::Debug for DerivedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedField")
            .field("target", &self.target)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

/// Inclusive number of days in `[from, to]`, or 0 when `to` precedes `from`.
///
/// Returns `None` when either side is not a parseable `YYYY-MM-DD` date, so a
/// half-filled form leaves the target untouched.
pub fn date_range_days(from: &str, to: &str) -> Option<i64> {
    let from = NaiveDate::parse_from_str(from, "%Y-%m-%d").ok()?;
    let to = NaiveDate::parse_from_str(to, "%Y-%m-%d").ok()?;
    let days = (to - from).num_days() + 1;
    Some(days.max(0))
}
