//! Campus record engines
//!
//! Three generic components interpret a [`campus_forms::FormSchema`] to run
//! any entity screen without per-entity code:
//!
//! - [`ListEngine`] — fetch a collection, project it through caller-supplied
//!   columns, own create/edit/delete/view transitions.
//! - [`FormEngine`] — resolve descriptors into live inputs, load remote
//!   options, map server validation errors onto fields, submit.
//! - [`DetailEngine`] — read-only projection of one record with type-aware
//!   formatting.
//!
//! The engines talk to the outside world only through the
//! [`campus_api::Api`] and [`Notifier`] traits. Nothing here knows about
//! staff or leave requests; domain knowledge lives in the descriptor arrays.

pub mod detail;
pub mod form;
pub mod list;
pub mod notify;
pub mod options;

pub use detail::DetailEngine;
pub use form::{FormEngine, SubmitOutcome};
pub use list::{Column, DeleteOutcome, ListEngine};
pub use notify::Notifier;
pub use options::load_options;
