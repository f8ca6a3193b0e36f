//! Campus Forms
//!
//! Descriptor-driven form model for the campus admin console.
//!
//! A screen is described by a [`FormSchema`]: an ordered list of
//! [`FieldDescriptor`]s plus any [`DerivedField`]s. The engines in
//! `campus-engine` interpret the schema at runtime to produce list, form and
//! detail views for any entity; no entity-specific UI code exists anywhere.
//! Domain knowledge lives entirely in the descriptor arrays, which are static
//! configuration.
//!
//! This crate is pure state and arithmetic: no I/O, no async.

pub mod derived;
pub mod descriptor;
pub mod display;
pub mod resolve;
pub mod search_select;
pub mod state;

pub use derived::{date_range_days, DerivedField};
pub use descriptor::{Conditional, FieldDescriptor, FieldType, FormSchema, SelectOption};
pub use display::format_value;
pub use resolve::{is_visible, resolve_field, Control, ResolvedField};
pub use search_select::SearchSelect;
pub use state::{FormState, ValidationErrors};
