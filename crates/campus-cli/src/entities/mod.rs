//! Entity configuration
//!
//! Each module is nothing but a descriptor array, a column projection and an
//! endpoint. Adding a screen to the console means adding a function here;
//! the engines do the rest.

mod contracts;
mod job_postings;
mod leave_requests;
mod planner_entries;
mod staff;
mod vendors;
mod visitor_logs;

pub use contracts::contracts;
pub use job_postings::job_postings;
pub use leave_requests::leave_requests;
pub use planner_entries::planner_entries;
pub use staff::staff;
pub use vendors::vendors;
pub use visitor_logs::visitor_logs;

use campus_engine::Column;
use campus_forms::FormSchema;

/// Everything the command layer needs to run one entity's screens.
pub struct EntityConfig {
    pub endpoint: &'static str,
    pub schema: FormSchema,
    pub columns: Vec<Column>,
}
