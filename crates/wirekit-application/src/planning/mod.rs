//! Planning
//!
//! The planner turns a root binding into a validated request tree; the
//! snapshot module renders finished plans for humans and machines.

pub mod planner;
pub mod snapshot;

pub use planner::Planner;
pub use snapshot::{BindingSummary, PlanSnapshot, RequestSnapshot};
