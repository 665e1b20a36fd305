//! Entities
//!
//! Bindings and their constraints, plus the per-call resolution structures
//! (requests, plans, contexts).

pub mod binding;
pub mod constraint;
pub mod plan;
pub mod request;

pub use binding::{Binding, BindingKind, BindingScope};
pub use constraint::{Constraint, TypeMatcher};
pub use plan::{Context, Plan};
pub use request::{Request, RequestId, RequestTree, RequestView};
