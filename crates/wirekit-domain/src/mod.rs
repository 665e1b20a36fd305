//! # Domain Layer
//!
//! Core types of the wirekit planning container. Everything in this crate is
//! pure data plus the interpreter for binding constraints; the planning
//! algorithm itself lives in `wirekit-application`.
//!
//! ## Module Map
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Service identifiers, metadata, targets, dependency descriptors |
//! | [`entities`] | Bindings, constraints, the request tree, plans and contexts |
//! | [`ports`] | Traits the planner consumes (binding source, dependency metadata) |
//! | [`error`] | Domain error type |
//! | [`constants`] | Reserved metadata keys and planning defaults |
//!
//! ## Resolution Tree
//!
//! ```text
//! Context ──owns──▶ Plan ──▶ RequestTree
//!    ▲                │         │
//!    └── context_id ──┘         ├── root Request (Ninja)
//!                               │     ├── Request (Katana)
//!                               │     └── Request (Weapon[]) ── one child per binding
//! ```

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::*;
pub use error::{Error, Result};
pub use value_objects::*;
