//! Application Layer - wirekit
//!
//! Implements the planning container on top of the domain types: the
//! binding registry, the dependency metadata catalog, the planner that turns
//! a root binding into a validated request tree, and the container facade
//! that ties them together.
//!
//! ## Architecture
//!
//! ```text
//! Container ── bind / load / snapshot ──▶ BindingRegistry (Lookup per level)
//!     │
//!     └── plan(id) ──▶ Planner ──▶ Context ──owns──▶ Plan
//!                        │
//!                        └── MetadataCatalog (constructor descriptors)
//! ```
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `wirekit-domain`: identifiers, bindings, the request tree and ports
//! - Pure Rust libraries for logging and serialization

pub mod container;
pub mod metadata;
pub mod planning;
pub mod registry;

pub use container::{Container, ContainerModule, ContainerOptions};
pub use metadata::{MetadataCatalog, SharedCatalog};
pub use planning::{PlanSnapshot, Planner};
pub use registry::{BindingRegistry, Lookup, ModuleOwned, SharedRegistry};
