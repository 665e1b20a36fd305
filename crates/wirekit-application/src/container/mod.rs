//! Container facade
//!
//! Ties the registry, the metadata catalog and the planner together and
//! exposes root-level planning.

pub mod facade;
pub mod module;

pub use facade::{Container, ContainerOptions};
pub use module::ContainerModule;
