//! Binding registry
//!
//! [`Lookup`] is the multi-map from identifier to bindings; [`BindingRegistry`]
//! adds the parent link that makes registries hierarchical.

pub mod binding_registry;
pub mod lookup;

pub use binding_registry::{BindingRegistry, SharedRegistry, read_level, write_level};
pub use lookup::{Lookup, ModuleOwned};
