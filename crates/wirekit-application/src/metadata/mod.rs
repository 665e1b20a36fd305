//! Dependency metadata
//!
//! In-memory implementation of the [`DependencyMetadataProvider`] port.
//!
//! [`DependencyMetadataProvider`]: wirekit_domain::ports::DependencyMetadataProvider

pub mod catalog;

pub use catalog::{MetadataCatalog, SharedCatalog};
