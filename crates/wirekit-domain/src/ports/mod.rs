//! Domain Port Interfaces
//!
//! Contracts the planning engine consumes. The application layer provides
//! the in-memory implementations; other hosts can plug in their own.
//!
//! ## Organization
//!
//! - **registry** - Hierarchical binding lookup and identifier naming
//! - **metadata** - Constructor dependency descriptors per class

/// Binding lookup port
pub mod registry;
/// Dependency metadata port
pub mod metadata;

pub use metadata::DependencyMetadataProvider;
pub use registry::BindingSource;
