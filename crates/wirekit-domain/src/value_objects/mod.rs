//! Value Objects
//!
//! Immutable values describing what is being requested: identifiers,
//! metadata, targets and declared constructor dependencies.

pub mod dependency;
pub mod metadata;
pub mod service_identifier;
pub mod target;

pub use dependency::{ClassMetadata, DependencyDescriptor};
pub use metadata::Metadata;
pub use service_identifier::{ServiceIdentifier, Symbol, TypeToken};
pub use target::Target;
