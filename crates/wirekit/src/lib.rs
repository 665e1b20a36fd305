//! # wirekit
//!
//! A dependency-injection container whose core is a resolution planner:
//! given a root service identifier it builds a validated tree of requests,
//! choosing the binding for every dependency slot and rejecting ambiguous,
//! missing, circular or arity-inconsistent graphs before anything is
//! instantiated.
//!
//! ## Example
//!
//! ```
//! use wirekit::{Binding, ClassMetadata, Container, DependencyDescriptor};
//!
//! let mut container = Container::new();
//! container
//!     .register_class(ClassMetadata::new("Ninja").param(DependencyDescriptor::inject("Weapon")))
//!     .register_class(ClassMetadata::new("Katana"));
//! container.bind(Binding::to_self("Ninja")).unwrap();
//! container.bind(Binding::instance("Weapon", "Katana")).unwrap();
//!
//! let plan = container.plan("Ninja").unwrap();
//! assert_eq!(plan.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - identifiers, bindings, constraints, the request tree, errors and ports
//! - `application` - registry, metadata catalog, planner and container facade
//! - `infrastructure` - configuration, logging and binding manifests
//! - `cli` - the `wirekit` command line tool

pub mod cli;

/// Domain layer - identifiers, bindings and the request tree
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use wirekit_domain::*;
}

/// Application layer - registry, planner and container
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use wirekit_application::*;
}

/// Infrastructure layer - config, logging and manifests
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use wirekit_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the container API at the crate root
pub use application::{Container, ContainerModule, ContainerOptions, PlanSnapshot, Planner};
