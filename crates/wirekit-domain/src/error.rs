//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for wirekit
///
/// Planning errors carry the display name of the offending service identifier
/// as produced by the registry, never the raw identifier.
#[derive(Error, Debug)]
pub enum Error {
    /// No active binding exists for a requested identifier
    #[error("No bindings registered for service: {service}")]
    NotRegistered {
        /// Display name of the requested identifier
        service: String,
    },

    /// More than one active binding matched a single-valued target
    #[error("Ambiguous match for service: {service}")]
    AmbiguousMatch {
        /// Display name of the requested identifier
        service: String,
    },

    /// An identifier repeats on one root-to-leaf path of the request tree
    #[error("Circular dependency found between services: {service} and {tail}")]
    CircularDependency {
        /// The identifier that was requested a second time
        service: String,
        /// The identifier of the request that asked for it
        tail: String,
    },

    /// A class has no dependency metadata registered
    #[error("Missing injectable metadata for class: {class}")]
    MissingInjectableAnnotation {
        /// Name of the class
        class: String,
    },

    /// A constructor parameter has no service identifier and is not a base-class probe
    #[error("Missing inject metadata for argument {index} in class {class}")]
    MissingInjectAnnotation {
        /// Name of the class
        class: String,
        /// Zero-based parameter position
        index: usize,
    },

    /// A derived class declares fewer parameters than its ancestor manages
    #[error(
        "The number of constructor arguments in derived class {class} must be >= than the \
         number of constructor arguments of its base class"
    )]
    ArityMismatch {
        /// Name of the derived class
        class: String,
        /// Parameters declared by the derived class
        declared: usize,
        /// Managed parameters required by the nearest declaring ancestor
        required: usize,
    },

    /// An acyclic resolution path grew beyond the configured limit
    #[error("Planning depth limit of {max_depth} exceeded while resolving service: {service}")]
    PlanningDepthExceeded {
        /// Display name of the identifier being expanded when the limit was hit
        service: String,
        /// Configured limit
        max_depth: usize,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Binding manifest could not be read or applied
    #[error("Manifest error: {message}")]
    Manifest {
        /// Description of the manifest error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Planning error creation methods
impl Error {
    /// Create a not registered error
    pub fn not_registered<S: Into<String>>(service: S) -> Self {
        Self::NotRegistered {
            service: service.into(),
        }
    }

    /// Create an ambiguous match error
    pub fn ambiguous_match<S: Into<String>>(service: S) -> Self {
        Self::AmbiguousMatch {
            service: service.into(),
        }
    }

    /// Create a circular dependency error
    pub fn circular_dependency<S: Into<String>, T: Into<String>>(service: S, tail: T) -> Self {
        Self::CircularDependency {
            service: service.into(),
            tail: tail.into(),
        }
    }

    /// Create a missing injectable metadata error
    pub fn missing_injectable<S: Into<String>>(class: S) -> Self {
        Self::MissingInjectableAnnotation {
            class: class.into(),
        }
    }

    /// Create a missing inject metadata error
    pub fn missing_inject<S: Into<String>>(class: S, index: usize) -> Self {
        Self::MissingInjectAnnotation {
            class: class.into(),
            index,
        }
    }

    /// Create an arity mismatch error
    pub fn arity_mismatch<S: Into<String>>(class: S, declared: usize, required: usize) -> Self {
        Self::ArityMismatch {
            class: class.into(),
            declared,
            required,
        }
    }

    /// Create a planning depth error
    pub fn planning_depth_exceeded<S: Into<String>>(service: S, max_depth: usize) -> Self {
        Self::PlanningDepthExceeded {
            service: service.into(),
            max_depth,
        }
    }

    /// Whether this error was raised by the planner (as opposed to I/O or config)
    pub fn is_planning_error(&self) -> bool {
        matches!(
            self,
            Self::NotRegistered { .. }
                | Self::AmbiguousMatch { .. }
                | Self::CircularDependency { .. }
                | Self::MissingInjectableAnnotation { .. }
                | Self::MissingInjectAnnotation { .. }
                | Self::ArityMismatch { .. }
                | Self::PlanningDepthExceeded { .. }
        )
    }
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// I/O, configuration and manifest error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a manifest error
    pub fn manifest<S: Into<String>>(message: S) -> Self {
        Self::Manifest {
            message: message.into(),
            source: None,
        }
    }

    /// Create a manifest error with source
    pub fn manifest_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Manifest {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
