//! Dependency descriptors
//!
//! Constructor dependencies are declared up front instead of being discovered
//! through reflection. Each instantiable class registers a [`ClassMetadata`]
//! holding one [`DependencyDescriptor`] per constructor parameter, in order,
//! plus the name of its base class when it has one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{INJECT_TAG, MULTI_INJECT_TAG, NAME_TAG, NAMED_TAG, UNMANAGED_TAG};
use crate::value_objects::{Metadata, ServiceIdentifier, Target};

/// One constructor parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyDescriptor {
    /// Identifier to inject; `None` when the parameter type cannot be determined
    pub service_identifier: Option<ServiceIdentifier>,
    /// Declared parameter name
    pub parameter_name: Option<String>,
    /// Named tag used for disambiguation
    pub named: Option<String>,
    /// Additional user tags
    pub tags: Vec<Metadata>,
    /// Supplied by the caller rather than the container
    pub unmanaged: bool,
    /// Collection injection point
    pub multi_inject: bool,
}

impl DependencyDescriptor {
    /// Parameter resolved from `service_identifier`
    pub fn inject(service_identifier: impl Into<ServiceIdentifier>) -> Self {
        Self {
            service_identifier: Some(service_identifier.into()),
            ..Self::default()
        }
    }

    /// Collection parameter receiving every binding of `service_identifier`
    pub fn multi_inject(service_identifier: impl Into<ServiceIdentifier>) -> Self {
        Self {
            service_identifier: Some(service_identifier.into()),
            multi_inject: true,
            ..Self::default()
        }
    }

    /// Parameter the container does not manage
    pub fn unmanaged() -> Self {
        Self {
            unmanaged: true,
            ..Self::default()
        }
    }

    /// Parameter whose type could not be determined
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Set the parameter name
    #[must_use]
    pub fn with_parameter_name(mut self, name: impl Into<String>) -> Self {
        self.parameter_name = Some(name.into());
        self
    }

    /// Set the named tag
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named = Some(name.into());
        self
    }

    /// Add a user tag
    #[must_use]
    pub fn tagged(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.tags.push(Metadata::new(key, value));
        self
    }

    /// Metadata list describing this parameter, reserved markers included
    pub fn to_metadata(&self) -> Vec<Metadata> {
        let mut metadata = Vec::with_capacity(self.tags.len() + 3);
        if let Some(id) = &self.service_identifier {
            let key = if self.multi_inject {
                MULTI_INJECT_TAG
            } else {
                INJECT_TAG
            };
            metadata.push(Metadata::new(key, id.to_string()));
        }
        if let Some(name) = &self.parameter_name {
            metadata.push(Metadata::new(NAME_TAG, name.clone()));
        }
        if let Some(named) = &self.named {
            metadata.push(Metadata::new(NAMED_TAG, named.clone()));
        }
        if self.unmanaged {
            metadata.push(Metadata::new(UNMANAGED_TAG, true));
        }
        metadata.extend(self.tags.iter().cloned());
        metadata
    }

    /// Build the injection target for this parameter
    ///
    /// Returns `None` when the parameter has no identifier.
    pub fn to_target(&self) -> Option<Target> {
        let id = self.service_identifier.clone()?;
        Some(Target::new(self.parameter_name.as_deref(), id).with_metadata(self.to_metadata()))
    }
}

/// Dependency metadata for one instantiable class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetadata {
    /// Class name, the key implementations refer to
    pub name: String,
    /// Name of the base class, if any
    #[serde(default)]
    pub base: Option<String>,
    /// Whether the container may instantiate the class
    #[serde(default = "default_injectable")]
    pub injectable: bool,
    /// Constructor parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<DependencyDescriptor>,
}

impl ClassMetadata {
    /// Class with no parameters and no base
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            injectable: true,
            parameters: Vec::new(),
        }
    }

    /// Mark the class as not injectable
    ///
    /// Planning the class, or probing it as a base class, then raises
    /// `MissingInjectableAnnotation`.
    #[must_use]
    pub fn not_injectable(mut self) -> Self {
        self.injectable = false;
        self
    }

    /// Set the base class
    #[must_use]
    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Append a constructor parameter
    #[must_use]
    pub fn param(mut self, descriptor: DependencyDescriptor) -> Self {
        self.parameters.push(descriptor);
        self
    }

    /// Number of parameters the container must supply
    pub fn managed_count(&self) -> usize {
        self.parameters.iter().filter(|p| !p.unmanaged).count()
    }
}

fn default_injectable() -> bool {
    true
}
