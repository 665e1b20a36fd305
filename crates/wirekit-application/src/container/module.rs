//! Container modules
//!
//! A module is a named group of bindings loaded and unloaded as a unit.

use uuid::Uuid;
use wirekit_domain::Binding;

/// Group of bindings sharing an owner id
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerModule {
    id: String,
    bindings: Vec<Binding>,
}

impl ContainerModule {
    /// Empty module with the given id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bindings: Vec::new(),
        }
    }

    /// Empty module with a generated id
    pub fn anonymous() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    /// Add a binding
    #[must_use]
    pub fn bind(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Add a binding in place
    pub fn push(&mut self, binding: Binding) {
        self.bindings.push(binding);
    }

    /// Module id stamped on every binding it registers
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Bindings in registration order
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
}
