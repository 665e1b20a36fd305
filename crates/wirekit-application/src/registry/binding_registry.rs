//! Hierarchical binding registry

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;
use uuid::Uuid;
use wirekit_domain::error::Result;
use wirekit_domain::ports::BindingSource;
use wirekit_domain::{Binding, ServiceIdentifier};

use crate::registry::Lookup;

/// Registry level shared between a container and its children
pub type SharedRegistry = Arc<RwLock<BindingRegistry>>;

/// One level of bindings with an optional parent level
///
/// A child holds the parent level itself, not a copy, so bindings added to
/// or removed from the parent are seen by every later lookup in the child.
#[derive(Debug, Clone)]
pub struct BindingRegistry {
    id: Uuid,
    bindings: Lookup<Arc<Binding>>,
    parent: Option<SharedRegistry>,
}

impl Default for BindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingRegistry {
    /// Empty root registry
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            bindings: Lookup::new(),
            parent: None,
        }
    }

    /// Empty registry falling back to `parent`
    pub fn with_parent(parent: SharedRegistry) -> Self {
        Self {
            parent: Some(parent),
            ..Self::new()
        }
    }

    /// Wrap this level so it can be shared with child levels
    pub fn into_shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Unique id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Register a binding under its own identifier
    pub fn add(&mut self, binding: Binding) -> Result<Arc<Binding>> {
        let binding = Arc::new(binding);
        self.bindings
            .add(binding.service_identifier().clone(), Arc::clone(&binding))?;
        debug!(
            service = %binding.service_identifier(),
            kind = binding.kind().label(),
            "Binding registered"
        );
        Ok(binding)
    }

    /// Local bindings of this level
    pub fn bindings(&self) -> &Lookup<Arc<Binding>> {
        &self.bindings
    }

    /// Mutable access to the local bindings
    pub fn bindings_mut(&mut self) -> &mut Lookup<Arc<Binding>> {
        &mut self.bindings
    }

    /// Replace the local bindings, keeping the parent link
    pub fn replace_bindings(&mut self, bindings: Lookup<Arc<Binding>>) {
        self.bindings = bindings;
    }

    /// Parent level
    pub fn parent_registry(&self) -> Option<&SharedRegistry> {
        self.parent.as_ref()
    }

    /// Whether `service_identifier` is bound at this level
    pub fn has_local(&self, service_identifier: &ServiceIdentifier) -> bool {
        self.bindings.has_key(service_identifier)
    }
}

/// Read access to a shared level, recovering from poisoning
pub fn read_level(registry: &RwLock<BindingRegistry>) -> RwLockReadGuard<'_, BindingRegistry> {
    registry.read().unwrap_or_else(PoisonError::into_inner)
}

/// Write access to a shared level
pub fn write_level(registry: &RwLock<BindingRegistry>) -> RwLockWriteGuard<'_, BindingRegistry> {
    registry.write().unwrap_or_else(PoisonError::into_inner)
}

fn shared_parent(parent: Option<&SharedRegistry>) -> Option<Arc<dyn BindingSource>> {
    parent.map(|parent| Arc::clone(parent) as Arc<dyn BindingSource>)
}

impl BindingSource for BindingRegistry {
    fn local_bindings(&self, service_identifier: &ServiceIdentifier) -> Option<Vec<Arc<Binding>>> {
        self.bindings.try_get(service_identifier).map(<[_]>::to_vec)
    }

    fn parent(&self) -> Option<Arc<dyn BindingSource>> {
        shared_parent(self.parent.as_ref())
    }
}

impl BindingSource for RwLock<BindingRegistry> {
    fn local_bindings(&self, service_identifier: &ServiceIdentifier) -> Option<Vec<Arc<Binding>>> {
        read_level(self).local_bindings(service_identifier)
    }

    fn parent(&self) -> Option<Arc<dyn BindingSource>> {
        shared_parent(read_level(self).parent.as_ref())
    }
}
