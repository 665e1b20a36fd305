//! Container
//!
//! Owns one registry level, the metadata catalog and the planning options.
//! Both are shared with child containers, which see later changes to their
//! parents. Lookups take a short read lock per level and never hold it across
//! a call into another level.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLockReadGuard};

use serde_json::Value;
use tracing::{debug, info};
use uuid::Uuid;
use wirekit_domain::constants::DEFAULT_MAX_PLANNING_DEPTH;
use wirekit_domain::error::{Error, Result};
use wirekit_domain::ports::BindingSource;
use wirekit_domain::{Binding, ClassMetadata, Plan, ServiceIdentifier, Target};

use crate::container::ContainerModule;
use crate::metadata::{MetadataCatalog, SharedCatalog};
use crate::planning::Planner;
use crate::registry::{BindingRegistry, Lookup, SharedRegistry, read_level, write_level};

/// Planning options applied to every resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerOptions {
    /// Maximum identifiers on one root-to-leaf path
    pub max_depth: usize,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_PLANNING_DEPTH,
        }
    }
}

/// Dependency container
#[derive(Debug)]
pub struct Container {
    id: Uuid,
    options: ContainerOptions,
    registry: SharedRegistry,
    catalog: SharedCatalog,
    snapshots: Vec<Lookup<Arc<Binding>>>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// Empty container with default options
    pub fn new() -> Self {
        Self::with_options(ContainerOptions::default())
    }

    /// Empty container with `options`
    pub fn with_options(options: ContainerOptions) -> Self {
        Self::from_parts(
            options,
            BindingRegistry::new().into_shared(),
            MetadataCatalog::new().into_shared(),
        )
    }

    fn from_parts(options: ContainerOptions, registry: SharedRegistry, catalog: SharedCatalog) -> Self {
        Self {
            id: Uuid::new_v4(),
            options,
            registry,
            catalog,
            snapshots: Vec::new(),
        }
    }

    /// Unique id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Planning options
    pub fn options(&self) -> ContainerOptions {
        self.options
    }

    /// Local registry level, falling back to its parents
    pub fn registry(&self) -> &dyn BindingSource {
        &*self.registry
    }

    /// Dependency metadata, shared with parents and children
    pub fn catalog(&self) -> RwLockReadGuard<'_, MetadataCatalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register the dependency metadata of a class
    pub fn register_class(&mut self, metadata: ClassMetadata) -> &mut Self {
        self.catalog
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register(metadata);
        self
    }

    /// Planner configured for this container
    pub fn planner(&self) -> Planner<'_> {
        Planner::new(&*self.catalog).with_max_depth(self.options.max_depth)
    }

    // ------------------------------------------------------------------
    // Registration
    // ------------------------------------------------------------------

    /// Register a binding
    pub fn bind(&mut self, binding: Binding) -> Result<Arc<Binding>> {
        write_level(&self.registry).add(binding)
    }

    /// Remove every local binding of `service_identifier`
    pub fn unbind(&mut self, service_identifier: &ServiceIdentifier) -> Result<()> {
        let name = self.display_name(service_identifier);
        write_level(&self.registry)
            .bindings_mut()
            .remove(service_identifier)
            .map_err(|_| Error::not_found(format!("bindings for {name}")))?;
        debug!(service = %name, "Service unbound");
        Ok(())
    }

    /// Remove every local binding
    pub fn unbind_all(&mut self) {
        write_level(&self.registry).bindings_mut().clear();
        debug!(container = %self.id, "All services unbound");
    }

    /// Whether `service_identifier` is bound here or in a parent
    pub fn is_bound(&self, service_identifier: &ServiceIdentifier) -> bool {
        !self
            .planner()
            .get_bindings(self.registry(), service_identifier)
            .is_empty()
    }

    /// Whether `service_identifier` is bound at this level
    pub fn is_bound_locally(&self, service_identifier: &ServiceIdentifier) -> bool {
        read_level(&self.registry).has_local(service_identifier)
    }

    /// Bindings of `service_identifier` at this level, empty when absent
    pub fn local_bindings(&self, service_identifier: &ServiceIdentifier) -> Vec<Arc<Binding>> {
        self.registry()
            .local_bindings(service_identifier)
            .unwrap_or_default()
    }

    /// Identifiers bound at any level, sorted by display name
    pub fn bound_identifiers(&self) -> Vec<ServiceIdentifier> {
        let mut seen = HashSet::new();
        let mut identifiers = Vec::new();
        let mut level = Some(Arc::clone(&self.registry));
        while let Some(shared) = level {
            let registry = read_level(&shared);
            for id in registry.bindings().keys() {
                if seen.insert(id.clone()) {
                    identifiers.push(id.clone());
                }
            }
            level = registry.parent_registry().cloned();
        }
        identifiers.sort_by_cached_key(|id| self.display_name(id));
        identifiers
    }

    /// Register every binding of `modules`, stamped with the module id
    pub fn load(&mut self, modules: &[ContainerModule]) -> Result<()> {
        for module in modules {
            let mut registry = write_level(&self.registry);
            for binding in module.bindings() {
                registry.add(binding.clone().in_module(module.id()))?;
            }
            drop(registry);
            info!(module = module.id(), bindings = module.bindings().len(), "Module loaded");
        }
        Ok(())
    }

    /// Remove the bindings registered by `modules`
    pub fn unload(&mut self, modules: &[ContainerModule]) {
        for module in modules {
            let removed = write_level(&self.registry)
                .bindings_mut()
                .remove_by_module_id(module.id());
            info!(module = module.id(), removed, "Module unloaded");
        }
    }

    /// Push a copy of the local bindings
    pub fn snapshot(&mut self) {
        let bindings = read_level(&self.registry).bindings().clone();
        self.snapshots.push(bindings);
        debug!(depth = self.snapshots.len(), "Registry snapshot taken");
    }

    /// Restore the most recent snapshot
    pub fn restore(&mut self) -> Result<()> {
        let bindings = self
            .snapshots
            .pop()
            .ok_or_else(|| Error::not_found("registry snapshot"))?;
        write_level(&self.registry).replace_bindings(bindings);
        debug!(depth = self.snapshots.len(), "Registry snapshot restored");
        Ok(())
    }

    /// Child container falling back to this one
    ///
    /// The child holds this container's registry level and catalog, so
    /// bindings and classes registered here later are visible to it, and
    /// bindings removed here stop resolving there.
    pub fn create_child(&self) -> Container {
        let child = Self::from_parts(
            self.options,
            BindingRegistry::with_parent(Arc::clone(&self.registry)).into_shared(),
            Arc::clone(&self.catalog),
        );
        info!(parent = %self.id, child = %child.id, "Child container created");
        child
    }

    /// Display name of `service_identifier`
    pub fn display_name(&self, service_identifier: &ServiceIdentifier) -> String {
        self.registry().service_identifier_as_string(service_identifier)
    }

    // ------------------------------------------------------------------
    // Planning
    // ------------------------------------------------------------------

    /// Plan the single binding of `service_identifier`
    pub fn plan(&self, service_identifier: impl Into<ServiceIdentifier>) -> Result<Plan> {
        self.plan_target(Target::root(service_identifier))
    }

    /// Plan the binding whose constraint accepts named tag `name`
    pub fn plan_named(
        &self,
        service_identifier: impl Into<ServiceIdentifier>,
        name: impl Into<String>,
    ) -> Result<Plan> {
        self.plan_target(Target::root(service_identifier).with_named(name))
    }

    /// Plan the binding whose constraint accepts tag `key` = `value`
    pub fn plan_tagged(
        &self,
        service_identifier: impl Into<ServiceIdentifier>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Plan> {
        self.plan_target(Target::root(service_identifier).with_tag(key, value))
    }

    /// Plan every binding of `service_identifier`, one context each
    pub fn plan_all(&self, service_identifier: impl Into<ServiceIdentifier>) -> Result<Vec<Plan>> {
        let target = Target::root(service_identifier);
        let planner = self.planner();
        let bindings = planner.get_bindings(self.registry(), target.service_identifier());
        if bindings.is_empty() {
            return Err(Error::not_registered(
                self.display_name(target.service_identifier()),
            ));
        }
        bindings
            .into_iter()
            .map(|binding| self.plan_binding(&planner, binding, target.clone()))
            .collect()
    }

    /// Plan an arbitrary root target
    ///
    /// Root selection follows the same rules as dependency slots: constraints
    /// narrow several bindings down, and anything other than exactly one
    /// remaining binding is an error.
    pub fn plan_target(&self, target: Target) -> Result<Plan> {
        let planner = self.planner();
        let mut active = planner.get_active_bindings(self.registry(), None, &target)?;
        match active.len() {
            0 => Err(Error::not_registered(
                self.display_name(target.service_identifier()),
            )),
            1 => {
                let binding = active.remove(0);
                self.plan_binding(&planner, binding, target)
            }
            _ if target.is_array() => Err(Error::invalid_argument(format!(
                "collection root for {} must be planned with plan_all",
                self.display_name(target.service_identifier())
            ))),
            _ => Err(Error::ambiguous_match(
                self.display_name(target.service_identifier()),
            )),
        }
    }

    fn plan_binding(
        &self,
        planner: &Planner<'_>,
        binding: Arc<Binding>,
        target: Target,
    ) -> Result<Plan> {
        let mut context = planner.create_context(self.registry());
        planner.create_plan(&mut context, binding, target)?;
        context
            .into_plan()
            .ok_or_else(|| Error::internal("context finished without a plan"))
    }
}
