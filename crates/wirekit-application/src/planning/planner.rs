//! Planner
//!
//! Builds the request tree for one resolution call. Expansion is depth-first:
//! every dependency slot of an instance binding becomes a child request,
//! and every instance binding chosen for a child is expanded in turn.
//!
//! Expansion runs on an explicit work stack rather than the call stack, so
//! deep graphs end in `PlanningDepthExceeded` and never exhaust the thread
//! stack. The identifiers on the current root-to-leaf path are kept on a
//! separate path stack. A slot whose identifier is already on it is a cycle,
//! and its length bounds the depth of acyclic graphs.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace};
use wirekit_domain::constants::DEFAULT_MAX_PLANNING_DEPTH;
use wirekit_domain::error::{Error, Result};
use wirekit_domain::ports::{BindingSource, DependencyMetadataProvider};
use wirekit_domain::{
    Binding, ClassMetadata, Context, Plan, RequestId, RequestTree, RequestView, ServiceIdentifier,
    Target,
};

/// Resolution planner
///
/// Stateless apart from its configuration; one planner can serve any number
/// of contexts.
#[derive(Clone, Copy)]
pub struct Planner<'m> {
    metadata: &'m dyn DependencyMetadataProvider,
    max_depth: usize,
}

/// Pending unit of expansion work
enum Step {
    /// Resolve `target` as a child of `parent`
    Expand { parent: RequestId, target: Target },
    /// Expand the dependencies of `binding`, chosen for `request`
    ///
    /// Collection targets first place the binding under its own
    /// intermediate request.
    Bind {
        request: RequestId,
        binding: Arc<Binding>,
        collection: Option<Target>,
    },
    /// Every descendant of the innermost path entry is done
    Leave,
}

/// Identifiers on the current root-to-leaf path
struct PathStack {
    order: Vec<ServiceIdentifier>,
    members: HashSet<ServiceIdentifier>,
}

impl PathStack {
    fn new(root: ServiceIdentifier) -> Self {
        Self {
            members: HashSet::from([root.clone()]),
            order: vec![root],
        }
    }

    fn contains(&self, service_identifier: &ServiceIdentifier) -> bool {
        self.members.contains(service_identifier)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn last(&self) -> Option<&ServiceIdentifier> {
        self.order.last()
    }

    fn push(&mut self, service_identifier: ServiceIdentifier) {
        self.members.insert(service_identifier.clone());
        self.order.push(service_identifier);
    }

    fn pop(&mut self) {
        if let Some(service_identifier) = self.order.pop() {
            self.members.remove(&service_identifier);
        }
    }
}

impl<'m> Planner<'m> {
    /// Planner reading constructor descriptors from `metadata`
    pub fn new(metadata: &'m dyn DependencyMetadataProvider) -> Self {
        Self {
            metadata,
            max_depth: DEFAULT_MAX_PLANNING_DEPTH,
        }
    }

    /// Limit the number of identifiers on one root-to-leaf path
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Configured depth limit
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Fresh context resolving against `registry`
    pub fn create_context<'r>(&self, registry: &'r dyn BindingSource) -> Context<'r> {
        Context::new(registry)
    }

    /// Plan the resolution of `binding` for `target` and attach it to `context`
    ///
    /// When the binding instantiates a class, its constructor dependencies
    /// are expanded recursively. On error the context is left without a plan.
    pub fn create_plan<'c>(
        &self,
        context: &'c mut Context<'_>,
        binding: Arc<Binding>,
        target: Target,
    ) -> Result<&'c Plan> {
        let registry = context.registry();
        let service_identifier = binding.service_identifier().clone();
        debug!(
            context = %context.id(),
            service = %registry.service_identifier_as_string(&service_identifier),
            kind = binding.kind().label(),
            "Planning root request"
        );

        let mut requests =
            RequestTree::new(service_identifier.clone(), vec![Arc::clone(&binding)], target);
        let root = Step::Bind {
            request: requests.root_id(),
            binding,
            collection: None,
        };
        self.expand(registry, &mut requests, PathStack::new(service_identifier), root)?;

        debug!(context = %context.id(), requests = requests.len(), "Plan created");
        Ok(context.add_plan(Plan::new(context.id(), requests)))
    }

    /// Bindings of `service_identifier`, falling back to parent levels
    ///
    /// The nearest level holding the key wins; its list is returned whole.
    /// Returns an empty list when no level holds the key.
    pub fn get_bindings(
        &self,
        registry: &dyn BindingSource,
        service_identifier: &ServiceIdentifier,
    ) -> Vec<Arc<Binding>> {
        if let Some(bindings) = registry.local_bindings(service_identifier) {
            return bindings;
        }
        let mut level = registry.parent();
        while let Some(source) = level {
            if let Some(bindings) = source.local_bindings(service_identifier) {
                return bindings;
            }
            level = source.parent();
        }
        Vec::new()
    }

    /// Bindings applicable to `target` when requested under `parent`
    ///
    /// Constraints are only consulted when more than one binding exists and
    /// the target expects a single value. `parent` is `None` at the root and
    /// must otherwise name a request of the given tree.
    pub fn get_active_bindings(
        &self,
        registry: &dyn BindingSource,
        parent: Option<(&RequestTree, RequestId)>,
        target: &Target,
    ) -> Result<Vec<Arc<Binding>>> {
        if let Some((tree, id)) = parent
            && !tree.contains(id)
        {
            return Err(Error::invalid_argument(format!(
                "request {} does not belong to request tree {}",
                id.index(),
                tree.guid()
            )));
        }

        let bindings = self.get_bindings(registry, target.service_identifier());
        if bindings.len() <= 1 || target.is_array() {
            return Ok(bindings);
        }

        let total = bindings.len();
        let active: Vec<_> = bindings
            .into_iter()
            .filter(|binding| {
                let candidate = RequestView::candidate(parent, binding, target);
                binding.constraint().evaluate(&candidate)
            })
            .collect();
        trace!(
            service = %target.service_identifier(),
            total,
            active = active.len(),
            "Constraints applied"
        );
        Ok(active)
    }

    fn expand(
        &self,
        registry: &dyn BindingSource,
        requests: &mut RequestTree,
        mut path: PathStack,
        first: Step,
    ) -> Result<()> {
        let mut pending = vec![first];
        while let Some(step) = pending.pop() {
            match step {
                Step::Expand { parent, target } => {
                    let active = self.select_bindings(registry, requests, parent, &target, &path)?;
                    let service_identifier = target.service_identifier().clone();
                    path.push(service_identifier.clone());

                    let collection = target.is_array().then(|| target.clone());
                    let request =
                        requests.add_child_request(parent, service_identifier, active.clone(), target);
                    pending.push(Step::Leave);
                    pending.extend(active.into_iter().rev().map(|binding| Step::Bind {
                        request,
                        binding,
                        collection: collection.clone(),
                    }));
                }
                Step::Bind {
                    request,
                    binding,
                    collection,
                } => {
                    let owner = match collection {
                        Some(target) => requests.add_child_request(
                            request,
                            binding.service_identifier().clone(),
                            vec![Arc::clone(&binding)],
                            target,
                        ),
                        None => request,
                    };
                    if let Some(class) = binding.kind().instantiable_class() {
                        let dependencies = self.dependencies(class)?;
                        pending.extend(
                            dependencies
                                .into_iter()
                                .rev()
                                .map(|target| Step::Expand { parent: owner, target }),
                        );
                    }
                }
                Step::Leave => path.pop(),
            }
        }
        Ok(())
    }

    /// Single binding, or the full candidate set, for a dependency slot
    fn select_bindings(
        &self,
        registry: &dyn BindingSource,
        requests: &RequestTree,
        parent: RequestId,
        target: &Target,
        path: &PathStack,
    ) -> Result<Vec<Arc<Binding>>> {
        let service_identifier = target.service_identifier();

        if path.contains(service_identifier) {
            let tail = path.last().unwrap_or(service_identifier);
            return Err(Error::circular_dependency(
                registry.service_identifier_as_string(service_identifier),
                registry.service_identifier_as_string(tail),
            ));
        }
        if path.len() >= self.max_depth {
            return Err(Error::planning_depth_exceeded(
                registry.service_identifier_as_string(service_identifier),
                self.max_depth,
            ));
        }

        let active = self.get_active_bindings(registry, Some((requests, parent)), target)?;
        if active.is_empty() {
            return Err(Error::not_registered(
                registry.service_identifier_as_string(service_identifier),
            ));
        }
        if active.len() > 1 && !target.is_array() {
            return Err(Error::ambiguous_match(
                registry.service_identifier_as_string(service_identifier),
            ));
        }

        debug!(
            service = %registry.service_identifier_as_string(service_identifier),
            bindings = active.len(),
            depth = path.len(),
            "Expanding dependency"
        );
        Ok(active)
    }

    /// Targets for the managed constructor parameters of `class`
    fn dependencies(&self, class: &str) -> Result<Vec<Target>> {
        let metadata = self.class_metadata(class)?;
        let targets = Self::targets(&metadata)?;

        let required = self.base_class_dependency_count(&metadata)?;
        let declared = metadata.parameters.len();
        if declared < required {
            return Err(Error::arity_mismatch(class, declared, required));
        }
        Ok(targets)
    }

    fn class_metadata(&self, class: &str) -> Result<Arc<ClassMetadata>> {
        self.metadata
            .class_metadata(class)
            .filter(|metadata| metadata.injectable)
            .ok_or_else(|| Error::missing_injectable(class))
    }

    fn targets(metadata: &ClassMetadata) -> Result<Vec<Target>> {
        let mut targets = Vec::with_capacity(metadata.parameters.len());
        for (index, parameter) in metadata.parameters.iter().enumerate() {
            if parameter.unmanaged {
                continue;
            }
            let target = parameter
                .to_target()
                .ok_or_else(|| Error::missing_inject(metadata.name.as_str(), index))?;
            targets.push(if parameter.multi_inject {
                target.into_array()
            } else {
                target
            });
        }
        Ok(targets)
    }

    /// Managed parameter count of the nearest ancestor declaring any
    ///
    /// Base classes are only probed for their count, so parameters of unknown
    /// type are tolerated there.
    fn base_class_dependency_count(&self, metadata: &ClassMetadata) -> Result<usize> {
        let mut visited = HashSet::from([metadata.name.clone()]);
        let mut base = metadata.base.clone();
        while let Some(name) = base {
            if !visited.insert(name.clone()) {
                return Err(Error::invalid_argument(format!(
                    "class {} has a cyclic base class chain through {name}",
                    metadata.name
                )));
            }
            let base_metadata = self.class_metadata(&name)?;
            let count = base_metadata.managed_count();
            if count > 0 {
                return Ok(count);
            }
            base = base_metadata.base.clone();
        }
        Ok(0)
    }
}

impl std::fmt::Debug for Planner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Planner")
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}
