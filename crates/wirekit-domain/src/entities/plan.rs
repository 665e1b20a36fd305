//! Resolution contexts and plans
//!
//! A [`Context`] is created for every resolution call and owns the [`Plan`]
//! the planner builds for it. The plan refers back to its context by id only,
//! so the pair never forms a reference cycle.

use std::fmt;

use uuid::Uuid;

use crate::entities::{Request, RequestTree};
use crate::ports::BindingSource;

/// Completed resolution tree
#[derive(Debug, Clone)]
pub struct Plan {
    context_id: Uuid,
    requests: RequestTree,
}

impl Plan {
    /// Plan for the context identified by `context_id`
    pub fn new(context_id: Uuid, requests: RequestTree) -> Self {
        Self {
            context_id,
            requests,
        }
    }

    /// Id of the owning context
    pub fn context_id(&self) -> Uuid {
        self.context_id
    }

    /// Root request
    pub fn root_request(&self) -> &Request {
        self.requests.root()
    }

    /// Every request of the plan
    pub fn requests(&self) -> &RequestTree {
        &self.requests
    }

    /// Number of requests in the tree
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Always false; a plan holds at least its root request
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// One resolution invocation
///
/// Borrows the registry it resolves against for the duration of the call.
pub struct Context<'r> {
    id: Uuid,
    registry: &'r dyn BindingSource,
    plan: Option<Plan>,
}

impl<'r> Context<'r> {
    /// Fresh context bound to `registry`
    pub fn new(registry: &'r dyn BindingSource) -> Self {
        Self {
            id: Uuid::new_v4(),
            registry,
            plan: None,
        }
    }

    /// Unique id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Registry this context resolves against
    pub fn registry(&self) -> &'r dyn BindingSource {
        self.registry
    }

    /// Attach `plan`, replacing any previous one, and return it
    pub fn add_plan(&mut self, plan: Plan) -> &Plan {
        self.plan.insert(plan)
    }

    /// Plan produced for this context
    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    /// Take ownership of the plan
    pub fn into_plan(self) -> Option<Plan> {
        self.plan
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("id", &self.id)
            .field("plan", &self.plan.as_ref().map(Plan::len))
            .finish_non_exhaustive()
    }
}
