//! Resolution requests
//!
//! Requests form a tree stored in an arena ([`RequestTree`]). Parent and child
//! links are [`RequestId`] indices into that arena, so the tree has no
//! reference cycles and can be walked upward for constraint evaluation.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::entities::Binding;
use crate::value_objects::{ServiceIdentifier, Target};

/// Index of a request inside its tree
///
/// Ids remember the tree that issued them, so an id from another tree is
/// rejected by [`RequestTree::try_get`] instead of aliasing an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RequestId {
    tree: Uuid,
    index: usize,
}

impl RequestId {
    /// Position in the arena
    pub fn index(self) -> usize {
        self.index
    }
}

/// One node of the resolution tree
#[derive(Debug, Clone)]
pub struct Request {
    id: RequestId,
    guid: Uuid,
    service_identifier: ServiceIdentifier,
    parent: Option<RequestId>,
    children: Vec<RequestId>,
    bindings: Vec<Arc<Binding>>,
    target: Target,
}

impl Request {
    /// Arena index
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// Unique id
    pub fn guid(&self) -> Uuid {
        self.guid
    }

    /// Identifier this request resolves
    pub fn service_identifier(&self) -> &ServiceIdentifier {
        &self.service_identifier
    }

    /// Parent request, `None` for the root
    pub fn parent(&self) -> Option<RequestId> {
        self.parent
    }

    /// Child requests in creation order
    pub fn children(&self) -> &[RequestId] {
        &self.children
    }

    /// Matched binding, or the full candidate set for collection targets
    pub fn bindings(&self) -> &[Arc<Binding>] {
        &self.bindings
    }

    /// Target this request satisfies
    pub fn target(&self) -> &Target {
        &self.target
    }
}

/// Arena holding every request of one plan
#[derive(Debug, Clone)]
pub struct RequestTree {
    guid: Uuid,
    nodes: Vec<Request>,
}

impl RequestTree {
    /// Tree containing only the root request
    pub fn new(
        service_identifier: ServiceIdentifier,
        bindings: Vec<Arc<Binding>>,
        target: Target,
    ) -> Self {
        let guid = Uuid::new_v4();
        let root = Request {
            id: RequestId {
                tree: guid,
                index: 0,
            },
            guid: Uuid::new_v4(),
            service_identifier,
            parent: None,
            children: Vec::new(),
            bindings,
            target,
        };
        Self {
            guid,
            nodes: vec![root],
        }
    }

    /// Unique id of the tree
    pub fn guid(&self) -> Uuid {
        self.guid
    }

    /// Id of the root request
    pub fn root_id(&self) -> RequestId {
        self.nodes[0].id
    }

    /// Whether `id` was issued by this tree
    pub fn contains(&self, id: RequestId) -> bool {
        id.tree == self.guid && id.index < self.nodes.len()
    }

    /// Root request
    pub fn root(&self) -> &Request {
        &self.nodes[0]
    }

    /// Request by id
    ///
    /// # Panics
    ///
    /// Panics when `id` was issued by another tree. Use [`Self::try_get`]
    /// for ids of unknown origin.
    pub fn get(&self, id: RequestId) -> &Request {
        assert!(self.contains(id), "request id {id:?} belongs to another tree");
        &self.nodes[id.index]
    }

    /// Request by id, `None` when the id belongs to another tree
    pub fn try_get(&self, id: RequestId) -> Option<&Request> {
        if id.tree == self.guid {
            self.nodes.get(id.index)
        } else {
            None
        }
    }

    /// Create a request under `parent` and return its id
    ///
    /// # Panics
    ///
    /// Panics when `parent` was issued by another tree.
    pub fn add_child_request(
        &mut self,
        parent: RequestId,
        service_identifier: ServiceIdentifier,
        bindings: Vec<Arc<Binding>>,
        target: Target,
    ) -> RequestId {
        assert!(self.contains(parent), "parent id {parent:?} belongs to another tree");
        let id = RequestId {
            tree: self.guid,
            index: self.nodes.len(),
        };
        self.nodes.push(Request {
            id,
            guid: Uuid::new_v4(),
            service_identifier,
            parent: Some(parent),
            children: Vec::new(),
            bindings,
            target,
        });
        self.nodes[parent.index].children.push(id);
        id
    }

    /// Total number of requests
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false; a tree holds at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Every request in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.nodes.iter()
    }

    /// Ancestors of `id`, nearest first
    ///
    /// Empty when `id` belongs to another tree.
    pub fn ancestors(&self, id: RequestId) -> impl Iterator<Item = &Request> {
        let mut next = self.try_get(id).and_then(|request| request.parent);
        std::iter::from_fn(move || {
            let current = self.try_get(next?)?;
            next = current.parent;
            Some(current)
        })
    }

    /// Number of edges between `id` and the root
    pub fn depth(&self, id: RequestId) -> usize {
        self.ancestors(id).count()
    }
}

/// Read-only view of a request used by constraint evaluation
///
/// A view either wraps a request already in a tree or describes a candidate
/// request that has not been attached yet (a binding being tested against a
/// target under some parent).
#[derive(Debug, Clone, Copy)]
pub struct RequestView<'a> {
    service_identifier: &'a ServiceIdentifier,
    bindings: &'a [Arc<Binding>],
    target: &'a Target,
    parent: Option<(&'a RequestTree, RequestId)>,
}

impl<'a> RequestView<'a> {
    /// View of an existing request, `None` when `id` belongs to another tree
    pub fn of(tree: &'a RequestTree, id: RequestId) -> Option<Self> {
        let request = tree.try_get(id)?;
        Some(Self {
            service_identifier: &request.service_identifier,
            bindings: &request.bindings,
            target: &request.target,
            parent: request.parent.map(|parent| (tree, parent)),
        })
    }

    /// Candidate request for `binding` on `target`, placed under `parent`
    ///
    /// `parent` must come from its own tree; a foreign id reads as no parent.
    pub fn candidate(
        parent: Option<(&'a RequestTree, RequestId)>,
        binding: &'a Arc<Binding>,
        target: &'a Target,
    ) -> Self {
        Self {
            service_identifier: binding.service_identifier(),
            bindings: std::slice::from_ref(binding),
            target,
            parent,
        }
    }

    /// Identifier being requested
    pub fn service_identifier(&self) -> &'a ServiceIdentifier {
        self.service_identifier
    }

    /// Bindings attached to the request
    pub fn bindings(&self) -> &'a [Arc<Binding>] {
        self.bindings
    }

    /// First binding, the one type constraints inspect
    pub fn binding(&self) -> Option<&'a Arc<Binding>> {
        self.bindings.first()
    }

    /// Target of the request
    pub fn target(&self) -> &'a Target {
        self.target
    }

    /// Parent request view
    pub fn parent(&self) -> Option<RequestView<'a>> {
        self.parent.and_then(|(tree, id)| RequestView::of(tree, id))
    }

    /// Ancestor views, nearest first
    pub fn ancestors(self) -> impl Iterator<Item = RequestView<'a>> + 'a {
        let mut next = self.parent();
        std::iter::from_fn(move || {
            let current = next?;
            next = current.parent();
            Some(current)
        })
    }
}
