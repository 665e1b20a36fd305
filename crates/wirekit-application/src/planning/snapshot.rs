//! Plan snapshots
//!
//! A [`PlanSnapshot`] is an owned, serializable copy of a plan's request
//! tree. It is what the CLI prints, either as JSON or as an indented tree:
//!
//! ```text
//! Ninja [instance Ninja, transient]
//! ├── Weapon (named: katana) [instance Katana, singleton]
//! └── Charm[] [2 bindings]
//!     ├── Charm [constant, transient]
//!     └── Charm [constant, transient]
//! ```

use std::fmt::Write as _;

use serde::Serialize;
use uuid::Uuid;
use wirekit_domain::ports::BindingSource;
use wirekit_domain::{Binding, BindingScope, Metadata, Plan, Request, RequestTree};

/// Owned copy of a finished plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSnapshot {
    /// Context that produced the plan
    pub context_id: Uuid,
    /// Number of requests in the tree
    pub request_count: usize,
    /// Root request
    pub root: RequestSnapshot,
}

/// Owned copy of one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSnapshot {
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub named: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Metadata>,
    pub array: bool,
    pub bindings: Vec<BindingSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RequestSnapshot>,
}

/// What a request's binding produces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BindingSummary {
    pub id: Uuid,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    pub scope: BindingScope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

impl BindingSummary {
    fn of(binding: &Binding) -> Self {
        Self {
            id: binding.id(),
            kind: binding.kind().label().to_string(),
            implementation: binding.kind().instantiable_class().map(str::to_string),
            scope: binding.scope(),
            module: binding.module_id().map(str::to_string),
        }
    }
}

impl PlanSnapshot {
    /// Snapshot `plan`, naming identifiers through `registry`
    pub fn capture(plan: &Plan, registry: &dyn BindingSource) -> Self {
        let requests = plan.requests();
        Self {
            context_id: plan.context_id(),
            request_count: requests.len(),
            root: RequestSnapshot::capture(requests, requests.root(), registry),
        }
    }

    /// Render as an indented text tree
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.root.label());
        self.root.render_children(&mut out, "");
        out
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> wirekit_domain::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RequestSnapshot {
    fn capture(tree: &RequestTree, request: &Request, registry: &dyn BindingSource) -> Self {
        let target = request.target();
        Self {
            service: registry.service_identifier_as_string(request.service_identifier()),
            parameter: target.name().map(str::to_string),
            named: target.named_tag().map(str::to_string),
            tags: target.custom_tags().cloned().collect(),
            array: target.is_array(),
            bindings: request
                .bindings()
                .iter()
                .map(|binding| BindingSummary::of(binding))
                .collect(),
            children: request
                .children()
                .iter()
                .map(|&child| Self::capture(tree, tree.get(child), registry))
                .collect(),
        }
    }

    /// Total number of requests in this subtree
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    fn label(&self) -> String {
        let mut label = self.service.clone();
        if self.array && self.bindings.len() > 1 {
            label.push_str("[]");
        }
        if let Some(named) = &self.named {
            let _ = write!(label, " (named: {named})");
        }
        for tag in &self.tags {
            let _ = write!(label, " ({}={})", tag.key, tag.value);
        }
        match self.bindings.as_slice() {
            [binding] => {
                let _ = write!(label, " [{}", binding.kind);
                if let Some(implementation) = &binding.implementation {
                    let _ = write!(label, " {implementation}");
                }
                let _ = write!(label, ", {}]", binding.scope);
            }
            bindings => {
                let _ = write!(label, " [{} bindings]", bindings.len());
            }
        }
        label
    }

    fn render_children(&self, out: &mut String, prefix: &str) {
        let last = self.children.len().saturating_sub(1);
        for (index, child) in self.children.iter().enumerate() {
            let (branch, indent) = if index == last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            let _ = writeln!(out, "{prefix}{branch}{}", child.label());
            child.render_children(out, &format!("{prefix}{indent}"));
        }
    }
}
