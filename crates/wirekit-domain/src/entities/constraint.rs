//! Binding constraints
//!
//! Constraints are a small expression language evaluated against a
//! [`RequestView`]. They are plain data, so they can be compared, logged and
//! read from manifests.
//!
//! ```text
//! when = "target_named"      name = "ninja"
//! when = "injected_into"     parent = { service = "Samurai" }
//! when = "any_ancestor_is"   ancestor = { implementation = "Dojo" }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::RequestView;
use crate::value_objects::ServiceIdentifier;

/// Selects requests by what they resolve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeMatcher {
    /// Request resolves this identifier
    Service(ServiceIdentifier),
    /// Request's binding instantiates this class
    Implementation(String),
}

impl TypeMatcher {
    /// Match by identifier
    pub fn service(service_identifier: impl Into<ServiceIdentifier>) -> Self {
        Self::Service(service_identifier.into())
    }

    /// Match by implementation class
    pub fn implementation(name: impl Into<String>) -> Self {
        Self::Implementation(name.into())
    }

    /// Whether `request` resolves what this matcher names
    pub fn matches(&self, request: &RequestView<'_>) -> bool {
        match self {
            Self::Service(id) => request.service_identifier() == id,
            Self::Implementation(name) => request
                .binding()
                .and_then(|binding| binding.kind().instantiable_class())
                .is_some_and(|class| class == name),
        }
    }
}

/// Predicate deciding whether a binding applies to a request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum Constraint {
    /// Always applies
    #[default]
    Always,
    /// Target has named tag `name`
    TargetNamed { name: String },
    /// Target has tag `key` = `value`
    TargetTagged { key: String, value: Value },
    /// Parent request matches
    InjectedInto { parent: TypeMatcher },
    /// Parent request's target has named tag `name`
    ParentNamed { name: String },
    /// Parent request's target has tag `key` = `value`
    ParentTagged { key: String, value: Value },
    /// Some ancestor matches
    AnyAncestorIs { ancestor: TypeMatcher },
    /// No ancestor matches
    NoAncestorIs { ancestor: TypeMatcher },
    /// Some ancestor's target has named tag `name`
    AnyAncestorNamed { name: String },
    /// No ancestor's target has named tag `name`
    NoAncestorNamed { name: String },
    /// Some ancestor's target has tag `key` = `value`
    AnyAncestorTagged { key: String, value: Value },
    /// No ancestor's target has tag `key` = `value`
    NoAncestorTagged { key: String, value: Value },
    /// Some ancestor satisfies the nested constraint
    AnyAncestorMatches { constraint: Box<Constraint> },
    /// No ancestor satisfies the nested constraint
    NoAncestorMatches { constraint: Box<Constraint> },
    /// Negation
    Not { constraint: Box<Constraint> },
    /// Every nested constraint holds
    All { constraints: Vec<Constraint> },
    /// At least one nested constraint holds
    Any { constraints: Vec<Constraint> },
}

impl Constraint {
    /// Evaluate against `request`
    pub fn evaluate(&self, request: &RequestView<'_>) -> bool {
        match self {
            Self::Always => true,
            Self::TargetNamed { name } => request.target().matches_named_tag(name),
            Self::TargetTagged { key, value } => request.target().matches_tag(key, value),
            Self::InjectedInto { parent } => request.parent().is_some_and(|p| parent.matches(&p)),
            Self::ParentNamed { name } => request
                .parent()
                .is_some_and(|p| p.target().matches_named_tag(name)),
            Self::ParentTagged { key, value } => request
                .parent()
                .is_some_and(|p| p.target().matches_tag(key, value)),
            Self::AnyAncestorIs { ancestor } => request.ancestors().any(|a| ancestor.matches(&a)),
            Self::NoAncestorIs { ancestor } => !request.ancestors().any(|a| ancestor.matches(&a)),
            Self::AnyAncestorNamed { name } => request
                .ancestors()
                .any(|a| a.target().matches_named_tag(name)),
            Self::NoAncestorNamed { name } => !request
                .ancestors()
                .any(|a| a.target().matches_named_tag(name)),
            Self::AnyAncestorTagged { key, value } => request
                .ancestors()
                .any(|a| a.target().matches_tag(key, value)),
            Self::NoAncestorTagged { key, value } => !request
                .ancestors()
                .any(|a| a.target().matches_tag(key, value)),
            Self::AnyAncestorMatches { constraint } => {
                request.ancestors().any(|a| constraint.evaluate(&a))
            }
            Self::NoAncestorMatches { constraint } => {
                !request.ancestors().any(|a| constraint.evaluate(&a))
            }
            Self::Not { constraint } => !constraint.evaluate(request),
            Self::All { constraints } => constraints.iter().all(|c| c.evaluate(request)),
            Self::Any { constraints } => constraints.iter().any(|c| c.evaluate(request)),
        }
    }

    /// Whether the constraint accepts every request
    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Self::Always)
    }

    /// Negate this constraint
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not {
            constraint: Box::new(self),
        }
    }
}
