//! Bindings
//!
//! A binding is one registered production strategy for a service identifier.
//! Several bindings may share an identifier; constraints decide which of them
//! applies to a given request.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::entities::constraint::{Constraint, TypeMatcher};
use crate::value_objects::ServiceIdentifier;

/// How a binding produces its value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BindingKind {
    /// Instantiate a class; its constructor dependencies are planned
    Instance {
        /// Class name registered in the dependency metadata
        implementation: String,
    },
    /// Fixed value
    ConstantValue,
    /// Value computed on every activation
    DynamicValue,
    /// Hand out a class constructor without instantiating it
    Constructor {
        /// Class name handed out
        implementation: String,
    },
    /// Factory creator receiving the activation context
    Factory,
    /// Plain function value
    Function,
    /// Factory resolving another identifier on demand
    AutoFactory {
        /// Identifier the generated factory resolves
        target: ServiceIdentifier,
    },
    /// Provider creator returning a deferred value
    Provider,
}

impl BindingKind {
    /// Short label used in logs and rendered plans
    pub fn label(&self) -> &'static str {
        match self {
            Self::Instance { .. } => "instance",
            Self::ConstantValue => "constant",
            Self::DynamicValue => "dynamic",
            Self::Constructor { .. } => "constructor",
            Self::Factory => "factory",
            Self::Function => "function",
            Self::AutoFactory { .. } => "auto-factory",
            Self::Provider => "provider",
        }
    }

    /// Class name when the binding instantiates a class
    pub fn instantiable_class(&self) -> Option<&str> {
        match self {
            Self::Instance { implementation } => Some(implementation),
            _ => None,
        }
    }
}

/// Lifetime of activated values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingScope {
    /// A new value per resolution
    #[default]
    Transient,
    /// One value per container
    Singleton,
}

impl fmt::Display for BindingScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transient => write!(f, "transient"),
            Self::Singleton => write!(f, "singleton"),
        }
    }
}

/// A registered production strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    id: Uuid,
    service_identifier: ServiceIdentifier,
    kind: BindingKind,
    scope: BindingScope,
    constraint: Constraint,
    module_id: Option<String>,
}

impl Binding {
    /// Binding of `service_identifier` with the given kind, transient and unconstrained
    pub fn new(service_identifier: impl Into<ServiceIdentifier>, kind: BindingKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            service_identifier: service_identifier.into(),
            kind,
            scope: BindingScope::default(),
            constraint: Constraint::Always,
            module_id: None,
        }
    }

    /// Bind to a class instantiated with its declared dependencies
    pub fn instance(
        service_identifier: impl Into<ServiceIdentifier>,
        implementation: impl Into<String>,
    ) -> Self {
        Self::new(
            service_identifier,
            BindingKind::Instance {
                implementation: implementation.into(),
            },
        )
    }

    /// Bind to a class registered under its own name
    pub fn to_self(implementation: impl Into<String>) -> Self {
        let implementation = implementation.into();
        Self::instance(implementation.clone(), implementation)
    }

    /// Bind to a constant value
    pub fn constant(service_identifier: impl Into<ServiceIdentifier>) -> Self {
        Self::new(service_identifier, BindingKind::ConstantValue)
    }

    /// Bind to a dynamic value
    pub fn dynamic_value(service_identifier: impl Into<ServiceIdentifier>) -> Self {
        Self::new(service_identifier, BindingKind::DynamicValue)
    }

    /// Bind to a constructor
    pub fn constructor(
        service_identifier: impl Into<ServiceIdentifier>,
        implementation: impl Into<String>,
    ) -> Self {
        Self::new(
            service_identifier,
            BindingKind::Constructor {
                implementation: implementation.into(),
            },
        )
    }

    /// Bind to a factory
    pub fn factory(service_identifier: impl Into<ServiceIdentifier>) -> Self {
        Self::new(service_identifier, BindingKind::Factory)
    }

    /// Bind to a function
    pub fn function(service_identifier: impl Into<ServiceIdentifier>) -> Self {
        Self::new(service_identifier, BindingKind::Function)
    }

    /// Bind to an automatic factory for `target`
    pub fn auto_factory(
        service_identifier: impl Into<ServiceIdentifier>,
        target: impl Into<ServiceIdentifier>,
    ) -> Self {
        Self::new(
            service_identifier,
            BindingKind::AutoFactory {
                target: target.into(),
            },
        )
    }

    /// Bind to a provider
    pub fn provider(service_identifier: impl Into<ServiceIdentifier>) -> Self {
        Self::new(service_identifier, BindingKind::Provider)
    }

    /// Use singleton scope
    #[must_use]
    pub fn in_singleton_scope(mut self) -> Self {
        self.scope = BindingScope::Singleton;
        self
    }

    /// Use transient scope
    #[must_use]
    pub fn in_transient_scope(mut self) -> Self {
        self.scope = BindingScope::Transient;
        self
    }

    /// Use the given scope
    #[must_use]
    pub fn in_scope(mut self, scope: BindingScope) -> Self {
        self.scope = scope;
        self
    }

    /// Replace the constraint
    #[must_use]
    pub fn when(mut self, constraint: Constraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Applies when the target carries named tag `name`
    #[must_use]
    pub fn when_target_named(self, name: impl Into<String>) -> Self {
        self.when(Constraint::TargetNamed { name: name.into() })
    }

    /// Applies when the target carries tag `key` = `value`
    #[must_use]
    pub fn when_target_tagged(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.when(Constraint::TargetTagged {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Applies when injected directly into `parent`
    #[must_use]
    pub fn when_injected_into(self, parent: TypeMatcher) -> Self {
        self.when(Constraint::InjectedInto { parent })
    }

    /// Applies when the parent request's target is named `name`
    #[must_use]
    pub fn when_parent_named(self, name: impl Into<String>) -> Self {
        self.when(Constraint::ParentNamed { name: name.into() })
    }

    /// Applies when the parent request's target carries tag `key` = `value`
    #[must_use]
    pub fn when_parent_tagged(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.when(Constraint::ParentTagged {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Applies when some ancestor matches `ancestor`
    #[must_use]
    pub fn when_any_ancestor_is(self, ancestor: TypeMatcher) -> Self {
        self.when(Constraint::AnyAncestorIs { ancestor })
    }

    /// Applies when no ancestor matches `ancestor`
    #[must_use]
    pub fn when_no_ancestor_is(self, ancestor: TypeMatcher) -> Self {
        self.when(Constraint::NoAncestorIs { ancestor })
    }

    /// Applies when some ancestor's target is named `name`
    #[must_use]
    pub fn when_any_ancestor_named(self, name: impl Into<String>) -> Self {
        self.when(Constraint::AnyAncestorNamed { name: name.into() })
    }

    /// Applies when no ancestor's target is named `name`
    #[must_use]
    pub fn when_no_ancestor_named(self, name: impl Into<String>) -> Self {
        self.when(Constraint::NoAncestorNamed { name: name.into() })
    }

    /// Applies when some ancestor's target carries tag `key` = `value`
    #[must_use]
    pub fn when_any_ancestor_tagged(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.when(Constraint::AnyAncestorTagged {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Applies when no ancestor's target carries tag `key` = `value`
    #[must_use]
    pub fn when_no_ancestor_tagged(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.when(Constraint::NoAncestorTagged {
            key: key.into(),
            value: value.into(),
        })
    }

    /// Applies when some ancestor request satisfies `constraint`
    #[must_use]
    pub fn when_any_ancestor_matches(self, constraint: Constraint) -> Self {
        self.when(Constraint::AnyAncestorMatches {
            constraint: Box::new(constraint),
        })
    }

    /// Applies when no ancestor request satisfies `constraint`
    #[must_use]
    pub fn when_no_ancestor_matches(self, constraint: Constraint) -> Self {
        self.when(Constraint::NoAncestorMatches {
            constraint: Box::new(constraint),
        })
    }

    /// Stamp the owning module
    #[must_use]
    pub fn in_module(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = Some(module_id.into());
        self
    }

    /// Unique id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Identifier this binding is registered under
    pub fn service_identifier(&self) -> &ServiceIdentifier {
        &self.service_identifier
    }

    /// Production strategy
    pub fn kind(&self) -> &BindingKind {
        &self.kind
    }

    /// Activation scope
    pub fn scope(&self) -> BindingScope {
        self.scope
    }

    /// Constraint deciding whether the binding applies
    pub fn constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// Owning module, if registered through one
    pub fn module_id(&self) -> Option<&str> {
        self.module_id.as_deref()
    }

    /// Whether the planner expands constructor dependencies for this binding
    pub fn is_instantiable(&self) -> bool {
        matches!(self.kind, BindingKind::Instance { .. })
    }
}
