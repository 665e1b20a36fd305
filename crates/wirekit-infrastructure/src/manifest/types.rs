//! Manifest document types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wirekit_domain::{
    Binding, BindingKind, BindingScope, ClassMetadata, Constraint, DependencyDescriptor,
    ServiceIdentifier,
};

/// Whole manifest document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Class declarations
    pub classes: Vec<ClassSpec>,
    /// Bindings registered directly
    pub bindings: Vec<BindingSpec>,
    /// Bindings grouped into modules
    pub modules: Vec<ModuleSpec>,
}

/// One class declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSpec {
    pub name: String,
    #[serde(default)]
    pub base: Option<String>,
    /// Classes declared with `injectable = false` are known but never planned
    #[serde(default = "default_injectable")]
    pub injectable: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

fn default_injectable() -> bool {
    true
}

impl ClassSpec {
    /// Catalog entry for this class
    pub fn to_metadata(&self) -> ClassMetadata {
        ClassMetadata {
            name: self.name.clone(),
            base: self.base.clone(),
            injectable: self.injectable,
            parameters: self
                .parameters
                .iter()
                .map(ParameterSpec::to_descriptor)
                .collect(),
        }
    }
}

/// One constructor parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSpec {
    /// Identifier to inject; omitted for parameters of unknown type
    pub service: Option<String>,
    /// Parameter name
    pub name: Option<String>,
    /// Named tag
    pub named: Option<String>,
    /// User tags
    pub tags: BTreeMap<String, Value>,
    pub unmanaged: bool,
    /// Collection injection point
    pub multi: bool,
}

impl ParameterSpec {
    /// Descriptor for this parameter
    pub fn to_descriptor(&self) -> DependencyDescriptor {
        DependencyDescriptor {
            service_identifier: self.service.as_deref().map(ServiceIdentifier::from),
            parameter_name: self.name.clone(),
            named: self.named.clone(),
            tags: self
                .tags
                .iter()
                .map(|(key, value)| wirekit_domain::Metadata::new(key.as_str(), value.clone()))
                .collect(),
            unmanaged: self.unmanaged,
            multi_inject: self.multi,
        }
    }
}

/// One binding declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingSpec {
    pub service: String,
    #[serde(flatten)]
    pub kind: BindingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<BindingScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<Constraint>,
}

impl BindingSpec {
    /// Binding for this declaration, using `default_scope` when none is given
    pub fn to_binding(&self, default_scope: BindingScope) -> Binding {
        Binding::new(self.service.as_str(), self.kind.clone())
            .in_scope(self.scope.unwrap_or(default_scope))
            .when(self.constraint.clone().unwrap_or_default())
    }
}

/// Named group of bindings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSpec {
    pub id: String,
    #[serde(default)]
    pub bindings: Vec<BindingSpec>,
}
