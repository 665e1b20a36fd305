//! Injection targets
//!
//! A target describes one dependency slot: the identifier it needs, the
//! parameter name it was declared with and the metadata used to pick between
//! competing bindings.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::constants::{MULTI_INJECT_TAG, NAMED_TAG, RESERVED_METADATA_KEYS};
use crate::value_objects::{Metadata, ServiceIdentifier};

/// One dependency injection point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Target {
    id: Uuid,
    service_identifier: ServiceIdentifier,
    name: Option<String>,
    metadata: Vec<Metadata>,
}

impl Target {
    /// Create a target for `service_identifier`, optionally carrying the
    /// parameter name it was declared with
    pub fn new(name: Option<&str>, service_identifier: impl Into<ServiceIdentifier>) -> Self {
        Self {
            id: Uuid::new_v4(),
            service_identifier: service_identifier.into(),
            name: name.map(str::to_string),
            metadata: Vec::new(),
        }
    }

    /// Target without a parameter name, as used for root resolution
    pub fn root(service_identifier: impl Into<ServiceIdentifier>) -> Self {
        Self::new(None, service_identifier)
    }

    /// Attach a named tag
    #[must_use]
    pub fn with_named(self, name: impl Into<String>) -> Self {
        self.with_tag(NAMED_TAG, Value::String(name.into()))
    }

    /// Attach an arbitrary tag
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.push(Metadata::new(key, value));
        self
    }

    /// Attach a list of metadata entries
    #[must_use]
    pub fn with_metadata(mut self, metadata: impl IntoIterator<Item = Metadata>) -> Self {
        self.metadata.extend(metadata);
        self
    }

    /// Mark the target as a collection injection point
    #[must_use]
    pub fn into_array(self) -> Self {
        if self.is_array() {
            return self;
        }
        let inner = Value::String(self.service_identifier.to_string());
        self.with_tag(MULTI_INJECT_TAG, inner)
    }

    /// Unique id of this target
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Required identifier
    pub fn service_identifier(&self) -> &ServiceIdentifier {
        &self.service_identifier
    }

    /// Declared parameter name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// All metadata entries
    pub fn metadata(&self) -> &[Metadata] {
        &self.metadata
    }

    /// Whether any entry uses `key`
    pub fn has_tag(&self, key: &str) -> bool {
        self.metadata.iter().any(|m| m.key == key)
    }

    /// Whether the slot expects every matching binding
    pub fn is_array(&self) -> bool {
        self.has_tag(MULTI_INJECT_TAG)
    }

    /// Whether this is a collection slot for exactly `service_identifier`
    pub fn matches_array(&self, service_identifier: &ServiceIdentifier) -> bool {
        self.is_array() && self.service_identifier == *service_identifier
    }

    /// Whether the target carries a named tag
    pub fn is_named(&self) -> bool {
        self.has_tag(NAMED_TAG)
    }

    /// Whether the target carries any user tag
    pub fn is_tagged(&self) -> bool {
        self.metadata
            .iter()
            .any(|m| !RESERVED_METADATA_KEYS.contains(&m.key.as_str()))
    }

    /// Whether the named tag equals `name`
    pub fn matches_named_tag(&self, name: &str) -> bool {
        self.matches_tag(NAMED_TAG, &Value::String(name.to_string()))
    }

    /// Whether an entry with `key` has exactly `value`
    pub fn matches_tag(&self, key: &str, value: &Value) -> bool {
        self.metadata
            .iter()
            .any(|m| m.key == key && m.value == *value)
    }

    /// Value of the named tag
    pub fn named_tag(&self) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.key == NAMED_TAG)
            .and_then(|m| m.value.as_str())
    }

    /// User tags, excluding reserved keys
    pub fn custom_tags(&self) -> impl Iterator<Item = &Metadata> {
        self.metadata
            .iter()
            .filter(|m| !RESERVED_METADATA_KEYS.contains(&m.key.as_str()))
    }
}
