//! Service identifiers
//!
//! A service identifier is the opaque key a binding is registered under and a
//! target asks for. Three flavours exist:
//!
//! - **Name**: a plain string, equal by value
//! - **Symbol**: a unique token with a description, equal by identity
//! - **Type**: a Rust type token, equal by `TypeId`

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Unique symbolic token
///
/// Two symbols created with the same description are still different
/// identifiers; clones of one symbol compare equal.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: Uuid,
    description: Arc<str>,
}

impl Symbol {
    /// Create a fresh symbol
    pub fn new(description: impl Into<Arc<str>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
        }
    }

    /// Human readable description
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Type token naming a Rust type
#[derive(Debug, Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    /// Token for `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified type name
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path (generic types keep their full name)
    pub fn short_name(&self) -> &'static str {
        if self.name.contains('<') {
            return self.name;
        }
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Key naming a capability in the registry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceIdentifier {
    /// String identifier
    Name(Arc<str>),
    /// Symbolic token
    Symbol(Symbol),
    /// Type token
    Type(TypeToken),
}

impl ServiceIdentifier {
    /// String identifier
    pub fn name(name: impl Into<Arc<str>>) -> Self {
        Self::Name(name.into())
    }

    /// Fresh symbolic identifier
    pub fn symbol(description: impl Into<Arc<str>>) -> Self {
        Self::Symbol(Symbol::new(description))
    }

    /// Type identifier for `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type(TypeToken::of::<T>())
    }

    /// Whether the identifier can be used as a registry key
    ///
    /// Empty string names are rejected.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Name(name) => !name.trim().is_empty(),
            Self::Symbol(_) | Self::Type(_) => true,
        }
    }

    /// The string value when this is a name identifier
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{name}"),
            Self::Symbol(symbol) => write!(f, "Symbol({})", symbol.description()),
            Self::Type(token) => write!(f, "{}", token.short_name()),
        }
    }
}

impl From<&str> for ServiceIdentifier {
    fn from(value: &str) -> Self {
        Self::name(value)
    }
}

impl From<String> for ServiceIdentifier {
    fn from(value: String) -> Self {
        Self::name(value)
    }
}

impl From<Symbol> for ServiceIdentifier {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<TypeToken> for ServiceIdentifier {
    fn from(value: TypeToken) -> Self {
        Self::Type(value)
    }
}

// Identifiers serialize as their display name. Only name identifiers can be
// read back; symbols and type tokens have no stable external form.
impl Serialize for ServiceIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ServiceIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::name(name))
    }
}
