//! Key/value metadata attached to targets

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One metadata entry on a target
///
/// Values are arbitrary JSON so tags such as `canThrow = true` or
/// `rank = 2` compare by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Metadata key
    pub key: String,
    /// Metadata value
    pub value: Value,
}

impl Metadata {
    /// Create a metadata entry
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
