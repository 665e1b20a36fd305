//! Identifier-keyed multi-map
//!
//! Keys map to non-empty ordered lists. Removing the last value of a key
//! removes the key, so `has_key` and `get` agree on absence.

use std::collections::HashMap;
use std::sync::Arc;

use wirekit_domain::error::{Error, Result};
use wirekit_domain::{Binding, ServiceIdentifier};

/// Values that remember which module registered them
pub trait ModuleOwned {
    /// Owning module id, if any
    fn module_id(&self) -> Option<&str>;
}

impl ModuleOwned for Binding {
    fn module_id(&self) -> Option<&str> {
        Binding::module_id(self)
    }
}

impl<T: ModuleOwned> ModuleOwned for Arc<T> {
    fn module_id(&self) -> Option<&str> {
        T::module_id(self)
    }
}

/// Multi-map from service identifier to an ordered list of values
#[derive(Debug, Clone)]
pub struct Lookup<T> {
    entries: HashMap<ServiceIdentifier, Vec<T>>,
}

impl<T> Default for Lookup<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<T> Lookup<T> {
    /// Empty lookup
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to the list for `service_identifier`
    pub fn add(&mut self, service_identifier: ServiceIdentifier, value: T) -> Result<()> {
        ensure_valid(&service_identifier)?;
        self.entries.entry(service_identifier).or_default().push(value);
        Ok(())
    }

    /// Values for `service_identifier`
    ///
    /// Fails with `NotFound` when the key is absent; use [`Lookup::has_key`]
    /// or [`Lookup::try_get`] when absence is expected.
    pub fn get(&self, service_identifier: &ServiceIdentifier) -> Result<&[T]> {
        ensure_valid(service_identifier)?;
        self.try_get(service_identifier)
            .ok_or_else(|| Error::not_found(format!("key {service_identifier}")))
    }

    /// Values for `service_identifier`, `None` when absent
    pub fn try_get(&self, service_identifier: &ServiceIdentifier) -> Option<&[T]> {
        self.entries.get(service_identifier).map(Vec::as_slice)
    }

    /// Remove every value for `service_identifier`
    pub fn remove(&mut self, service_identifier: &ServiceIdentifier) -> Result<Vec<T>> {
        ensure_valid(service_identifier)?;
        self.entries
            .remove(service_identifier)
            .ok_or_else(|| Error::not_found(format!("key {service_identifier}")))
    }

    /// Whether `service_identifier` has at least one value
    pub fn has_key(&self, service_identifier: &ServiceIdentifier) -> bool {
        self.entries.contains_key(service_identifier)
    }

    /// Registered keys in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &ServiceIdentifier> {
        self.entries.keys()
    }

    /// Every value of every key
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values().flatten()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key is registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every key
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T: ModuleOwned> Lookup<T> {
    /// Remove values registered by `module_id`, dropping keys left empty
    ///
    /// Returns the number of values removed.
    pub fn remove_by_module_id(&mut self, module_id: &str) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, values| {
            let before = values.len();
            values.retain(|value| value.module_id() != Some(module_id));
            removed += before - values.len();
            !values.is_empty()
        });
        removed
    }
}

fn ensure_valid(service_identifier: &ServiceIdentifier) -> Result<()> {
    if service_identifier.is_valid() {
        Ok(())
    } else {
        Err(Error::invalid_argument(
            "service identifier must not be empty",
        ))
    }
}
