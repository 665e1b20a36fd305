//! Metadata Catalog
//!
//! Holds one [`ClassMetadata`] per known class. A class missing from the
//! catalog, or registered with `injectable = false`, cannot be planned.
//!
//! Class metadata describes code, not a container, so a container and its
//! children share one catalog through [`SharedCatalog`].

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;
use wirekit_domain::ClassMetadata;
use wirekit_domain::ports::DependencyMetadataProvider;

/// Catalog shared between a container and its children
pub type SharedCatalog = Arc<RwLock<MetadataCatalog>>;

/// Class name to constructor descriptors
#[derive(Debug, Clone, Default)]
pub struct MetadataCatalog {
    classes: HashMap<String, Arc<ClassMetadata>>,
}

impl MetadataCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap this catalog so it can be shared with child containers
    pub fn into_shared(self) -> SharedCatalog {
        Arc::new(RwLock::new(self))
    }

    /// Register `metadata`, returning the entry it replaced
    pub fn register(&mut self, metadata: ClassMetadata) -> Option<Arc<ClassMetadata>> {
        debug!(
            class = %metadata.name,
            parameters = metadata.parameters.len(),
            base = metadata.base.as_deref().unwrap_or("-"),
            injectable = metadata.injectable,
            "Class registered"
        );
        self.classes
            .insert(metadata.name.clone(), Arc::new(metadata))
    }

    /// Whether `class` is registered, injectable or not
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains_key(class)
    }

    /// Whether `class` is registered and injectable
    pub fn is_injectable(&self, class: &str) -> bool {
        self.classes
            .get(class)
            .is_some_and(|metadata| metadata.injectable)
    }

    /// Metadata of `class`
    pub fn get(&self, class: &str) -> Option<&ClassMetadata> {
        self.classes.get(class).map(Arc::as_ref)
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no class is registered
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Every registered class in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &ClassMetadata> {
        self.classes.values().map(Arc::as_ref)
    }
}

impl FromIterator<ClassMetadata> for MetadataCatalog {
    fn from_iter<I: IntoIterator<Item = ClassMetadata>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for metadata in iter {
            catalog.register(metadata);
        }
        catalog
    }
}

impl DependencyMetadataProvider for MetadataCatalog {
    fn class_metadata(&self, class: &str) -> Option<Arc<ClassMetadata>> {
        self.classes.get(class).cloned()
    }
}

impl DependencyMetadataProvider for RwLock<MetadataCatalog> {
    fn class_metadata(&self, class: &str) -> Option<Arc<ClassMetadata>> {
        self.read()
            .unwrap_or_else(PoisonError::into_inner)
            .class_metadata(class)
    }
}
