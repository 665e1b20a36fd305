//! Dependency Metadata Interface

use std::sync::Arc;

use crate::value_objects::ClassMetadata;

/// Source of constructor dependency descriptors
///
/// Returns `None` for classes that were never registered. A registered class
/// may still be marked not injectable through [`ClassMetadata::injectable`].
pub trait DependencyMetadataProvider: Send + Sync {
    /// Metadata for the class named `class`
    fn class_metadata(&self, class: &str) -> Option<Arc<ClassMetadata>>;
}
