//! Binding Source Interface
//!
//! A binding source is one level of a hierarchical registry. Lookups are
//! local; the planner walks `parent()` itself when a key is absent.
//!
//! Levels may be shared with other owners and mutated between lookups, so
//! both methods hand out owned values rather than borrows into the level.

use std::sync::Arc;

use crate::entities::Binding;
use crate::value_objects::ServiceIdentifier;

// ============================================================================
// Binding Source Interface
// ============================================================================

/// Hierarchical binding lookup
///
/// # Example
///
/// ```
/// use wirekit_domain::ports::BindingSource;
/// use wirekit_domain::ServiceIdentifier;
///
/// fn count_bindings(source: &dyn BindingSource, id: &ServiceIdentifier) -> usize {
///     match source.local_bindings(id) {
///         Some(bindings) => bindings.len(),
///         None => source
///             .parent()
///             .map_or(0, |parent| count_bindings(parent.as_ref(), id)),
///     }
/// }
/// ```
pub trait BindingSource: Send + Sync {
    /// Bindings registered locally for `service_identifier`
    ///
    /// `None` means the key is absent at this level; a present key never maps
    /// to an empty list.
    fn local_bindings(&self, service_identifier: &ServiceIdentifier) -> Option<Vec<Arc<Binding>>>;

    /// Parent level consulted when a key is absent locally
    fn parent(&self) -> Option<Arc<dyn BindingSource>>;

    /// Display name used in error messages
    fn service_identifier_as_string(&self, service_identifier: &ServiceIdentifier) -> String {
        service_identifier.to_string()
    }
}
