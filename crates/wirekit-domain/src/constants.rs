//! Domain layer constants
//!
//! Reserved metadata keys attached to targets and the planning defaults shared
//! by the application and infrastructure layers.

// ============================================================================
// TARGET METADATA KEYS
// ============================================================================

/// Metadata key holding the identifier requested by an explicit inject annotation
pub const INJECT_TAG: &str = "inject";

/// Metadata key marking a collection (multi-inject) target
pub const MULTI_INJECT_TAG: &str = "multi_inject";

/// Metadata key holding the constructor parameter name
pub const NAME_TAG: &str = "name";

/// Metadata key used by named bindings and named targets
pub const NAMED_TAG: &str = "named";

/// Metadata key marking a parameter the container does not manage
pub const UNMANAGED_TAG: &str = "unmanaged";

/// Keys that never count as user tags when deciding whether a target is tagged
pub const RESERVED_METADATA_KEYS: [&str; 5] =
    [INJECT_TAG, MULTI_INJECT_TAG, NAME_TAG, NAMED_TAG, UNMANAGED_TAG];

// ============================================================================
// PLANNING CONSTANTS
// ============================================================================

/// Default maximum number of requests on one root-to-leaf path
pub const DEFAULT_MAX_PLANNING_DEPTH: usize = 256;

/// Largest depth limit accepted from configuration
///
/// Planning itself runs on an explicit work stack, but plan snapshots are
/// rendered recursively, so configured limits stay within this bound.
pub const MAX_PLANNING_DEPTH_LIMIT: usize = 1024;
