//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Planning constants are defined in `wirekit_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "wirekit.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "wirekit";

/// Environment variable prefix for configuration
///
/// Nested keys are separated by a double underscore, e.g.
/// `WIREKIT__PLANNING__MAX_DEPTH=64`.
pub const CONFIG_ENV_PREFIX: &str = "WIREKIT";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "WIREKIT_LOG";

/// File stem used for rolling log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "wirekit";

// ============================================================================
// MANIFEST CONSTANTS
// ============================================================================

/// Default binding manifest file name
pub const DEFAULT_MANIFEST_FILENAME: &str = "bindings.toml";
