//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{LoggingConfig, PlanningConfig};

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Planning configuration
    #[serde(default)]
    pub planning: PlanningConfig,
}
