//! Planning configuration types

use serde::{Deserialize, Serialize};
use wirekit_application::ContainerOptions;
use wirekit_domain::BindingScope;
use wirekit_domain::constants::DEFAULT_MAX_PLANNING_DEPTH;

/// Planning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningConfig {
    /// Maximum identifiers on one root-to-leaf path
    pub max_depth: usize,

    /// Scope for manifest bindings that do not declare one
    pub default_scope: BindingScope,
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_PLANNING_DEPTH,
            default_scope: BindingScope::Transient,
        }
    }
}

impl PlanningConfig {
    /// Container options derived from this configuration
    pub fn container_options(&self) -> ContainerOptions {
        ContainerOptions {
            max_depth: self.max_depth,
        }
    }
}
