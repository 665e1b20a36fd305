//! Container bootstrap
//!
//! Builds a ready-to-plan container from application configuration and a
//! binding manifest.

use std::path::Path;

use tracing::info;
use wirekit_application::Container;
use wirekit_domain::error::Result;

use crate::config::AppConfig;
use crate::manifest::{Manifest, ManifestLoader};

/// Manifest loader configured from `config`
pub fn manifest_loader(config: &AppConfig) -> ManifestLoader {
    ManifestLoader::new().with_default_scope(config.planning.default_scope)
}

/// Container built from an already parsed manifest
pub fn container_from_manifest(config: &AppConfig, manifest: &Manifest) -> Result<Container> {
    manifest_loader(config).build_container(manifest, config.planning.container_options())
}

/// Container built from the manifest file at `manifest_path`
pub fn build_container(config: &AppConfig, manifest_path: &Path) -> Result<Container> {
    let manifest = manifest_loader(config).load_file(manifest_path)?;
    let container = container_from_manifest(config, &manifest)?;
    info!(
        container = %container.id(),
        services = container.bound_identifiers().len(),
        max_depth = config.planning.max_depth,
        "Container bootstrapped"
    );
    Ok(container)
}
