//! Manifest loader
//!
//! Parses manifests and applies them to containers.

use std::path::Path;

use tracing::info;
use wirekit_application::{Container, ContainerModule, ContainerOptions};
use wirekit_domain::BindingScope;
use wirekit_domain::error::{Error, Result};

use crate::error_ext::ErrorContext;
use crate::manifest::Manifest;

/// Reads manifests and builds containers from them
#[derive(Debug, Clone, Default)]
pub struct ManifestLoader {
    default_scope: BindingScope,
}

impl ManifestLoader {
    /// Loader using transient scope for bindings without one
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope for bindings that do not declare one
    #[must_use]
    pub fn with_default_scope(mut self, scope: BindingScope) -> Self {
        self.default_scope = scope;
        self
    }

    /// Parse a manifest from TOML text
    pub fn parse(&self, text: &str) -> Result<Manifest> {
        let manifest: Manifest = toml::from_str(text).manifest_context("Invalid manifest")?;
        validate_manifest(&manifest)?;
        Ok(manifest)
    }

    /// Read and parse a manifest file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Manifest> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .io_context(format!("Failed to read manifest {}", path.display()))?;
        let manifest = self.parse(&text)?;
        info!(
            path = %path.display(),
            classes = manifest.classes.len(),
            bindings = manifest.bindings.len(),
            modules = manifest.modules.len(),
            "Manifest loaded"
        );
        Ok(manifest)
    }

    /// Register the classes, bindings and modules of `manifest` in `container`
    pub fn apply(&self, manifest: &Manifest, container: &mut Container) -> Result<()> {
        for class in &manifest.classes {
            container.register_class(class.to_metadata());
        }
        for spec in &manifest.bindings {
            container.bind(spec.to_binding(self.default_scope))?;
        }
        let modules: Vec<_> = manifest
            .modules
            .iter()
            .map(|module| {
                module
                    .bindings
                    .iter()
                    .fold(ContainerModule::new(module.id.as_str()), |acc, spec| {
                        acc.bind(spec.to_binding(self.default_scope))
                    })
            })
            .collect();
        container.load(&modules)
    }

    /// Fresh container holding everything `manifest` declares
    pub fn build_container(
        &self,
        manifest: &Manifest,
        options: ContainerOptions,
    ) -> Result<Container> {
        let mut container = Container::with_options(options);
        self.apply(manifest, &mut container)?;
        Ok(container)
    }
}

fn validate_manifest(manifest: &Manifest) -> Result<()> {
    let all_bindings = manifest
        .bindings
        .iter()
        .chain(manifest.modules.iter().flat_map(|module| &module.bindings));
    for spec in all_bindings {
        if spec.service.trim().is_empty() {
            return Err(Error::manifest("Binding with an empty service identifier"));
        }
    }
    for class in &manifest.classes {
        if class.name.trim().is_empty() {
            return Err(Error::manifest("Class with an empty name"));
        }
    }
    let mut module_ids = std::collections::HashSet::new();
    for module in &manifest.modules {
        if !module_ids.insert(module.id.as_str()) {
            return Err(Error::manifest(format!(
                "Module {} declared more than once",
                module.id
            )));
        }
    }
    Ok(())
}
