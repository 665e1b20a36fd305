//! Binding manifests
//!
//! A manifest is a TOML document declaring injectable classes and bindings,
//! loaded into a [`Container`](wirekit_application::Container):
//!
//! ```toml
//! [[classes]]
//! name = "Ninja"
//! parameters = [
//!     { service = "Weapon", named = "strong" },
//!     { service = "Charm", multi = true },
//! ]
//!
//! [[bindings]]
//! service = "Weapon"
//! type = "instance"
//! implementation = "Katana"
//! scope = "singleton"
//! constraint = { when = "target_named", name = "strong" }
//! ```

pub mod loader;
pub mod types;

pub use loader::ManifestLoader;
pub use types::{BindingSpec, ClassSpec, Manifest, ModuleSpec, ParameterSpec};
