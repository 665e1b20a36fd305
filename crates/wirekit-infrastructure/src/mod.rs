//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the planning container.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML and environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Bindings
//! | Module | Description |
//! |--------|-------------|
//! | [`manifest`] | TOML binding manifests loaded into a container |
//! | [`bootstrap`] | Container construction from config and manifest |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod manifest;

pub use error_ext::ErrorContext;
