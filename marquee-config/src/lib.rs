//! Configuration loading for Marquee.
//!
//! Values are layered environment first (after `.env` loading), then the
//! TOML file, then built-in defaults. Guard rails normalize values the
//! session cannot run with and report each adjustment as a warning.
#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    CatalogConfig, CatalogCredential, Config, ConfigMetadata, SessionConfig,
    TranslatorConfig,
};
pub use sources::{EnvConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
