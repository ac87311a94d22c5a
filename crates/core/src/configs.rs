//! Configuration documents for bob
//!
//! - [`project`] - a single recognized project type and its tasks
//! - [`document`] - the whole configuration document, overlays and merging
//! - [`defaults`] - the compiled-in default configuration
//! - [`nullable`] - null handling shared by the documents

pub mod defaults;
pub mod document;
pub mod nullable;
pub mod project;

pub use defaults::{default_config, DEFAULT_CONFIG_VERSION};
pub use document::{merge, parse_config, parse_overlay, Config, ConfigOverlay};
pub use project::ProjectConfig;

/// JSON Schema describing the configuration document, for editor support
/// when writing `bob.yaml` or `.bob.yaml` overrides.
pub fn config_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(Config)).unwrap_or_default()
}
