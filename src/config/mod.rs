//! Configuration module for company-manager.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.company-manager.yaml` file in your project root or
//! `~/.config/company-manager/`:
//!
//! ```yaml
//! client:
//!   endpoint: http://localhost:4000
//! navigation:
//!   default_section: roles
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    DEFAULT_ENDPOINT, DEFAULT_SECTION, DEFAULT_TICK_RATE_MS, DEFAULT_TIMEOUT_SECS, VALID_THEMES,
};
pub use types::{
    AppConfig, ClientConfig, ConfigOverrides, NavigationConfig, TuiConfig, TuiPreferences,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    CONFIG_FILE_NAMES, ConfigFileError, discover_config_file, generate_example_config,
    generate_full_example_config, load_config_file, load_discovered, load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.company-manager.yaml` config files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
