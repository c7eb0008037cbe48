//! Configuration types for company-manager.

use super::defaults::{
    DEFAULT_ENDPOINT, DEFAULT_SECTION, DEFAULT_TICK_RATE_MS, DEFAULT_TIMEOUT_SECS,
    default_user_agent,
};
use crate::error::{Error, Result};
use crate::model::Section;
use reqwest::Url;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// GraphQL client configuration
    pub client: ClientConfig,
    /// Navigation defaults
    pub navigation: NavigationConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Client Configuration
// ============================================================================

/// Endpoint and transport settings for the GraphQL client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ClientConfig {
    /// GraphQL endpoint address
    pub endpoint: String,
    /// Request timeout in seconds
    #[schemars(range(min = 1, max = 300))]
    pub timeout_secs: u64,
    /// User agent sent with requests
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Parse the endpoint. Only `http` and `https` are accepted.
    pub fn endpoint_url(&self) -> Result<Url> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| Error::invalid_endpoint(&self.endpoint, e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::invalid_endpoint(
                &self.endpoint,
                format!("unsupported scheme '{other}'"),
            )),
        }
    }
}

// ============================================================================
// Navigation Configuration
// ============================================================================

/// Navigation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NavigationConfig {
    /// Section selected at startup
    pub default_section: Section,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            default_section: DEFAULT_SECTION,
        }
    }
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 16, max = 5000))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            mouse_enabled: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

/// TUI preferences persisted across sessions.
///
/// Only the theme is remembered; the selected section always starts from
/// the configured default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("company-manager").join("preferences.json"))
    }

    /// Load saved preferences, if a readable file exists.
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

// ============================================================================
// CLI Overrides
// ============================================================================

/// Values given on the command line. `None` keeps the file/default value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub endpoint: Option<String>,
    pub default_section: Option<Section>,
    pub theme: Option<String>,
    pub mouse_enabled: Option<bool>,
}
