//! Configuration validation for company-manager.
//!
//! Provides validation traits and implementations for all configuration types.

use super::defaults::VALID_THEMES;
use super::types::{AppConfig, ClientConfig, TuiConfig};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.client.validate());
        errors.extend(self.tui.validate());
        errors
    }
}

impl Validatable for ClientConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.endpoint_url() {
            errors.push(ConfigError::new("client.endpoint", e.to_string()));
        }

        if !(1..=300).contains(&self.timeout_secs) {
            errors.push(ConfigError::new(
                "client.timeout_secs",
                format!("Timeout must be between 1 and 300 seconds, got {}", self.timeout_secs),
            ));
        }

        if self.user_agent.trim().is_empty() {
            errors.push(ConfigError::new("client.user_agent", "User agent must not be empty"));
        }

        errors
    }
}

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if !VALID_THEMES.contains(&self.theme.as_str()) {
            errors.push(ConfigError::new(
                "tui.theme",
                format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    VALID_THEMES.join(", ")
                ),
            ));
        }

        if !(16..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError::new(
                "tui.tick_rate_ms",
                format!(
                    "Tick rate must be between 16 and 5000 ms, got {}",
                    self.tick_rate_ms
                ),
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_client_config_validation() {
        let invalid = ClientConfig {
            endpoint: "ws://localhost:4000".to_string(),
            timeout_secs: 0,
            user_agent: " ".to_string(),
        };
        let errors = invalid.validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["client.endpoint", "client.timeout_secs", "client.user_agent"]
        );
    }

    #[test]
    fn test_tui_config_validation() {
        let valid = TuiConfig {
            theme: "high-contrast".to_string(),
            ..TuiConfig::default()
        };
        assert!(valid.is_valid());

        let invalid = TuiConfig {
            theme: "neon".to_string(),
            tick_rate_ms: 1,
            ..TuiConfig::default()
        };
        assert_eq!(invalid.validate().len(), 2);
    }

    #[test]
    fn test_app_config_collects_all_errors() {
        let mut config = AppConfig::default();
        config.client.timeout_secs = 1000;
        config.tui.theme = "sepia".to_string();
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].to_string().starts_with("tui.theme:"));
    }
}
