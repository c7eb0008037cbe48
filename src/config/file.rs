//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".company-manager.yaml",
    ".company-manager.yml",
    "company-manager.yaml",
    "company-manager.yml",
];

/// Discover a config file by searching standard locations.
///
/// An explicit path is returned as is, even when it does not exist, so that
/// loading it reports [`ConfigFileError::NotFound`]. Otherwise the search order is:
/// 1. Current directory
/// 2. Git repository root (if in a repo)
/// 3. User config directory (~/.config/company-manager/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir()
        && let Some(path) = find_config_in_dir(&config_dir.join("company-manager"))
    {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir()
        && let Some(path) = find_config_in_dir(&home)
    {
        return Some(path);
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
///
/// A file that exists but cannot be parsed is logged and ignored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Load the discovered config, failing on a file that cannot be used.
///
/// Defaults are returned only when no file was found at all.
pub fn load_discovered(
    explicit_path: Option<&Path>,
) -> Result<(AppConfig, Option<PathBuf>), ConfigFileError> {
    match discover_config_file(explicit_path) {
        Some(path) => {
            let config = load_config_file(&path)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok((config, Some(path)))
        }
        None => Ok((AppConfig::default(), None)),
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Layer command line values over this config.
    pub fn merge(&mut self, overrides: &ConfigOverrides) {
        if let Some(endpoint) = &overrides.endpoint {
            self.client.endpoint.clone_from(endpoint);
        }
        if let Some(section) = overrides.default_section {
            self.navigation.default_section = section;
        }
        if let Some(theme) = &overrides.theme {
            self.tui.theme.clone_from(theme);
        }
        if let Some(mouse) = overrides.mouse_enabled {
            self.tui.mouse_enabled = mouse;
        }
    }

    /// Load from file and merge with CLI overrides.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<(Self, Option<PathBuf>), ConfigFileError> {
        let (mut config, loaded_from) = load_discovered(config_path)?;
        config.merge(overrides);
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# Company Manager Configuration
# Place this file at .company-manager.yaml in your project root or ~/.config/company-manager/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# Company Manager Configuration File
# ==================================
#
# Place this file at:
#   - .company-manager.yaml in your project root
#   - ~/.config/company-manager/company-manager.yaml for global config
#
# CLI arguments always override file settings.

# GraphQL client
client:
  # Endpoint address (http or https)
  endpoint: http://localhost:4000
  # Request timeout in seconds (1-300)
  timeout_secs: 30

# Navigation
navigation:
  # Section shown at startup: roles, teams, people
  default_section: roles

# TUI configuration
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  mouse_enabled: true
  # Event poll interval in milliseconds (16-5000)
  tick_rate_ms: 250
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".company-manager.yaml");
        std::fs::write(&config_path, "tui:\n  theme: light\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r"
client:
  endpoint: https://api.example.com/graphql
navigation:
  default_section: teams
tui:
  mouse_enabled: false
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.client.endpoint, "https://api.example.com/graphql");
        assert_eq!(config.client.timeout_secs, 30);
        assert_eq!(config.navigation.default_section, Section::Teams);
        assert!(!config.tui.mouse_enabled);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "navigation: [not, a, map]\n").unwrap();

        let result = load_config_file(&config_path);
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::default();
        base.navigation.default_section = Section::Teams;
        base.tui.theme = "light".to_string();

        base.merge(&ConfigOverrides {
            endpoint: Some("http://127.0.0.1:8080".to_string()),
            default_section: Some(Section::People),
            ..ConfigOverrides::default()
        });

        assert_eq!(base.client.endpoint, "http://127.0.0.1:8080");
        assert_eq!(base.navigation.default_section, Section::People);
        // Untouched by the overrides
        assert_eq!(base.tui.theme, "light");
        assert!(base.tui.mouse_enabled);
    }

    #[test]
    fn test_explicit_file_with_overrides() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom.yaml");
        std::fs::write(&config_path, "navigation:\n  default_section: people\n").unwrap();

        let overrides = ConfigOverrides {
            theme: Some("high-contrast".to_string()),
            ..ConfigOverrides::default()
        };
        let (config, loaded_from) =
            AppConfig::from_file_with_overrides(Some(&config_path), &overrides).unwrap();

        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(config.navigation.default_section, Section::People);
        assert_eq!(config.tui.theme, "high-contrast");
    }

    #[test]
    fn test_generated_examples_parse() {
        let example: AppConfig =
            serde_yaml::from_str(&generate_example_config()).unwrap();
        assert_eq!(example, AppConfig::default());

        let full: AppConfig = serde_yaml::from_str(&generate_full_example_config()).unwrap();
        assert_eq!(full.client.endpoint, "http://localhost:4000");
        assert_eq!(full.navigation.default_section, Section::Roles);
    }

    #[test]
    fn test_missing_explicit_path_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let typo = tmp.path().join("typo.yaml");

        assert_eq!(discover_config_file(Some(&typo)), Some(typo.clone()));
        let result = load_discovered(Some(&typo));
        assert!(matches!(result, Err(ConfigFileError::NotFound(ref p)) if *p == typo));
    }

    #[test]
    fn test_unknown_section_fails_loading() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("bad.yaml");
        std::fs::write(&config_path, "navigation:\n  default_section: finance\n").unwrap();

        let result = load_discovered(Some(&config_path));
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));

        let overridden = AppConfig::from_file_with_overrides(
            Some(&config_path),
            &ConfigOverrides {
                default_section: Some(Section::Teams),
                ..ConfigOverrides::default()
            },
        );
        assert!(overridden.is_err());
    }

    #[test]
    fn test_uppercase_section_in_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("upper.yaml");
        std::fs::write(&config_path, "navigation:\n  default_section: ROLES\n").unwrap();

        let (config, _) = load_discovered(Some(&config_path)).unwrap();
        assert_eq!(config.navigation.default_section, Section::Roles);
    }
}
