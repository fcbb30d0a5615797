//! Configuration types and loading for the todolist system.
//!
//! The main entry point is [`TodoListConfig`], which represents the contents
//! of `todolist.yaml`. Configuration is loaded with [`load_config`] and saved
//! with [`save_config`].

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use todolist_core::{DisplayStyle, StyleError};
use todolist_core::display::{BANNER_FENCE, DONE_MARKER, DUE_DATE_FORMAT, UNDONE_MARKER};
use tracing::debug;

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "todolist.yaml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A configuration value was invalid.
    #[error("invalid configuration value for key '{key}': {reason}")]
    InvalidValue {
        /// The configuration key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Display section
// ---------------------------------------------------------------------------

/// Display configuration section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DisplayConfig {
    /// Marker shown for completed todos. Must be one character.
    #[serde(default = "default_done_marker")]
    pub done_marker: String,

    /// Marker shown for open todos. Must be one character.
    #[serde(default = "default_undone_marker")]
    pub undone_marker: String,

    #[serde(default = "default_banner_fence")]
    pub banner_fence: String,

    /// chrono strftime pattern for due dates.
    #[serde(default = "default_due_date_format")]
    pub due_date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            done_marker: default_done_marker(),
            undone_marker: default_undone_marker(),
            banner_fence: default_banner_fence(),
            due_date_format: default_due_date_format(),
        }
    }
}

fn default_done_marker() -> String {
    DONE_MARKER.to_string()
}

fn default_undone_marker() -> String {
    UNDONE_MARKER.to_string()
}

fn default_banner_fence() -> String {
    BANNER_FENCE.to_string()
}

fn default_due_date_format() -> String {
    DUE_DATE_FORMAT.to_string()
}

impl DisplayConfig {
    /// Validates the section and converts it into a [`DisplayStyle`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a marker is not exactly one
    /// character or the due-date format cannot render a date.
    pub fn to_style(&self) -> Result<DisplayStyle> {
        let style = DisplayStyle::default()
            .with_banner_fence(self.banner_fence.as_str())
            .with_done_marker(self.done_marker.as_str())
            .map_err(|e| invalid("display.done-marker", e))?
            .with_undone_marker(self.undone_marker.as_str())
            .map_err(|e| invalid("display.undone-marker", e))?
            .with_due_date_format(self.due_date_format.as_str())
            .map_err(|e| invalid("display.due-date-format", e))?;
        Ok(style)
    }
}

fn invalid(key: &str, err: StyleError) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: err.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Main config
// ---------------------------------------------------------------------------

/// Top-level configuration, the contents of `todolist.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoListConfig {
    /// Rendering settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration from `todolist.yaml` inside the given directory.
///
/// If the file does not exist, a default [`TodoListConfig`] is returned.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// or [`ConfigError::ParseError`] if it contains invalid YAML.
pub fn load_config(dir: &Path) -> Result<TodoListConfig> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    debug!(path = %config_path.display(), "loading config");

    if !config_path.exists() {
        return Ok(TodoListConfig::default());
    }

    let content = std::fs::read_to_string(&config_path)?;

    // An empty file is valid and yields default config.
    if content.trim().is_empty() {
        return Ok(TodoListConfig::default());
    }

    let config: TodoListConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Save configuration to `todolist.yaml` inside the given directory.
///
/// The directory is created if it does not exist.
pub fn save_config(dir: &Path, config: &TodoListConfig) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let config_path = dir.join(CONFIG_FILE_NAME);
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&config_path, yaml)?;
    debug!(path = %config_path.display(), "saved config");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use todolist_core::{Todo, TodoList};

    #[test]
    fn test_default_style_matches_core() {
        let style = TodoListConfig::default().display.to_style().unwrap();
        assert_eq!(style, DisplayStyle::default());
    }

    #[test]
    fn test_load_missing_config_returns_default() {
        let dir = PathBuf::from("/nonexistent/path/todolist");
        let cfg = load_config(&dir).unwrap();
        assert_eq!(cfg, TodoListConfig::default());
    }

    #[test]
    fn test_load_empty_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "  \n").unwrap();
        let cfg = load_config(dir.path()).unwrap();
        assert_eq!(cfg, TodoListConfig::default());
    }

    #[test]
    fn test_deserialize_partial_yaml() {
        let yaml = "display:\n  done-marker: \"*\"\n";
        let cfg: TodoListConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.display.done_marker, "*");
        // Everything else should be default
        assert_eq!(cfg.display.undone_marker, " ");
        assert_eq!(cfg.display.banner_fence, "----");
        assert_eq!(cfg.display.due_date_format, "%A %B %-d");
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "display: [unclosed").unwrap();
        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_roundtrip_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("conf");

        let mut cfg = TodoListConfig::default();
        cfg.display.banner_fence = "==".to_string();
        cfg.display.due_date_format = "%Y-%m-%d".to_string();

        save_config(&config_dir, &cfg).unwrap();
        let loaded = load_config(&config_dir).unwrap();

        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_wide_marker_rejected() {
        let cfg = DisplayConfig {
            done_marker: "OK".to_string(),
            ..DisplayConfig::default()
        };
        match cfg.to_style() {
            Err(ConfigError::InvalidValue { key, .. }) => {
                assert_eq!(key, "display.done-marker");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }

        let cfg = DisplayConfig {
            undone_marker: String::new(),
            ..DisplayConfig::default()
        };
        assert!(matches!(
            cfg.to_style(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_unicode_marker_accepted() {
        let cfg = DisplayConfig {
            done_marker: "✓".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(cfg.to_style().unwrap().done_marker(), "✓");
    }

    #[test]
    fn test_bad_due_date_format_rejected() {
        for pattern in ["", "%Q"] {
            let cfg = DisplayConfig {
                due_date_format: pattern.to_string(),
                ..DisplayConfig::default()
            };
            assert!(matches!(
                cfg.to_style(),
                Err(ConfigError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn test_time_pattern_rejected() {
        for pattern in ["%H:%M", "%A %z"] {
            let cfg = DisplayConfig {
                due_date_format: pattern.to_string(),
                ..DisplayConfig::default()
            };
            match cfg.to_style() {
                Err(ConfigError::InvalidValue { key, .. }) => {
                    assert_eq!(key, "display.due-date-format");
                }
                other => panic!("expected InvalidValue for {pattern}, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_loaded_style_renders_list() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "display:\n  done-marker: \"v\"\n  banner-fence: \"**\"\n",
        )
        .unwrap();
        let style = load_config(dir.path()).unwrap().display.to_style().unwrap();

        let mut list = TodoList::new("Week");
        list.add(Todo::new("Plan")).add(Todo::new("Ship"));
        list.mark_done("Ship");

        assert_eq!(list.render(&style), "** Week **\n[ ] Plan\n[v] Ship");
    }
}
