//! Editor configuration
//!
//! Read from `~/.config/epad/config.yaml` when present. The file is never
//! written by the editor; missing or invalid files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::DEFAULT_HISTORY_LIMIT;

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Undo snapshots kept per document
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Initial case-sensitivity of find/replace
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
    /// Initial whole-word setting of find/replace
    #[serde(default)]
    pub whole_word: bool,
    /// Treat search text as a regular expression
    #[serde(default)]
    pub regex_search: bool,
    /// Open new and opened files in tabs; when false, they replace the
    /// current document after the unsaved-changes check
    #[serde(default = "default_true")]
    pub tabbed: bool,
    /// Show the "Ln/Col" cursor position in the status line
    #[serde(default = "default_true")]
    pub show_position: bool,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_true() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            case_sensitive: true,
            whole_word: false,
            regex_search: false,
            tabbed: true,
            show_position: true,
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, or return defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse YAML config text
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_yaml::from_str(content)?;
        config.history_limit = config.history_limit.max(1);
        Ok(config)
    }
}
