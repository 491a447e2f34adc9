//! Tracing setup and state diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=state=debug,message=debug` - scoped filtering
//! - `RUST_LOG=epad::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/epad/logs/epad.log` with daily rotation.
//! File logging uses debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, SaveState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it never mixes with the shell's output,
/// and respects RUST_LOG (default `warn`).
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "epad.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of document state for diffing across updates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub active_index: usize,
    pub documents: Vec<DocumentInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentInfo {
    pub name: String,
    pub len_chars: usize,
    pub cursor: usize,
    pub history_len: usize,
    pub history_index: usize,
    pub save_state: SaveState,
}

impl StateSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            active_index: model.registry.active_index(),
            documents: model
                .registry
                .iter()
                .map(|doc| DocumentInfo {
                    name: doc.display_name(),
                    len_chars: doc.len_chars(),
                    cursor: doc.cursor,
                    history_len: doc.history.len(),
                    history_index: doc.history.index(),
                    save_state: doc.save_state(),
                })
                .collect(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.documents.len() != other.documents.len() {
            changes.push(format!(
                "documents: {} → {}",
                self.documents.len(),
                other.documents.len()
            ));
        }
        if self.active_index != other.active_index {
            changes.push(format!(
                "active tab: {} → {}",
                self.active_index, other.active_index
            ));
        }

        for (i, (before, after)) in self.documents.iter().zip(&other.documents).enumerate() {
            if before.name != after.name {
                changes.push(format!("#{}: name {} → {}", i, before.name, after.name));
            }
            if before.len_chars != after.len_chars {
                changes.push(format!(
                    "#{}: length {} → {}",
                    i, before.len_chars, after.len_chars
                ));
            }
            if before.cursor != after.cursor {
                changes.push(format!("#{}: cursor {} → {}", i, before.cursor, after.cursor));
            }
            if before.history_len != after.history_len
                || before.history_index != after.history_index
            {
                changes.push(format!(
                    "#{}: history {}/{} → {}/{}",
                    i,
                    before.history_index,
                    before.history_len,
                    after.history_index,
                    after.history_len
                ));
            }
            if before.save_state != after.save_state {
                changes.push(format!(
                    "#{}: {:?} → {:?}",
                    i, before.save_state, after.save_state
                ));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::DocumentMsg;

    #[test]
    fn test_identical_snapshots_have_no_diff() {
        let model = AppModel::default();
        let a = StateSnapshot::from_model(&model);
        let b = StateSnapshot::from_model(&model);
        assert_eq!(a.diff(&b), None);
    }

    #[test]
    fn test_diff_reports_edit_and_dirty_flag() {
        let mut model = AppModel::default();
        let before = StateSnapshot::from_model(&model);
        crate::update::update_document(&mut model, DocumentMsg::InsertText("hi".into()));
        let after = StateSnapshot::from_model(&model);

        let diff = before.diff(&after).unwrap();
        assert!(diff.contains("length 0 → 2"));
        assert!(diff.contains("cursor 0 → 2"));
        assert!(diff.contains("Dirty"));
    }
}
