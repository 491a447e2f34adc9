//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod confirm;
pub mod document;
pub mod history;
pub mod registry;
pub mod ui;

pub use confirm::{ConfirmChoice, GateOutcome, PendingAction, SaveState};
pub use document::Document;
pub use history::{Snapshot, SnapshotHistory, DEFAULT_HISTORY_LIMIT};
pub use registry::{DocumentId, DocumentRegistry, APP_NAME};
pub use ui::UiState;

use crate::config::EditorConfig;
use crate::find::{FindSession, SearchOptions};

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Open documents and the active one
    pub registry: DocumentRegistry,
    /// UI state (status line, prompts)
    pub ui: UiState,
    /// Find/replace session for the active document
    pub find: FindSession,
    /// Editor configuration
    pub config: EditorConfig,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl AppModel {
    /// Create a model with one untitled document
    pub fn new(config: EditorConfig) -> Self {
        let options = SearchOptions {
            case_sensitive: config.case_sensitive,
            whole_word: config.whole_word,
            regex: config.regex_search,
        };
        Self {
            registry: DocumentRegistry::with_history_limit(config.history_limit),
            ui: UiState::with_status("New file"),
            find: FindSession::new(options),
            config,
        }
    }

    /// Create a model around an existing document
    pub fn with_document(document: Document, config: EditorConfig) -> Self {
        let mut model = Self::new(config);
        model.registry = DocumentRegistry::single_document(document);
        model
    }

    /// The active document
    pub fn document(&self) -> &Document {
        self.registry.active()
    }

    /// The active document, mutably
    pub fn document_mut(&mut self) -> &mut Document {
        self.registry.active_mut()
    }

    /// Window title for the active document
    pub fn title(&self) -> String {
        self.registry.window_title()
    }

    /// Document whose unsaved-changes prompt should be answered next.
    ///
    /// Prefers the active document; otherwise the first one in tab order.
    pub fn pending_document_id(&self) -> Option<DocumentId> {
        if self.document().pending.is_some() {
            return self.document().id;
        }
        self.registry
            .iter()
            .find(|doc| doc.pending.is_some())
            .and_then(|doc| doc.id)
    }
}
