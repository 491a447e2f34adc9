//! UI state - status line, confirmation prompt, and save-as requests

use super::registry::DocumentId;

/// UI state - status messages and modal prompts
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Message displayed in the status line
    pub status_message: String,
    /// Error popup text; stays until dismissed or replaced
    pub error: Option<String>,
    /// Text of the unsaved-changes prompt, if one is showing
    pub prompt: Option<String>,
    /// Document waiting for a path before it can be saved
    pub awaiting_save_as: Option<DocumentId>,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::default()
        }
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Show an error popup and mirror it in the status line
    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.status_message = message.clone();
        self.error = Some(message);
    }

    /// Dismiss the error popup
    pub fn dismiss_error(&mut self) -> Option<String> {
        self.error.take()
    }

    /// Check if a prompt is currently waiting for an answer
    pub fn has_prompt(&self) -> bool {
        self.prompt.is_some()
    }

    pub fn open_prompt(&mut self, text: impl Into<String>) {
        self.prompt = Some(text.into());
    }

    pub fn close_prompt(&mut self) {
        self.prompt = None;
    }
}
