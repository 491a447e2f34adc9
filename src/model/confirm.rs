//! Unsaved-changes confirmation state
//!
//! A dirty document gates close/new/open/quit behind a three-way prompt.
//! The deferred action is kept on the document until the prompt resolves.

use std::path::PathBuf;

/// Save state of a document as seen by the confirmation flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    /// Content matches the last load or save
    Clean,
    /// Content has unsaved edits
    Dirty,
    /// A confirmation prompt is waiting for an answer
    ConfirmPending,
}

/// Action deferred until the user answers the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Close the document's tab
    CloseDocument,
    /// Replace the document with a fresh untitled one (single-document mode)
    NewDocument,
    /// Replace the document with a file from disk (single-document mode)
    OpenFile(PathBuf),
    /// Exit the application
    Quit,
}

impl PendingAction {
    /// Verb used in log lines and prompts
    pub fn describe(&self) -> &'static str {
        match self {
            PendingAction::CloseDocument => "close",
            PendingAction::NewDocument => "new file",
            PendingAction::OpenFile(_) => "open",
            PendingAction::Quit => "quit",
        }
    }
}

/// Answer to a confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    /// Save, then continue with the pending action
    Save,
    /// Drop unsaved changes and continue
    Discard,
    /// Keep editing; the pending action is dropped
    Cancel,
}

/// Result of asking to perform a gated action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Document is clean; run the action now
    Proceed,
    /// Document is dirty; a prompt is now pending
    Prompt,
    /// A prompt is already pending; the request was dropped
    Ignored,
}

/// Prompt text shown while a confirmation is pending
pub fn prompt_text(display_name: &str) -> String {
    format!("Save changes to '{}'? [yes/no/cancel]", display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_text_names_document() {
        assert_eq!(
            prompt_text("notes.txt"),
            "Save changes to 'notes.txt'? [yes/no/cancel]"
        );
    }

    #[test]
    fn test_pending_action_describe() {
        assert_eq!(PendingAction::CloseDocument.describe(), "close");
        assert_eq!(
            PendingAction::OpenFile(PathBuf::from("a.txt")).describe(),
            "open"
        );
    }
}
