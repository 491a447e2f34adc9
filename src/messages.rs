//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::{ConfirmChoice, DocumentId};
use crate::util::FileError;

/// Document-specific messages (text editing, undo/redo) for the active document
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Insert text at cursor
    InsertText(String),
    /// Insert a newline at cursor
    InsertNewline,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Move cursor to a char offset
    SetCursor(usize),
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,
}

/// Tab messages (switching and closing documents)
#[derive(Debug, Clone)]
pub enum TabMsg {
    /// Activate the tab at a position (0-indexed)
    SwitchToIndex(usize),
    /// Switch to next tab
    Next,
    /// Switch to previous tab
    Prev,
    /// Close a document (asks first if it has unsaved changes)
    Close(DocumentId),
    /// Close the active document
    CloseActive,
}

/// Find/replace panel messages
#[derive(Debug, Clone)]
pub enum FindMsg {
    /// Set the search text
    SetQuery(String),
    /// Set the replacement text
    SetReplacement(String),
    ToggleCaseSensitive,
    ToggleWholeWord,
    ToggleRegex,
    /// Jump to the next match
    FindNext,
    /// Replace every match in the active document
    ReplaceAll,
}

/// Where an open request came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOrigin {
    /// Path given on the command line
    Startup,
    /// Path chosen interactively
    Dialog,
}

/// Application-level messages (file operations, confirmation, exit)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Create a new file
    NewFile,
    /// Open a file
    OpenFile { path: PathBuf, origin: OpenOrigin },
    /// Save the active file (asks for a path if it has none)
    SaveFile,
    /// Save to the given path and bind the document to it
    SaveFileAs(PathBuf),
    /// File save completed
    SaveCompleted {
        document_id: DocumentId,
        path: PathBuf,
        result: Result<(), FileError>,
    },
    /// File load completed
    FileLoaded {
        path: PathBuf,
        origin: OpenOrigin,
        /// Document to replace instead of opening a new tab
        replace: Option<DocumentId>,
        result: Result<String, FileError>,
    },
    /// Answer to the unsaved-changes prompt
    Confirm(ConfirmChoice),
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// Tab messages
    Tab(TabMsg),
    /// Find/replace messages
    Find(FindMsg),
    /// App messages (file I/O, exit)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create an insert text message
    pub fn insert(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::InsertText(text.into()))
    }

    /// Create an open file message for an interactive request
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Msg::App(AppMsg::OpenFile {
            path: path.into(),
            origin: OpenOrigin::Dialog,
        })
    }

    /// Create a confirmation answer message
    pub fn confirm(choice: ConfirmChoice) -> Self {
        Msg::App(AppMsg::Confirm(choice))
    }
}
