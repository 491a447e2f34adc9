//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::messages::OpenOrigin;
use crate::model::DocumentId;

/// Side effects requested by `update`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Write a document's content to disk
    SaveFile {
        document_id: DocumentId,
        path: PathBuf,
        content: String,
    },
    /// Read a file from disk
    LoadFile {
        path: PathBuf,
        origin: OpenOrigin,
        /// Document to replace instead of opening a new tab
        replace: Option<DocumentId>,
    },
    /// Request application exit
    Quit,
}
