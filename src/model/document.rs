//! Document model - represents the text buffer and file state

use ropey::Rope;
use std::path::{Path, PathBuf};

use super::confirm::{GateOutcome, PendingAction, SaveState};
use super::history::{Snapshot, SnapshotHistory, DEFAULT_HISTORY_LIMIT};
use super::registry::DocumentId;

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// Unique identifier (set when added to the registry)
    pub id: Option<DocumentId>,

    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Display name for untitled documents (e.g., "Untitled", "Untitled-2")
    pub untitled_name: Option<String>,
    /// Whether the buffer differs from the last load or save
    pub is_modified: bool,
    /// True until a save-as binds a path to this document
    pub is_new_file: bool,
    /// Cursor position as a char offset into `buffer`
    pub cursor: usize,
    /// Undo/redo snapshots
    pub history: SnapshotHistory,
    /// Content as of the last load or save (None if never on disk)
    saved: Option<Rope>,
    /// Action waiting on a save/discard/cancel answer
    pub pending: Option<PendingAction>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty untitled document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self::build(Rope::from_str(text), None, true, DEFAULT_HISTORY_LIMIT)
    }

    /// Create a clean document from content already read from `path`
    pub fn loaded(path: PathBuf, content: &str, history_limit: usize) -> Self {
        Self::build(Rope::from_str(content), Some(path), false, history_limit)
    }

    /// Create a new empty document with a target file path
    ///
    /// Used when the requested file does not exist yet. The file is created
    /// on the first save.
    pub fn new_with_path(path: PathBuf) -> Self {
        Self::new_with_path_and_limit(path, DEFAULT_HISTORY_LIMIT)
    }

    /// Like `new_with_path` with a custom history capacity
    pub fn new_with_path_and_limit(path: PathBuf, history_limit: usize) -> Self {
        let mut doc = Self::build(Rope::new(), Some(path), false, history_limit);
        doc.saved = None;
        doc.is_modified = true;
        doc
    }

    fn build(buffer: Rope, file_path: Option<PathBuf>, is_new_file: bool, limit: usize) -> Self {
        let mut history = SnapshotHistory::with_max_size(limit);
        history.reset(0, &buffer);
        Self {
            id: None,
            saved: Some(buffer.clone()),
            buffer,
            file_path,
            untitled_name: None,
            is_modified: false,
            is_new_file,
            cursor: 0,
            history,
            pending: None,
        }
    }

    /// Replace the history with an empty one of the given capacity
    pub fn set_history_limit(&mut self, limit: usize) {
        self.history = SnapshotHistory::with_max_size(limit);
        self.history.reset(self.cursor, &self.buffer);
    }

    /// Get the display name for this document.
    /// Returns the filename if saved, the untitled name if set, or "Untitled" as fallback.
    pub fn display_name(&self) -> String {
        if let Some(path) = &self.file_path {
            if let Some(name) = path.file_name() {
                return name.to_string_lossy().to_string();
            }
        }
        if let Some(name) = &self.untitled_name {
            return name.clone();
        }
        "Untitled".to_string()
    }

    /// Current content as a String
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Number of chars in the buffer
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// 1-based (line, column) of the cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let offset = self.cursor.min(self.buffer.len_chars());
        let line = self.buffer.char_to_line(offset);
        let line_start = self.buffer.line_to_char(line);
        (line + 1, offset - line_start + 1)
    }

    /// Status-bar position label, e.g. "Ln 3 Col 7"
    pub fn position_label(&self) -> String {
        let (line, col) = self.cursor_line_col();
        format!("Ln {} Col {}", line, col)
    }

    /// Move the cursor, clamped to the buffer.
    ///
    /// Returns `false` when the offset was out of range and had to be clamped.
    pub fn set_cursor(&mut self, offset: usize) -> bool {
        let len = self.buffer.len_chars();
        self.cursor = offset.min(len);
        offset <= len
    }

    /// Insert text at the cursor and advance past it
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = self.cursor.min(self.buffer.len_chars());
        self.buffer.insert(at, text);
        self.cursor = at + text.chars().count();
        self.after_edit();
    }

    /// Delete the char before the cursor (Backspace)
    pub fn delete_backward(&mut self) -> bool {
        let at = self.cursor.min(self.buffer.len_chars());
        if at == 0 {
            return false;
        }
        self.buffer.remove(at - 1..at);
        self.cursor = at - 1;
        self.after_edit();
        true
    }

    /// Delete the char at the cursor (Delete)
    pub fn delete_forward(&mut self) -> bool {
        let at = self.cursor.min(self.buffer.len_chars());
        if at >= self.buffer.len_chars() {
            return false;
        }
        self.buffer.remove(at..at + 1);
        self.after_edit();
        true
    }

    /// Replace the whole content in one step
    pub fn set_content(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
        self.cursor = self.cursor.min(self.buffer.len_chars());
        self.after_edit();
    }

    fn after_edit(&mut self) {
        self.refresh_modified();
        self.take_snapshot();
    }

    /// Record the current state in the history
    pub fn take_snapshot(&mut self) -> bool {
        self.history.take_snapshot(self.cursor, &self.buffer)
    }

    /// Restore the previous snapshot. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.cursor, &self.buffer) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Restore the next snapshot. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.buffer = snapshot.content;
        self.cursor = snapshot.cursor.min(self.buffer.len_chars());
        self.refresh_modified();
    }

    fn refresh_modified(&mut self) {
        self.is_modified = self.saved.as_ref() != Some(&self.buffer);
    }

    /// Record a successful save to `path`
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.file_path = Some(path);
        self.is_new_file = false;
        self.saved = Some(self.buffer.clone());
        self.is_modified = false;
    }

    /// Drop unsaved changes from the dirty flag without touching content
    pub fn force_clean(&mut self) {
        self.saved = Some(self.buffer.clone());
        self.is_modified = false;
    }

    /// Whether saving needs a path from the user first
    pub fn needs_save_as(&self) -> bool {
        self.file_path.is_none() || self.is_new_file
    }

    /// Path the document would be saved to, if bound
    pub fn save_path(&self) -> Option<&Path> {
        if self.is_new_file {
            None
        } else {
            self.file_path.as_deref()
        }
    }

    /// Ask to perform an action that would drop unsaved changes.
    ///
    /// Clean documents proceed at once. Dirty documents keep the action as
    /// pending until the prompt is answered; while one is pending, further
    /// requests are ignored.
    pub fn request_action(&mut self, action: PendingAction) -> GateOutcome {
        if self.pending.is_some() {
            tracing::debug!(action = action.describe(), "confirmation already pending, ignored");
            return GateOutcome::Ignored;
        }
        if !self.is_modified {
            return GateOutcome::Proceed;
        }
        tracing::debug!(action = action.describe(), name = %self.display_name(), "confirmation required");
        self.pending = Some(action);
        GateOutcome::Prompt
    }

    /// State of the unsaved-changes flow for this document
    pub fn save_state(&self) -> SaveState {
        if self.pending.is_some() {
            SaveState::ConfirmPending
        } else if self.is_modified {
            SaveState::Dirty
        } else {
            SaveState::Clean
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_clean_and_untitled() {
        let doc = Document::new();
        assert!(!doc.is_modified);
        assert!(doc.is_new_file);
        assert_eq!(doc.display_name(), "Untitled");
        assert_eq!(doc.history.len(), 1);
        assert_eq!(doc.save_state(), SaveState::Clean);
    }

    #[test]
    fn test_insert_marks_dirty_and_snapshots() {
        let mut doc = Document::with_text("hello");
        doc.set_cursor(5);
        doc.insert_text(" world");

        assert_eq!(doc.text(), "hello world");
        assert_eq!(doc.cursor, 11);
        assert!(doc.is_modified);
        assert_eq!(doc.history.len(), 2);
    }

    #[test]
    fn test_edit_back_to_saved_content_is_clean() {
        let mut doc = Document::with_text("abc");
        doc.set_cursor(3);
        doc.insert_text("d");
        assert!(doc.is_modified);

        doc.delete_backward();
        assert_eq!(doc.text(), "abc");
        assert!(!doc.is_modified);
    }

    #[test]
    fn test_undo_restores_cursor_and_content() {
        let mut doc = Document::with_text("");
        doc.insert_text("a");
        doc.insert_text("b");

        assert!(doc.undo());
        assert_eq!(doc.text(), "a");
        assert_eq!(doc.cursor, 1);

        assert!(doc.redo());
        assert_eq!(doc.text(), "ab");
        assert_eq!(doc.cursor, 2);
    }

    #[test]
    fn test_undo_to_saved_state_clears_dirty() {
        let mut doc = Document::with_text("base");
        doc.set_cursor(4);
        doc.insert_text("!");
        assert!(doc.is_modified);

        doc.undo();
        assert!(!doc.is_modified);
    }

    #[test]
    fn test_delete_at_bounds_is_noop() {
        let mut doc = Document::with_text("x");
        assert!(!doc.delete_backward());
        doc.set_cursor(1);
        assert!(!doc.delete_forward());
        assert!(!doc.is_modified);
    }

    #[test]
    fn test_set_cursor_clamps() {
        let mut doc = Document::with_text("abc");
        assert!(!doc.set_cursor(10));
        assert_eq!(doc.cursor, 3);
    }

    #[test]
    fn test_position_label() {
        let mut doc = Document::with_text("one\ntwo\nthree");
        doc.set_cursor(6);
        assert_eq!(doc.cursor_line_col(), (2, 3));
        assert_eq!(doc.position_label(), "Ln 2 Col 3");
    }

    #[test]
    fn test_new_with_path_is_dirty_and_bound() {
        let doc = Document::new_with_path(PathBuf::from("/tmp/does-not-exist.txt"));
        assert!(doc.is_modified);
        assert!(!doc.is_new_file);
        assert!(!doc.needs_save_as());
        assert_eq!(doc.display_name(), "does-not-exist.txt");
    }

    #[test]
    fn test_new_with_path_stays_dirty_when_emptied_again() {
        let mut doc = Document::new_with_path(PathBuf::from("/tmp/fresh.txt"));
        doc.insert_text("a");
        doc.delete_backward();
        assert!(doc.is_modified);
    }

    #[test]
    fn test_request_action_on_clean_proceeds() {
        let mut doc = Document::with_text("x");
        assert_eq!(
            doc.request_action(PendingAction::CloseDocument),
            GateOutcome::Proceed
        );
        assert_eq!(doc.save_state(), SaveState::Clean);
    }

    #[test]
    fn test_request_action_on_dirty_prompts_once() {
        let mut doc = Document::with_text("x");
        doc.insert_text("y");
        assert_eq!(doc.save_state(), SaveState::Dirty);

        assert_eq!(
            doc.request_action(PendingAction::CloseDocument),
            GateOutcome::Prompt
        );
        assert_eq!(doc.save_state(), SaveState::ConfirmPending);
        assert_eq!(
            doc.request_action(PendingAction::Quit),
            GateOutcome::Ignored
        );
        assert_eq!(doc.pending, Some(PendingAction::CloseDocument));
    }

    #[test]
    fn test_mark_saved_binds_path() {
        let mut doc = Document::with_text("x");
        doc.insert_text("y");
        doc.mark_saved(PathBuf::from("/tmp/out.txt"));

        assert!(!doc.is_modified);
        assert!(!doc.is_new_file);
        assert_eq!(doc.save_path(), Some(Path::new("/tmp/out.txt")));
    }

    #[test]
    fn test_multibyte_cursor_is_char_based() {
        let mut doc = Document::with_text("");
        doc.insert_text("héllo");
        assert_eq!(doc.cursor, 5);
        doc.delete_backward();
        assert_eq!(doc.text(), "héll");
    }
}
