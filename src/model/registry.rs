//! Document registry - the ordered set of open documents (tabs)
//!
//! Exactly one document is active at a time, and there is always at least
//! one open document: removing the last one opens a fresh untitled buffer.

use std::path::Path;

use super::document::Document;

/// Unique identifier for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Application name shown in window titles
pub const APP_NAME: &str = "ePad";

/// Ordered open documents plus the active one
#[derive(Debug, Clone)]
pub struct DocumentRegistry {
    documents: Vec<Document>,
    active_index: usize,

    /// ID generator
    next_document_id: u64,
    /// Counter for generating unique untitled document names
    next_untitled_number: u32,
    /// History capacity for documents created by the registry
    history_limit: usize,
}

impl Default for DocumentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRegistry {
    /// Create a registry holding a single untitled document
    pub fn new() -> Self {
        Self::with_history_limit(super::history::DEFAULT_HISTORY_LIMIT)
    }

    /// Create a registry whose new documents keep `history_limit` snapshots
    pub fn with_history_limit(history_limit: usize) -> Self {
        let mut registry = Self {
            documents: Vec::new(),
            active_index: 0,
            next_document_id: 1,
            next_untitled_number: 1,
            history_limit,
        };
        registry.new_untitled();
        registry
    }

    /// Create a registry whose only document is `document`
    pub fn single_document(document: Document) -> Self {
        let mut registry = Self {
            documents: Vec::new(),
            active_index: 0,
            next_document_id: 1,
            next_untitled_number: 1,
            history_limit: document.history.max_size(),
        };
        registry.add_document(document);
        registry
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Generate a new document ID
    fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_document_id);
        self.next_document_id += 1;
        id
    }

    /// Generate the next untitled document name (e.g., "Untitled", "Untitled-2", etc.)
    pub fn next_untitled_name(&mut self) -> String {
        let n = self.next_untitled_number;
        self.next_untitled_number += 1;
        if n == 1 {
            "Untitled".to_string()
        } else {
            format!("Untitled-{}", n)
        }
    }

    /// Append a document and make it active
    pub fn add_document(&mut self, mut document: Document) -> DocumentId {
        let id = self.next_document_id();
        document.id = Some(id);
        if document.file_path.is_none() && document.untitled_name.is_none() {
            document.untitled_name = Some(self.next_untitled_name());
        }
        tracing::debug!(%id, name = %document.display_name(), "document added");
        self.documents.push(document);
        self.active_index = self.documents.len() - 1;
        id
    }

    /// Open a fresh untitled document and make it active
    pub fn new_untitled(&mut self) -> DocumentId {
        let mut document = Document::new();
        document.set_history_limit(self.history_limit);
        self.add_document(document)
    }

    /// Swap the document at `id` for `document`, keeping its tab position
    pub fn replace_document(&mut self, id: DocumentId, mut document: Document) -> Option<DocumentId> {
        let index = self.index_of(id)?;
        let new_id = self.next_document_id();
        document.id = Some(new_id);
        if document.file_path.is_none() && document.untitled_name.is_none() {
            document.untitled_name = Some(self.next_untitled_name());
        }
        self.documents[index] = document;
        self.active_index = index;
        Some(new_id)
    }

    /// Remove a document unconditionally.
    ///
    /// Unsaved-changes gating happens before this is called. If the registry
    /// becomes empty a new untitled document is opened.
    pub fn remove_document(&mut self, id: DocumentId) -> Option<Document> {
        let index = self.index_of(id)?;
        let removed = self.documents.remove(index);
        tracing::debug!(%id, "document removed");

        if self.documents.is_empty() {
            self.active_index = 0;
            self.new_untitled();
        } else if self.active_index > index || self.active_index >= self.documents.len() {
            self.active_index = self.active_index.saturating_sub(1);
        }
        Some(removed)
    }

    /// Make `id` the active document
    pub fn set_active(&mut self, id: DocumentId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.active_index = index;
                true
            }
            None => false,
        }
    }

    /// Make the document at tab position `index` active
    pub fn set_active_index(&mut self, index: usize) -> bool {
        if index < self.documents.len() {
            self.active_index = index;
            true
        } else {
            false
        }
    }

    /// Activate the next tab, wrapping around
    pub fn next_tab(&mut self) {
        self.active_index = (self.active_index + 1) % self.documents.len();
    }

    /// Activate the previous tab, wrapping around
    pub fn prev_tab(&mut self) {
        let len = self.documents.len();
        self.active_index = (self.active_index + len - 1) % len;
    }

    pub fn active(&self) -> &Document {
        &self.documents[self.active_index]
    }

    pub fn active_mut(&mut self) -> &mut Document {
        &mut self.documents[self.active_index]
    }

    pub fn active_id(&self) -> DocumentId {
        self.active().id.unwrap_or(DocumentId(0))
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == Some(id))
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.id == Some(id))
    }

    /// Tab position of a document
    pub fn index_of(&self, id: DocumentId) -> Option<usize> {
        self.documents.iter().position(|d| d.id == Some(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Find if a file is already open by its path
    pub fn find_open_file(&self, path: &Path) -> Option<DocumentId> {
        let canonical = path.canonicalize().ok();
        self.documents.iter().find_map(|doc| {
            let doc_path = doc.file_path.as_ref()?;
            let same = match (&canonical, doc_path.canonicalize().ok()) {
                (Some(a), Some(b)) => *a == b,
                _ => doc_path == path,
            };
            if same {
                doc.id
            } else {
                None
            }
        })
    }

    /// Whether any open document has unsaved changes
    pub fn any_modified(&self) -> bool {
        self.documents.iter().any(|d| d.is_modified)
    }

    /// Window title for the active document, e.g. "*notes.txt - ePad"
    pub fn window_title(&self) -> String {
        let doc = self.active();
        let marker = if doc.is_modified { "*" } else { "" };
        format!("{}{} - {}", marker, doc.display_name(), APP_NAME)
    }

    /// Labels for the tab bar, in order
    pub fn tab_labels(&self) -> Vec<String> {
        self.documents
            .iter()
            .map(|doc| {
                if doc.is_modified {
                    format!("{}*", doc.display_name())
                } else {
                    doc.display_name()
                }
            })
            .collect()
    }

    /// Check internal invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        assert!(!self.documents.is_empty(), "registry must never be empty");
        assert!(
            self.active_index < self.documents.len(),
            "active index {} out of range ({} documents)",
            self.active_index,
            self.documents.len()
        );
        for doc in &self.documents {
            assert!(doc.id.is_some(), "registered document without id");
        }
    }

    #[cfg(not(debug_assertions))]
    pub fn assert_invariants(&self) {}
}
