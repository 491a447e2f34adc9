//! Snapshot history (undo/redo) for a single document.
//!
//! Each entry is a full `(cursor, content)` pair. Ropes share structure, so
//! keeping whole-document snapshots is cheap for the small history sizes used
//! here.

use std::collections::VecDeque;

use ropey::Rope;

/// Default number of snapshots kept per document
pub const DEFAULT_HISTORY_LIMIT: usize = 30;

/// A recorded cursor position and document content
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Cursor char offset at the time of the snapshot
    pub cursor: usize,
    /// Full document content
    pub content: Rope,
}

impl Snapshot {
    pub fn new(cursor: usize, content: Rope) -> Self {
        Self { cursor, content }
    }
}

/// Linear snapshot history with a fixed capacity.
///
/// `index` points at the snapshot matching the current document state. Taking
/// a snapshot after an undo drops everything after `index`.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    entries: VecDeque<Snapshot>,
    index: usize,
    max_size: usize,
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotHistory {
    /// Create a new history with the default capacity
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new history with the given capacity (minimum 1)
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size.max(1)),
            index: 0,
            max_size: max_size.max(1),
        }
    }

    /// Record a snapshot unless it matches the current entry.
    ///
    /// Returns `true` if a snapshot was recorded.
    pub fn take_snapshot(&mut self, cursor: usize, content: &Rope) -> bool {
        if let Some(current) = self.entries.get(self.index) {
            if current.content == *content {
                return false;
            }
        }

        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push_back(Snapshot::new(cursor, content.clone()));

        while self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
        self.index = self.entries.len() - 1;

        tracing::trace!(
            len = self.entries.len(),
            index = self.index,
            "snapshot recorded"
        );
        true
    }

    /// Step back one snapshot.
    ///
    /// If the document diverged from the newest snapshot, the current state is
    /// recorded first so it can be redone later.
    pub fn undo(&mut self, cursor: usize, content: &Rope) -> Option<Snapshot> {
        if self.entries.is_empty() {
            return None;
        }
        if self.is_at_newest() {
            self.take_snapshot(cursor, content);
        }
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).cloned()
    }

    /// Step forward one snapshot
    pub fn redo(&mut self) -> Option<Snapshot> {
        if self.entries.is_empty() || self.is_at_newest() {
            return None;
        }
        self.index += 1;
        self.entries.get(self.index).cloned()
    }

    /// Drop all history and record a single baseline snapshot
    pub fn reset(&mut self, cursor: usize, content: &Rope) {
        self.clear();
        self.take_snapshot(cursor, content);
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && !self.is_at_newest()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the current snapshot
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Iterate snapshots from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }

    fn is_at_newest(&self) -> bool {
        self.index + 1 >= self.entries.len()
    }
}
