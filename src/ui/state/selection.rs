// SPDX-License-Identifier: MPL-2.0
//! Selection within the attachment list
//!
//! The index always points at an existing entry: it is clamped on every
//! change and cleared when the list becomes empty.

/// Outcome of re-validating the selection after the list changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// Selection untouched.
    Unchanged,
    /// Index moved to the new last entry.
    Clamped(usize),
    /// List is empty; selection cleared.
    Cleared,
}

/// Currently selected attachment index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachmentSelection {
    index: Option<usize>,
}

impl AttachmentSelection {
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_none()
    }

    /// Selects `index`, clamped into `[0, len - 1]`. An empty list clears
    /// the selection.
    pub fn select(&mut self, index: usize, len: usize) -> Option<usize> {
        self.index = len.checked_sub(1).map(|last| index.min(last));
        self.index
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    /// Re-validates the selection against a new list length.
    pub fn on_list_len(&mut self, len: usize) -> ListChange {
        match (self.index, len) {
            (None, _) => ListChange::Unchanged,
            (Some(_), 0) => {
                self.index = None;
                ListChange::Cleared
            }
            (Some(index), len) if index >= len => {
                self.index = Some(len - 1);
                ListChange::Clamped(len - 1)
            }
            (Some(_), _) => ListChange::Unchanged,
        }
    }

    /// Moves to the next entry, stopping at the last one.
    pub fn next(&mut self, len: usize) -> Option<usize> {
        let index = self.index.map_or(0, |i| i.saturating_add(1));
        self.select(index, len)
    }

    /// Moves to the previous entry, stopping at the first one.
    pub fn previous(&mut self, len: usize) -> Option<usize> {
        let index = self.index.map_or(0, |i| i.saturating_sub(1));
        self.select(index, len)
    }

    /// One-based "i/n" label, e.g. `3/3`.
    #[must_use]
    pub fn position_label(&self, len: usize) -> Option<String> {
        self.index
            .filter(|&i| i < len)
            .map(|i| format!("{}/{}", i + 1, len))
    }
}
