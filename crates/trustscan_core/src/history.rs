use std::collections::VecDeque;

pub const EMPTY_HISTORY_TEXT: &str = "No scans yet";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    pub is_safe: bool,
}

/// Most-recent-first list of verified URLs, starting with an empty-state placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryList {
    placeholder: bool,
    entries: VecDeque<HistoryEntry>,
}

impl Default for HistoryList {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryList {
    pub fn new() -> Self {
        Self {
            placeholder: true,
            entries: VecDeque::new(),
        }
    }

    pub fn has_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Inserts at the head. Returns true when this call removed the placeholder.
    pub fn prepend(&mut self, entry: HistoryEntry) -> bool {
        let removed_placeholder = std::mem::replace(&mut self.placeholder, false);
        self.entries.push_front(entry);
        removed_placeholder
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
