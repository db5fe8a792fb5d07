//! Immutable knowledge-base snapshot

use crate::segment::segment;
use crate::types::Entry;

/// The raw document, its entries and the revision that produced them.
///
/// Snapshots are never mutated; an update builds a new one and swaps it in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeSnapshot {
    document: String,
    entries: Vec<Entry>,
    revision: u64,
}

impl KnowledgeSnapshot {
    /// Segment a document into a new snapshot
    pub fn from_document(document: String, revision: u64) -> Self {
        let entries = segment(&document);
        Self {
            document,
            entries,
            revision,
        }
    }

    /// Empty snapshot, as published after a removal
    pub fn empty(revision: u64) -> Self {
        Self {
            revision,
            ..Self::default()
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_document() {
        let snapshot = KnowledgeSnapshot::from_document("**HR**\nhr@company.com".to_string(), 3);

        assert_eq!(snapshot.revision(), 3);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.document(), "**HR**\nhr@company.com");
    }

    #[test]
    fn test_empty() {
        let snapshot = KnowledgeSnapshot::empty(7);
        assert!(snapshot.is_empty());
        assert!(snapshot.document().is_empty());
        assert_eq!(snapshot.revision(), 7);
    }
}
