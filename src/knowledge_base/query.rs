//! Query operations on a knowledge-base snapshot
//!
//! Callers take a snapshot once and query it without holding any lock, so
//! the answer and the reported revision always come from the same document.

use crate::search::{best_match, rank};
use crate::types::{Entry, ScoredEntry};

use super::KnowledgeSnapshot;

impl KnowledgeSnapshot {
    /// Best matching entry for a query, or `None` for no match
    pub fn find_answer(&self, query: &str) -> Option<&Entry> {
        best_match(query, self.entries())
    }

    /// Entries with a positive score, best first
    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<ScoredEntry> {
        rank(query, self.entries(), limit)
    }
}
