//! Knowledge Base - entry store for the lexical matcher
//!
//! Holds the current [`KnowledgeSnapshot`] behind a lock that is only taken
//! to clone or swap an `Arc`. Updates segment the new document and persist
//! it before the swap, so queries never see a partially rebuilt entry list.

mod query;
mod snapshot;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::error::Result;
use crate::utils::{atomic_write, remove_if_exists};

pub use snapshot::KnowledgeSnapshot;

/// Knowledge base with an atomically replaced in-memory snapshot
pub struct KnowledgeBase {
    document_path: Option<PathBuf>,
    current: RwLock<Arc<KnowledgeSnapshot>>,
    /// Serializes writers so persistence and publication happen in the same order
    update_lock: Mutex<()>,
}

impl KnowledgeBase {
    /// Create an empty, memory-only knowledge base
    pub fn new() -> Self {
        Self {
            document_path: None,
            current: RwLock::new(Arc::new(KnowledgeSnapshot::default())),
            update_lock: Mutex::new(()),
        }
    }

    /// Open a knowledge base persisted at `path`, loading the document if it exists
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let snapshot = match Self::read_document(&path)? {
            Some(document) => KnowledgeSnapshot::from_document(document, 0),
            None => KnowledgeSnapshot::default(),
        };

        tracing::info!(
            path = %path.display(),
            entries = snapshot.len(),
            "knowledge base opened"
        );

        Ok(Self {
            document_path: Some(path),
            current: RwLock::new(Arc::new(snapshot)),
            update_lock: Mutex::new(()),
        })
    }

    fn read_document(path: &Path) -> Result<Option<String>> {
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    /// Current snapshot (lock held only for the `Arc` clone)
    pub fn snapshot(&self) -> Arc<KnowledgeSnapshot> {
        Arc::clone(&*self.current.read())
    }

    fn publish(&self, snapshot: KnowledgeSnapshot) -> Arc<KnowledgeSnapshot> {
        let snapshot = Arc::new(snapshot);
        *self.current.write() = Arc::clone(&snapshot);
        snapshot
    }

    /// Replace the document, rebuilding all entries
    pub fn load_document(&self, document: impl Into<String>) -> Result<Arc<KnowledgeSnapshot>> {
        let document = document.into();
        let _guard = self.update_lock.lock();

        let revision = self.snapshot().revision() + 1;
        let next = KnowledgeSnapshot::from_document(document, revision);

        if let Some(path) = &self.document_path {
            atomic_write(path, next.document())?;
        }

        let published = self.publish(next);
        tracing::info!(
            entries = published.len(),
            revision = published.revision(),
            "knowledge base updated"
        );
        Ok(published)
    }

    /// Remove the document; the entry list becomes empty
    pub fn clear(&self) -> Result<Arc<KnowledgeSnapshot>> {
        let _guard = self.update_lock.lock();

        if let Some(path) = &self.document_path {
            remove_if_exists(path)?;
        }

        let revision = self.snapshot().revision() + 1;
        let published = self.publish(KnowledgeSnapshot::empty(revision));
        tracing::info!(revision, "knowledge base cleared");
        Ok(published)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}
