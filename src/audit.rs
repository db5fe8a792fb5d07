//! Audit log of chat exchanges
//!
//! One JSON object per line, appended to the configured file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::i18n::Language;

/// Where an answer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// The remote language model
    Model,
    /// A matched knowledge-base entry
    KnowledgeBase,
    /// The localized no-match text
    Fallback,
}

/// One query/response pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub timestamp: String,
    pub language: Language,
    pub query: String,
    pub answer: String,
    pub source: AnswerSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

impl AuditRecord {
    pub fn new(
        language: Language,
        query: impl Into<String>,
        answer: impl Into<String>,
        source: AnswerSource,
        heading: Option<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            language,
            query: query.into(),
            answer: answer.into(),
            source,
            heading,
        }
    }
}

/// Append-only JSONL audit log
pub struct AuditLog {
    path: PathBuf,
    enabled: bool,
    write_lock: Mutex<()>,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            path: path.into(),
            enabled,
            write_lock: Mutex::new(()),
        }
    }

    /// A log that records nothing
    pub fn disabled() -> Self {
        Self::new(PathBuf::new(), false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append a record; a no-op when disabled
    pub fn append(&self, record: &AuditRecord) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let mut line = serde_json::to_string(record)?;
        line.push('\n');

        let _guard = self.write_lock.lock();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// Append a record, logging instead of returning a failure
    pub fn record(&self, record: &AuditRecord) {
        if let Err(e) = self.append(record) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write audit record");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_append_jsonl() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.jsonl");
        let log = AuditLog::new(&path, true);

        log.append(&AuditRecord::new(
            Language::En,
            "how many vacation days",
            "You get 28 days per year.",
            AnswerSource::KnowledgeBase,
            Some("Vacation".to_string()),
        ))
        .unwrap();
        log.append(&AuditRecord::new(Language::Ru, "привет", "...", AnswerSource::Fallback, None))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: AuditRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.source, AnswerSource::KnowledgeBase);
        assert_eq!(first.heading.as_deref(), Some("Vacation"));
        assert!(lines[0].contains("\"source\":\"knowledge_base\""));
        assert!(!lines[1].contains("heading"));
    }

    #[test]
    fn test_disabled_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("audit.jsonl");
        let log = AuditLog::new(&path, false);

        log.append(&AuditRecord::new(Language::En, "q", "a", AnswerSource::Model, None))
            .unwrap();
        assert!(!path.exists());
    }
}
