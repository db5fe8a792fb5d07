//! Knowledge-Base Lexical Retrieval
//!
//! Answers natural-language questions from a single markdown-like document
//! without any language model: the document is cut into heading/body
//! entries and each query is scored against them with keyword matching and
//! a small multilingual synonym table.
//!
//! # Features
//!
//! - **Segmenter**: `**Heading**` or `# Heading` lines start an entry
//! - **Lexical Matcher**: 4-character keys, heading hits weighted 3, body hits 1
//! - **Synonyms**: English, Russian and Portuguese variants share a stem
//! - **Atomic Updates**: queries always see a complete entry list
//! - **HTTP API**: chat with optional remote model and local fallback
//!
//! # Modules
//!
//! - `segment`: Document segmenter
//! - `search`: Normalization, synonym expansion and scoring
//! - `knowledge_base`: Snapshot store with persistence
//! - `types`: Core data structures (Entry, ScoredEntry)
//! - `llm`: Remote answer model (Gemini)
//! - `api`: Axum router, handlers and admin auth
//! - `config`, `logger`, `audit`, `i18n`: Service plumbing
//!
//! # Example
//!
//! ```
//! use kb_lexical::{best_match, segment};
//!
//! let entries = segment("**Vacation**\nEmployees get 28 days of vacation.\n");
//! let entry = best_match("how long is my vacation?", &entries).unwrap();
//! assert_eq!(entry.body(), "Employees get 28 days of vacation.");
//! ```

pub mod api;
pub mod audit;
pub mod config;
pub mod error;
pub mod i18n;
pub mod knowledge_base;
pub mod llm;
pub mod logger;
pub mod search;
pub mod segment;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{KbError, RemoteError, Result};
pub use i18n::Language;
pub use knowledge_base::{KnowledgeBase, KnowledgeSnapshot};
pub use search::{best_match, rank};
pub use segment::segment;
pub use types::{Entry, ScoredEntry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
