//! Lexical search with synonym expansion
//!
//! This module provides the local retrieval fallback:
//! - Normalization and tokenization of queries and entry text
//! - A fixed synonym table keyed by six-character stems
//! - Heading/body weighted scoring with document-order tie-break

mod matcher;
mod normalize;
mod synonyms;

pub use matcher::{best_match, expansion_tokens, rank, score_entry, BODY_WEIGHT, HEADING_WEIGHT};
pub use normalize::{match_key, normalize, stem, tokenize, STRIPPED_PUNCTUATION};
pub use synonyms::{expand, synonym_for, SYNONYMS};
