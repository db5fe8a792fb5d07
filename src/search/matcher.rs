//! Lexical matching of a query against knowledge-base entries
//!
//! Every expansion token contributes its four-character match key: three
//! points when the key occurs in the entry heading, otherwise one point when
//! it occurs in the body. Substring containment stands in for stemming, so
//! short words sharing a prefix can produce false positives.

use rayon::prelude::*;

use super::normalize::{match_key, tokenize};
use super::synonyms::expand;
use crate::types::{Entry, ScoredEntry};

/// Points for a match key found in the heading
pub const HEADING_WEIGHT: u32 = 3;

/// Points for a match key found only in the body
pub const BODY_WEIGHT: u32 = 1;

/// Entry count above which scoring runs on the rayon pool
const PARALLEL_SCORE_THRESHOLD: usize = 1000;

/// Normalize, tokenize and expand a raw query
pub fn expansion_tokens(query: &str) -> Vec<String> {
    expand(&tokenize(query))
}

/// Score one entry against already expanded tokens
pub fn score_entry(entry: &Entry, tokens: &[String]) -> u32 {
    tokens
        .iter()
        .map(|token| {
            let key = match_key(token);
            if entry.normalized_heading().contains(key) {
                HEADING_WEIGHT
            } else if entry.normalized_body().contains(key) {
                BODY_WEIGHT
            } else {
                0
            }
        })
        .sum()
}

/// Scores for every entry, in document order
fn score_all(entries: &[Entry], tokens: &[String]) -> Vec<u32> {
    if entries.len() > PARALLEL_SCORE_THRESHOLD {
        entries.par_iter().map(|e| score_entry(e, tokens)).collect()
    } else {
        entries.iter().map(|e| score_entry(e, tokens)).collect()
    }
}

/// Select the best entry for a query.
///
/// Returns `None` when no entry scores above zero, which covers an empty
/// entry list and a query without any token of three or more characters.
/// On equal scores the entry that comes first in the document wins.
pub fn best_match<'a>(query: &str, entries: &'a [Entry]) -> Option<&'a Entry> {
    let tokens = expansion_tokens(query);
    if tokens.is_empty() || entries.is_empty() {
        return None;
    }

    let mut best: Option<&Entry> = None;
    let mut max_score = 0;
    for (entry, score) in entries.iter().zip(score_all(entries, &tokens)) {
        if score > max_score {
            max_score = score;
            best = Some(entry);
        }
    }

    tracing::debug!(
        tokens = tokens.len(),
        score = max_score,
        matched = ?best.map(Entry::heading),
        "lexical match"
    );
    best
}

/// Rank entries with a positive score, highest first.
///
/// Entries with equal scores keep their document order.
pub fn rank(query: &str, entries: &[Entry], limit: Option<usize>) -> Vec<ScoredEntry> {
    let tokens = expansion_tokens(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredEntry> = entries
        .iter()
        .zip(score_all(entries, &tokens))
        .filter(|(_, score)| *score > 0)
        .map(|(entry, score)| ScoredEntry {
            entry: entry.clone(),
            score,
        })
        .collect();

    // stable sort keeps document order among ties
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    if let Some(lim) = limit {
        scored.truncate(lim);
    }
    scored
}
