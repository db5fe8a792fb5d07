//! Synonym table for query expansion

use std::collections::HashMap;
use std::sync::OnceLock;

use super::normalize::stem;

/// Stem → alternate stem. Keys are normalized stems of at most six
/// characters; pairs that should widen recall both ways appear twice.
pub const SYNONYMS: &[(&str, &str)] = &[
    // Parking
    ("parkin", "lot"),
    ("lot", "parkin"),
    ("garage", "parkin"),
    ("парков", "parkin"),
    // Vacation / leave
    ("vacati", "leave"),
    ("leave", "vacati"),
    ("holida", "vacati"),
    ("отпуск", "vacati"),
    ("férias", "vacati"),
    // Remote work
    ("remote", "home"),
    ("home", "remote"),
    ("удален", "remote"),
    ("удалён", "remote"),
    ("remoto", "remote"),
    // HR contacts
    ("кадры", "hr"),
    ("кадров", "hr"),
    ("contac", "hr"),
    ("contat", "hr"),
    ("контак", "hr"),
    // Schedule
    ("schedu", "hours"),
    ("hours", "schedu"),
    ("график", "schedu"),
    ("horári", "schedu"),
    // Pay
    ("salary", "pay"),
    ("pay", "salary"),
    ("зарпла", "salary"),
    ("salári", "salary"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| SYNONYMS.iter().copied().collect())
}

/// Alternate stem for a token, if its stem is in the table
pub fn synonym_for(token: &str) -> Option<&'static str> {
    table().get(stem(token)).copied()
}

/// Expand tokens with their synonym stems.
///
/// Each token is kept and followed by its alternate stem when one exists.
/// Duplicates are not removed; repeated terms score additively.
pub fn expand(tokens: &[String]) -> Vec<String> {
    let mut expanded = Vec::with_capacity(tokens.len() * 2);
    for token in tokens {
        expanded.push(token.clone());
        if let Some(alt) = synonym_for(token) {
            expanded.push(alt.to_string());
        }
    }
    expanded
}
