//! Text normalization and tokenization

/// Characters removed from both queries and entry text before matching
pub const STRIPPED_PUNCTUATION: &[char] = &['?', '.', ',', '!', '«', '»', '(', ')'];

/// Tokens shorter than this many characters are too unspecific to score
pub const MIN_TOKEN_CHARS: usize = 3;

/// Length of the stem used for synonym lookup
pub const STEM_CHARS: usize = 6;

/// Length of the prefix used for substring matching
pub const MATCH_KEY_CHARS: usize = 4;

/// Lowercase text and strip the fixed punctuation set
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect()
}

/// Normalize a query and split it into word tokens of at least
/// [`MIN_TOKEN_CHARS`] characters
pub fn tokenize(query: &str) -> Vec<String> {
    normalize(query)
        .split_whitespace()
        .filter(|s| s.chars().count() >= MIN_TOKEN_CHARS)
        .map(|s| s.to_string())
        .collect()
}

/// Stem of a token: its first [`STEM_CHARS`] characters
pub fn stem(token: &str) -> &str {
    char_prefix(token, STEM_CHARS)
}

/// Match key of a token: its first [`MATCH_KEY_CHARS`] characters
pub fn match_key(token: &str) -> &str {
    char_prefix(token, MATCH_KEY_CHARS)
}

/// Prefix of at most `n` characters, never splitting a UTF-8 sequence
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Hello, World! (Test?)"), "hello world test");
        assert_eq!(normalize("«Отпуск»."), "отпуск");
    }

    #[test]
    fn test_normalize_keeps_other_symbols() {
        assert_eq!(normalize("hr@company.com: **28**"), "hr@companycom: **28**");
    }

    #[test]
    fn test_tokenize_drops_short_tokens() {
        let tokens = tokenize("How many   vacation days, ok?");
        assert_eq!(tokens, vec!["how", "many", "vacation", "days"]);
    }

    #[test]
    fn test_tokenize_counts_characters_not_bytes() {
        // Two Cyrillic letters are four bytes but still too short
        assert!(tokenize("да").is_empty());
        assert_eq!(tokenize("как дела"), vec!["как", "дела"]);
    }

    #[test]
    fn test_tokenize_only_short_words() {
        assert!(tokenize("hi ok").is_empty());
        assert!(tokenize("?!.").is_empty());
    }

    #[test]
    fn test_stem_and_match_key() {
        assert_eq!(stem("parking"), "parkin");
        assert_eq!(stem("lot"), "lot");
        assert_eq!(match_key("vacation"), "vaca");
        assert_eq!(match_key("day"), "day");
        assert_eq!(stem("удаленно"), "удален");
        assert_eq!(match_key("отпуск"), "отпу");
    }
}
