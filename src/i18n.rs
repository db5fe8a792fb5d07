//! Supported languages and localized fallback text

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Entry;

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ru,
    En,
    Pt,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Ru, Language::En, Language::Pt];

    pub fn code(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// Parse a language tag such as `en`, `pt-BR` or `ru_RU`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "ru" => Some(Language::Ru),
            "en" => Some(Language::En),
            "pt" => Some(Language::Pt),
            _ => None,
        }
    }

    /// First language in an `Accept-Language` header that is also in `supported`
    pub fn from_accept_language(header: &str, supported: &[Language]) -> Option<Self> {
        header
            .split(',')
            .filter_map(|part| part.split(';').next())
            .filter_map(Language::from_tag)
            .find(|lang| supported.contains(lang))
    }

    /// Message shown when the knowledge base has no matching entry
    pub fn no_match_message(self) -> &'static str {
        match self {
            Language::Ru => "Я поискал это в базе знаний, но не нашел точного совпадения.",
            Language::En => "I searched the knowledge base but couldn't find an exact match.",
            Language::Pt => {
                "Pesquisei na base de conhecimento, mas não encontrei uma correspondência exata."
            }
        }
    }

    /// Lead-in for the list of topics the knowledge base covers
    pub fn topics_label(self) -> &'static str {
        match self {
            Language::Ru => "Вот что есть в базе знаний:",
            Language::En => "Here is what the knowledge base covers:",
            Language::Pt => "Aqui está o que a base de conhecimento cobre:",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_tag(s).ok_or_else(|| format!("unsupported language: '{s}'"))
    }
}

/// Answer used when the matcher reports no match.
///
/// The localized "no exact match" message, followed by the entry headings in
/// bold when the knowledge base is not empty.
pub fn fallback_answer(lang: Language, entries: &[Entry]) -> String {
    let mut answer = lang.no_match_message().to_string();
    if entries.is_empty() {
        return answer;
    }

    answer.push_str("\n\n");
    answer.push_str(lang.topics_label());
    for entry in entries {
        answer.push_str("\n**");
        answer.push_str(entry.heading());
        answer.push_str("**");
    }
    answer
}
