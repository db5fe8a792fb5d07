//! Knowledge-base entry types

use serde::Serialize;

use crate::search::normalize;

/// One heading/body pair extracted from the knowledge-base document.
///
/// `heading` and `body` keep the original text (markdown emphasis included)
/// for display. The normalized forms are only used for matching and are
/// computed once, when the entry is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    heading: String,
    body: String,
    #[serde(skip_serializing)]
    normalized_heading: String,
    #[serde(skip_serializing)]
    normalized_body: String,
}

impl Entry {
    /// Build an entry, or `None` when the heading or body is blank.
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Option<Self> {
        let heading = heading.into();
        let body = body.into();
        if heading.trim().is_empty() || body.trim().is_empty() {
            return None;
        }

        Some(Self {
            normalized_heading: normalize(&heading),
            normalized_body: normalize(&body),
            heading,
            body,
        })
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn normalized_heading(&self) -> &str {
        &self.normalized_heading
    }

    pub fn normalized_body(&self) -> &str {
        &self.normalized_body
    }
}

/// An entry together with the score it received for a query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredEntry {
    #[serde(flatten)]
    pub entry: Entry,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_normalized_forms() {
        let entry = Entry::new("«Remote» work (policy)?", "Up to **3 days**, per week!").unwrap();

        assert_eq!(entry.heading(), "«Remote» work (policy)?");
        assert_eq!(entry.normalized_heading(), "remote work policy");
        assert_eq!(entry.normalized_body(), "up to **3 days** per week");
    }

    #[test]
    fn test_new_rejects_blank_parts() {
        assert!(Entry::new("", "body").is_none());
        assert!(Entry::new("heading", "   ").is_none());
        assert!(Entry::new("heading", "body").is_some());
    }

    #[test]
    fn test_serialize_hides_normalized_fields() {
        let entry = Entry::new("HR", "Email: hr@company.com").unwrap();
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["heading"], "HR");
        assert_eq!(json["body"], "Email: hr@company.com");
        assert!(json.get("normalized_heading").is_none());
    }
}
