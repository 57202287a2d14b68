//! Normalized paper record.

use serde::{Deserialize, Serialize};

use super::Source;

/// Title used when the upstream entry has none.
pub const NO_TITLE: &str = "No title";

/// A paper normalized from either source.
///
/// Fields a source does not provide are empty rather than absent, so every
/// record exports to the same set of columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperRecord {
    /// Source the record was fetched from.
    pub source: Source,

    /// Paper title, [`NO_TITLE`] when missing upstream.
    pub title: String,

    /// Author display names in upstream order.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Abstract text.
    #[serde(default)]
    pub r#abstract: String,

    /// Partial ISO date: `YYYY`, `YYYY-MM` or `YYYY-MM-DD` (arXiv keeps the full timestamp).
    #[serde(default)]
    pub publication_date: String,

    /// Canonical record URL.
    #[serde(default)]
    pub url: String,

    /// Source-native identifier (arXiv ID or PMID).
    #[serde(default)]
    pub id: String,

    /// Subject tags (arXiv only).
    #[serde(default)]
    pub categories: Vec<String>,

    /// Author affiliations, flattened across authors (PubMed only).
    #[serde(default)]
    pub affiliations: Vec<String>,

    /// Journal title (PubMed only).
    #[serde(default)]
    pub journal: String,

    /// Digital Object Identifier (PubMed only).
    #[serde(default)]
    pub doi: String,
}

impl PaperRecord {
    /// Create a record with only the source and title set.
    #[must_use]
    pub fn new(source: Source, title: impl Into<String>) -> Self {
        Self {
            source,
            title: title.into(),
            authors: Vec::new(),
            r#abstract: String::new(),
            publication_date: String::new(),
            url: String::new(),
            id: String::new(),
            categories: Vec::new(),
            affiliations: Vec::new(),
            journal: String::new(),
            doi: String::new(),
        }
    }

    /// Check if any affiliation text was collected.
    #[must_use]
    pub fn has_affiliations(&self) -> bool {
        self.affiliations.iter().any(|a| !a.is_empty())
    }

    /// First collected affiliation, if any.
    #[must_use]
    pub fn first_affiliation(&self) -> Option<&str> {
        self.affiliations.first().map(String::as_str)
    }

    /// Up to `limit` author names joined with ", ", followed by "..." when truncated.
    #[must_use]
    pub fn author_preview(&self, limit: usize) -> String {
        let shown = self.authors.iter().take(limit).map(String::as_str).collect::<Vec<_>>();
        let mut preview = shown.join(", ");
        if self.authors.len() > limit {
            preview.push_str("...");
        }
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = PaperRecord::new(Source::Arxiv, "A title");
        assert_eq!(record.title, "A title");
        assert!(record.authors.is_empty());
        assert!(record.affiliations.is_empty());
        assert!(record.journal.is_empty());
        assert!(!record.has_affiliations());
    }

    #[test]
    fn test_author_preview_truncates() {
        let mut record = PaperRecord::new(Source::PubMed, NO_TITLE);
        record.authors = vec!["A".into(), "B".into(), "C".into(), "D".into()];
        assert_eq!(record.author_preview(3), "A, B, C...");
        assert_eq!(record.author_preview(4), "A, B, C, D");
    }

    #[test]
    fn test_json_roundtrip() {
        let mut record = PaperRecord::new(Source::PubMed, "Title");
        record.affiliations.push("Pfizer Inc".into());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["source"], "PubMed");
        let decoded: PaperRecord = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, record);
    }
}
