//! Record normalization: upstream XML entries to [`PaperRecord`].
//!
//! Each source has one normalizer; [`Source::normalize`] dispatches on the
//! source tag so the document walk in [`normalize_document`] is shared.

pub mod arxiv;
pub mod pubmed;

use crate::error::EntryResult;
use crate::models::{PaperRecord, Source};
use crate::xml::XmlElement;

impl Source {
    /// Normalize one entry element of this source's response format.
    ///
    /// # Errors
    ///
    /// Returns an [`EntryError`](crate::error::EntryError) when the entry is malformed.
    pub fn normalize(self, entry: &XmlElement) -> EntryResult<PaperRecord> {
        match self {
            Self::Arxiv => arxiv::normalize_entry(entry),
            Self::PubMed => pubmed::normalize_article(entry),
        }
    }
}

/// Normalize every entry of a parsed response document.
///
/// Malformed entries are logged and skipped; the rest keep document order.
#[must_use]
pub fn normalize_document(source: Source, root: &XmlElement) -> Vec<PaperRecord> {
    let entries: Vec<&XmlElement> = match source {
        // Atom entries are direct children of the feed
        Source::Arxiv => root.children(source.entry_tag()).collect(),
        Source::PubMed => {
            if root.name() == source.entry_tag() {
                vec![root]
            } else {
                root.find_all(source.entry_tag())
            }
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match source.normalize(entry) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(source = %source, index, error = %e, "Skipping malformed entry");
            }
        }
    }

    records
}

/// Text of an optional element; `Ok(None)` when the element is absent.
///
/// A present element without text is an error.
fn required_text(element: Option<&XmlElement>, name: &str) -> EntryResult<Option<String>> {
    match element {
        None => Ok(None),
        Some(el) => el.text().map(Some).ok_or_else(|| crate::error::EntryError::empty(name)),
    }
}
