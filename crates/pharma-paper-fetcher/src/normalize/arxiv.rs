//! arXiv Atom entry normalizer.

use super::required_text;
use crate::error::{EntryError, EntryResult};
use crate::models::{NO_TITLE, PaperRecord, Source};
use crate::xml::XmlElement;

/// Normalize one Atom `<entry>` from the arXiv query API.
///
/// Text values are trimmed, and a title that trims to nothing becomes
/// [`NO_TITLE`]. The ID is the last path segment of the entry's
/// `<id>` URL. arXiv exposes no affiliations, so `affiliations` stays empty.
///
/// # Errors
///
/// Returns an error if the element is not an `<entry>`, or if `title`, `summary`,
/// `published`, `id` or an author `name` is present without text.
pub fn normalize_entry(entry: &XmlElement) -> EntryResult<PaperRecord> {
    if entry.name() != Source::Arxiv.entry_tag() {
        return Err(EntryError::WrongElement {
            expected: Source::Arxiv.entry_tag(),
            found: entry.name().to_string(),
        });
    }

    let title = trimmed(entry, "title")?
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| NO_TITLE.to_string());
    let mut record = PaperRecord::new(Source::Arxiv, title);

    for author in entry.children("author") {
        if let Some(name) = author.child("name") {
            let name = name.text().ok_or_else(|| EntryError::empty("name"))?;
            record.authors.push(name.trim().to_string());
        }
    }

    record.r#abstract = trimmed(entry, "summary")?.unwrap_or_default();
    record.publication_date = trimmed(entry, "published")?.unwrap_or_default();
    record.url = trimmed(entry, "id")?.unwrap_or_default();
    record.id = arxiv_id_from_url(&record.url).to_string();

    record.categories = entry
        .children("category")
        .filter_map(|category| category.attr("term"))
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect();

    Ok(record)
}

/// Last path segment of an arXiv abstract URL.
///
/// `http://arxiv.org/abs/2401.01234v2` -> `2401.01234v2`
#[must_use]
pub fn arxiv_id_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or_default()
}

fn trimmed(entry: &XmlElement, name: &str) -> EntryResult<Option<String>> {
    Ok(required_text(entry.child(name), name)?.map(|text| text.trim().to_string()))
}
