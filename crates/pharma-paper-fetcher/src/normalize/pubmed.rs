//! PubMed `<PubmedArticle>` normalizer (efetch XML).

use crate::config::api;
use crate::error::{EntryError, EntryResult};
use crate::models::{NO_TITLE, PaperRecord, Source};
use crate::xml::XmlElement;

/// Date components that may follow the year, in order.
const DATE_SUFFIXES: [&str; 2] = ["Month", "Day"];

/// Normalize one `<PubmedArticle>` element.
///
/// Authors without a `LastName` are skipped together with their affiliations.
/// Affiliations are flattened into one list across all authors.
///
/// # Errors
///
/// Returns an error if the element is not a `<PubmedArticle>`, or if its
/// `PubDate` has an empty `Year` followed by a `Month`.
pub fn normalize_article(article: &XmlElement) -> EntryResult<PaperRecord> {
    if article.name() != Source::PubMed.entry_tag() {
        return Err(EntryError::WrongElement {
            expected: Source::PubMed.entry_tag(),
            found: article.name().to_string(),
        });
    }

    let title = article
        .find("ArticleTitle")
        .and_then(XmlElement::text)
        .unwrap_or_else(|| NO_TITLE.to_string());
    let mut record = PaperRecord::new(Source::PubMed, title);

    if let Some(author_list) = article.find("AuthorList") {
        for author in author_list.children("Author") {
            let Some(last_name) = author.child("LastName").and_then(XmlElement::text) else {
                continue;
            };

            let name = match author.child("ForeName").and_then(XmlElement::text) {
                Some(fore_name) => format!("{fore_name} {last_name}"),
                None => last_name,
            };
            record.authors.push(name);

            for info in author.children("AffiliationInfo") {
                record
                    .affiliations
                    .extend(info.children("Affiliation").filter_map(XmlElement::text));
            }
        }
    }

    record.r#abstract = article
        .find_path(&["Abstract", "AbstractText"])
        .and_then(XmlElement::text)
        .unwrap_or_default();

    record.publication_date = publication_date(article)?;

    record.id = article.find("PMID").and_then(XmlElement::text).unwrap_or_default();
    if !record.id.is_empty() {
        record.url = pubmed_record_url(&record.id);
    }

    record.doi = article
        .find_all("ELocationID")
        .into_iter()
        .find(|loc| loc.attr("EIdType") == Some("doi"))
        .and_then(XmlElement::text)
        .unwrap_or_default();

    record.journal =
        article.find_path(&["Journal", "Title"]).and_then(XmlElement::text).unwrap_or_default();

    Ok(record)
}

/// Public record page for a PMID.
#[must_use]
pub fn pubmed_record_url(pmid: &str) -> String {
    format!("{}/{pmid}/", api::PUBMED_RECORD_URL)
}

/// `Year[-Month[-Day]]` from the first `PubDate`, stopping at the first absent component.
///
/// An empty `Year` on its own means no date. An empty `Year` followed by a
/// `Month` is malformed. An empty `Month` or `Day` ends the date early.
fn publication_date(article: &XmlElement) -> EntryResult<String> {
    let Some(pub_date) = article.find("PubDate") else {
        return Ok(String::new());
    };
    let Some(year) = pub_date.child("Year") else {
        return Ok(String::new());
    };

    let Some(mut date) = year.text() else {
        if pub_date.child("Month").is_some() {
            return Err(EntryError::empty("Year"));
        }
        return Ok(String::new());
    };

    for component in DATE_SUFFIXES {
        let Some(text) = pub_date.child(component).and_then(XmlElement::text) else {
            break;
        };
        date.push('-');
        date.push_str(&text);
    }

    Ok(date)
}
