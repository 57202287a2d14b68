//! CSV export of retained records.
//!
//! One row per record with a fixed column order. List fields are joined
//! with `"; "`; fields a source does not provide are empty cells.

use std::io::Write;
use std::path::Path;
use std::sync::LazyLock;

use chrono::{DateTime, TimeZone};
use regex::Regex;
use serde::Serialize;

use crate::error::FetchResult;
use crate::models::PaperRecord;

/// Export column order.
pub const COLUMNS: [&str; 11] = [
    "source",
    "title",
    "authors",
    "abstract",
    "publication_date",
    "url",
    "id",
    "journal",
    "doi",
    "affiliations",
    "categories",
];

/// Separator for list-valued cells.
pub const LIST_SEPARATOR: &str = "; ";

/// Prefix of generated output filenames.
pub const OUTPUT_PREFIX: &str = "research_papers";

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("valid filename pattern"));
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("valid separator pattern"));

/// One CSV row; field order defines the column order.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    source: &'static str,
    title: &'a str,
    authors: String,
    r#abstract: &'a str,
    publication_date: &'a str,
    url: &'a str,
    id: &'a str,
    journal: &'a str,
    doi: &'a str,
    affiliations: String,
    categories: String,
}

impl<'a> From<&'a PaperRecord> for CsvRow<'a> {
    fn from(record: &'a PaperRecord) -> Self {
        Self {
            source: record.source.label(),
            title: &record.title,
            authors: record.authors.join(LIST_SEPARATOR),
            r#abstract: &record.r#abstract,
            publication_date: &record.publication_date,
            url: &record.url,
            id: &record.id,
            journal: &record.journal,
            doi: &record.doi,
            affiliations: record.affiliations.join(LIST_SEPARATOR),
            categories: record.categories.join(LIST_SEPARATOR),
        }
    }
}

/// Write a header row and one row per record.
///
/// # Errors
///
/// Returns error if the underlying writer fails.
pub fn write_records<W: Write>(writer: W, records: &[PaperRecord]) -> FetchResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    // serde only emits a header once the first row is written
    if records.is_empty() {
        csv.write_record(COLUMNS)?;
    }
    for record in records {
        csv.serialize(CsvRow::from(record))?;
    }

    csv.flush()?;
    Ok(())
}

/// Save records to a CSV file (UTF-8).
///
/// With no records, a warning is logged and no file is created.
///
/// # Errors
///
/// Returns error if the file cannot be created or written.
pub fn save_to_csv(records: &[PaperRecord], path: &Path) -> FetchResult<()> {
    if records.is_empty() {
        tracing::warn!("No papers to save");
        return Ok(());
    }

    tracing::info!(
        count = records.len(),
        path = %path.display(),
        "Saving papers"
    );

    let file = std::fs::File::create(path)?;
    write_records(std::io::BufWriter::new(file), records)?;

    tracing::info!(path = %path.display(), "Saved papers");
    Ok(())
}

/// Reduce a query to a filename-safe fragment.
///
/// Drops everything except word characters, whitespace and hyphens, trims,
/// then collapses runs of hyphens/whitespace into a single `_`.
#[must_use]
pub fn sanitize_query(query: &str) -> String {
    let cleaned = UNSAFE_CHARS.replace_all(query, "");
    SEPARATOR_RUNS.replace_all(cleaned.trim(), "_").into_owned()
}

/// Default output filename: `research_papers_<query>_<YYYYMMDD_HHMMSS>.csv`.
#[must_use]
pub fn default_output_filename<Tz>(query: &str, timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{OUTPUT_PREFIX}_{}_{}.csv",
        sanitize_query(query),
        timestamp.format("%Y%m%d_%H%M%S")
    )
}
