//! Plain-text run report printed after a fetch.

use std::path::Path;

use crate::models::{PaperRecord, Source};

/// Number of sample records shown in the summary.
pub const SAMPLE_LIMIT: usize = 3;

const RULE_WIDTH: usize = 60;
const AUTHOR_PREVIEW: usize = 3;
const AFFILIATION_PREVIEW: usize = 100;

/// Format the parameters echoed before an interactive run.
#[must_use]
pub fn format_run_header(
    query: &str,
    max_results: usize,
    sources: &[Source],
    output: &Path,
) -> String {
    let sources = sources.iter().map(|s| s.cli_name()).collect::<Vec<_>>().join(", ");

    let mut output_text = String::from("\nStarting search...\n");
    output_text.push_str(&format!("Query: {query}\n"));
    output_text.push_str(&format!("Max results: {max_results}\n"));
    output_text.push_str(&format!("Sources: {sources}\n"));
    output_text.push_str(&format!("Output file: {}\n", output.display()));
    output_text.push_str(&"-".repeat(RULE_WIDTH));
    output_text
}

/// Format the end-of-run report: totals plus a few sample records.
#[must_use]
pub fn format_summary(query: &str, records: &[PaperRecord], output: Option<&Path>) -> String {
    let rule = "=".repeat(RULE_WIDTH);

    let mut out = format!("\n{rule}\nSEARCH RESULTS FOR: {query}\n{rule}\n");
    out.push_str(&format!("Total papers with pharma/biotech affiliations: {}\n", records.len()));

    if let Some(path) = output {
        out.push_str(&format!("Results saved to: {}\n", path.display()));
    }

    if records.is_empty() {
        return out;
    }

    out.push_str("\nSample results:\n");
    for (i, record) in records.iter().take(SAMPLE_LIMIT).enumerate() {
        out.push_str(&format_sample(record, i + 1));
    }

    out
}

fn format_sample(record: &PaperRecord, index: usize) -> String {
    let mut out = format!("\n{index}. {}\n", record.title);
    out.push_str(&format!("   Source: {}\n", record.source));
    out.push_str(&format!("   Authors: {}\n", record.author_preview(AUTHOR_PREVIEW)));

    if !record.journal.is_empty() {
        out.push_str(&format!("   Journal: {}\n", record.journal));
    }

    if record.has_affiliations() {
        let affiliation = record.first_affiliation().unwrap_or_default();
        let preview: String = affiliation.chars().take(AFFILIATION_PREVIEW).collect();
        out.push_str(&format!("   Sample Affiliation: {preview}...\n"));
    }

    out
}
