//! CSV export tests against real files.

use chrono::{TimeZone, Utc};

use pharma_paper_fetcher::export::{COLUMNS, default_output_filename, save_to_csv, write_records};
use pharma_paper_fetcher::{PaperRecord, Source};

fn pubmed_record() -> PaperRecord {
    let mut record = PaperRecord::new(Source::PubMed, "Base editing, in vivo");
    record.authors = vec!["Jane Doe".into(), "John Smith".into()];
    record.r#abstract = "Line one\nline \"two\"".into();
    record.publication_date = "2024-Apr-12".into();
    record.url = "https://pubmed.ncbi.nlm.nih.gov/38600001/".into();
    record.id = "38600001".into();
    record.journal = "Nature biotechnology".into();
    record.doi = "10.1038/s41587-024-00001-1".into();
    record.affiliations = vec!["Verve Therapeutics, Boston".into(), "Harvard".into()];
    record
}

fn arxiv_record() -> PaperRecord {
    let mut record = PaperRecord::new(Source::Arxiv, "Größenordnung of 薬物 discovery");
    record.authors = vec!["Zoë Ångström".into()];
    record.id = "2405.00101v1".into();
    record.categories = vec!["q-bio.GN".into(), "cs.LG".into()];
    record
}

fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), COLUMNS);
    reader.records().map(Result::unwrap).collect()
}

#[test]
fn test_save_writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    save_to_csv(&[pubmed_record(), arxiv_record()], &path).unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 2);

    let pubmed = &rows[0];
    assert_eq!(&pubmed[0], "PubMed");
    assert_eq!(&pubmed[1], "Base editing, in vivo");
    assert_eq!(&pubmed[2], "Jane Doe; John Smith");
    assert_eq!(&pubmed[3], "Line one\nline \"two\"");
    assert_eq!(&pubmed[7], "Nature biotechnology");
    assert_eq!(&pubmed[9], "Verve Therapeutics, Boston; Harvard");
    assert_eq!(&pubmed[10], "");
}

#[test]
fn test_arxiv_row_has_empty_pubmed_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    save_to_csv(&[arxiv_record()], &path).unwrap();

    let rows = read_rows(&path);
    let arxiv = &rows[0];
    assert_eq!(&arxiv[0], "arXiv");
    assert_eq!(&arxiv[1], "Größenordnung of 薬物 discovery");
    assert_eq!(&arxiv[2], "Zoë Ångström");
    assert_eq!(&arxiv[7], "");
    assert_eq!(&arxiv[8], "");
    assert_eq!(&arxiv[9], "");
    assert_eq!(&arxiv[10], "q-bio.GN; cs.LG");
}

#[test]
fn test_file_is_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    save_to_csv(&[arxiv_record()], &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.contains("薬物"));
}

#[test]
fn test_empty_export_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    save_to_csv(&[], &path).unwrap();

    assert!(!path.exists());
}

#[test]
fn test_existing_file_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let stale = "stale contents that are much longer than a header line\n".repeat(50);
    std::fs::write(&path, stale).unwrap();

    save_to_csv(&[arxiv_record()], &path).unwrap();

    assert_eq!(read_rows(&path).len(), 1);
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.csv");

    let err = save_to_csv(&[arxiv_record()], &path).unwrap_err();
    assert!(matches!(err, pharma_paper_fetcher::FetchError::Io(_)));
}

#[test]
fn test_write_records_to_memory() {
    let mut buffer = Vec::new();
    write_records(&mut buffer, &[pubmed_record()]).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.starts_with(&COLUMNS.join(",")));
    assert!(text.contains("\"Base editing, in vivo\""));
}

#[test]
fn test_default_filename_shape() {
    let ts = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 58).unwrap();

    assert_eq!(
        default_output_filename("machine learning: drug discovery?", &ts),
        "research_papers_machine_learning_drug_discovery_20251231_235958.csv"
    );
    assert_eq!(
        default_output_filename("COVID-19 vaccine", &ts),
        "research_papers_COVID_19_vaccine_20251231_235958.csv"
    );
}
