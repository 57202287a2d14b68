//! Normalizer tests against recorded upstream documents.

use pharma_paper_fetcher::normalize::{arxiv, normalize_document, pubmed};
use pharma_paper_fetcher::xml::parse_document;
use pharma_paper_fetcher::{AffiliationClassifier, Source};

const ARXIV_FEED: &str = include_str!("fixtures/arxiv_feed.xml");
const PUBMED_EFETCH: &str = include_str!("fixtures/pubmed_efetch.xml");

#[test]
fn test_arxiv_feed_ignores_feed_metadata() {
    let feed = parse_document(ARXIV_FEED).unwrap();
    let records = normalize_document(Source::Arxiv, &feed);

    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["2405.00101v1", "2404.09876v2", "2404.05555v1"]);
}

#[test]
fn test_arxiv_feed_classification() {
    let feed = parse_document(ARXIV_FEED).unwrap();
    let kept = AffiliationClassifier::shared().filter(normalize_document(Source::Arxiv, &feed));

    let titles: Vec<_> = kept.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles.len(), 2);
    assert!(titles[0].starts_with("Deep Learning Guided Design"));
    assert_eq!(titles[1], "Bayesian Adaptive Designs");
}

#[test]
fn test_pubmed_set_keeps_article_with_empty_year() {
    let set = parse_document(PUBMED_EFETCH).unwrap();
    let records = normalize_document(Source::PubMed, &set);
    assert_eq!(records.len(), 4);

    let pfizer = records.iter().find(|r| r.id == "38600003").unwrap();
    assert_eq!(pfizer.publication_date, "");
    assert_eq!(pfizer.affiliations, vec!["Pfizer Inc., New York, NY, USA."]);
}

#[test]
fn test_pubmed_empty_year_record_is_still_classified() {
    let set = parse_document(
        "<PubmedArticleSet><PubmedArticle><MedlineCitation><PMID>7</PMID><Article>\
         <ArticleTitle>Antibody engineering</ArticleTitle>\
         <Journal><JournalIssue><PubDate><Year></Year></PubDate></JournalIssue></Journal>\
         <AuthorList><Author><LastName>Lee</LastName><ForeName>Kim</ForeName>\
         <AffiliationInfo><Affiliation>Genentech Inc.</Affiliation></AffiliationInfo>\
         </Author></AuthorList></Article></MedlineCitation></PubmedArticle></PubmedArticleSet>",
    )
    .unwrap();

    let records = normalize_document(Source::PubMed, &set);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].publication_date, "");

    let kept = AffiliationClassifier::shared().filter(records);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, "7");
}

#[test]
fn test_pubmed_single_article_document() {
    let article = parse_document(
        "<PubmedArticle><MedlineCitation><PMID>1</PMID><Article>\
         <ArticleTitle>Solo</ArticleTitle></Article></MedlineCitation></PubmedArticle>",
    )
    .unwrap();

    let records = normalize_document(Source::PubMed, &article);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Solo");
    assert_eq!(records[0].url, pubmed::pubmed_record_url("1"));
}

#[test]
fn test_pubmed_collective_author_is_skipped() {
    let set = parse_document(PUBMED_EFETCH).unwrap();
    let records = normalize_document(Source::PubMed, &set);

    let novartis = records.iter().find(|r| r.id == "38600004").unwrap();
    assert_eq!(novartis.authors, vec!["Anna Müller"]);
    assert_eq!(
        novartis.affiliations,
        vec!["Novartis Institutes for BioMedical Research, Basel, Switzerland."]
    );
}

#[test]
fn test_arxiv_id_from_url() {
    assert_eq!(arxiv::arxiv_id_from_url("http://arxiv.org/abs/2405.00101v1"), "2405.00101v1");
    assert_eq!(arxiv::arxiv_id_from_url("http://arxiv.org/abs/hep-th/9901001v1"), "9901001v1");
    assert_eq!(arxiv::arxiv_id_from_url(""), "");
}
