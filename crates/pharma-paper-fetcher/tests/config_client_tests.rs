//! Configuration and client construction tests.
//!
//! Tests actual behavior, not constants.

use std::time::Duration;

use pharma_paper_fetcher::client::{ApiClient, ArxivClient, PubMedClient};
use pharma_paper_fetcher::config::{BatchPolicy, Config, api};
use pharma_paper_fetcher::{PaperFetcher, Source};

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_points_at_public_apis() {
    let config = Config::default();
    assert!(config.arxiv_api_url.starts_with("http://export.arxiv.org"));
    assert!(config.esearch_url.ends_with("esearch.fcgi"));
    assert!(config.efetch_url.ends_with("efetch.fcgi"));
    assert_eq!(config.request_timeout, Duration::from_secs(30));
}

#[test]
fn test_config_for_testing_uses_base_url() {
    let config = Config::for_testing("http://localhost:1234");
    assert_eq!(config.arxiv_api_url, "http://localhost:1234/api/query");
    assert_eq!(config.efetch_url, "http://localhost:1234/entrez/eutils/efetch.fcgi");
    assert_eq!(config.batch.size, api::PUBMED_BATCH_SIZE);
    assert!(config.batch.delay.is_zero());
}

#[test]
fn test_with_batch_policy_replaces_policy() {
    let config = Config::default().with_batch_policy(BatchPolicy::new(5, Duration::from_secs(1)));
    assert_eq!(config.batch, BatchPolicy::new(5, Duration::from_secs(1)));
}

#[test]
fn test_batch_policy_default() {
    let policy = BatchPolicy::default();
    assert_eq!(policy.size, 20);
    assert_eq!(policy.delay, Duration::from_millis(500));
}

#[test]
fn test_config_clone_is_independent() {
    let config = Config::default();
    let mut cloned = config.clone();
    cloned.arxiv_api_url = "http://elsewhere".to_string();
    assert_ne!(config.arxiv_api_url, cloned.arxiv_api_url);
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_creation_succeeds() {
    let config = Config::default();
    assert!(ApiClient::new(&config).is_ok());
    assert!(ArxivClient::new(&config).is_ok());
    assert!(PubMedClient::new(&config).is_ok());
}

#[test]
fn test_pubmed_client_takes_batch_policy_from_config() {
    let config = Config::default().with_batch_policy(BatchPolicy::new(0, Duration::ZERO));
    let client = PubMedClient::new(&config).unwrap();
    assert_eq!(client.batch_policy().size, 1);
}

#[test]
fn test_fetcher_debug_lists_sources() {
    let fetcher = PaperFetcher::new(&Config::default()).unwrap();
    assert_eq!(fetcher.source_order(), Source::ALL.to_vec());

    let debug = format!("{fetcher:?}");
    assert!(debug.contains("PubMed"));
    assert!(debug.contains("Arxiv"));
}
