//! PubMed E-utilities client.
//!
//! Two phases: `esearch` resolves matching PMIDs, then `efetch` retrieves
//! article XML in batches with a pause between consecutive batches.

use serde::Deserialize;

use super::{ApiClient, LiteratureSource};
use crate::config::{BatchPolicy, Config};
use crate::error::ClientResult;
use crate::models::{PaperRecord, Source};
use crate::normalize::normalize_document;
use crate::xml::parse_document;

#[derive(Debug, Deserialize)]
struct EsearchResponse {
    #[serde(default)]
    esearchresult: Option<EsearchResult>,
}

#[derive(Debug, Deserialize)]
struct EsearchResult {
    #[serde(default)]
    idlist: Option<Vec<String>>,
}

/// Client for the NCBI E-utilities PubMed endpoints.
#[derive(Debug, Clone)]
pub struct PubMedClient {
    http: ApiClient,
    esearch_url: String,
    efetch_url: String,
    batch: BatchPolicy,
}

impl PubMedClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::with_http(ApiClient::new(config)?, config))
    }

    /// Create a client sharing an existing HTTP client.
    #[must_use]
    pub fn with_http(http: ApiClient, config: &Config) -> Self {
        Self {
            http,
            esearch_url: config.esearch_url.clone(),
            efetch_url: config.efetch_url.clone(),
            batch: config.batch,
        }
    }

    /// Batching policy in effect.
    #[must_use]
    pub const fn batch_policy(&self) -> BatchPolicy {
        self.batch
    }

    /// Resolve up to `max_results` PMIDs, most recent first.
    ///
    /// A response without an ID list is treated as "no results".
    ///
    /// # Errors
    ///
    /// Returns error on API failure or invalid JSON.
    pub async fn search_ids(&self, query: &str, max_results: usize) -> ClientResult<Vec<String>> {
        let params = [
            ("db", "pubmed".to_string()),
            ("term", query.to_string()),
            ("retmax", max_results.to_string()),
            ("retmode", "json".to_string()),
            ("sort", "most recent".to_string()),
        ];

        let response: EsearchResponse = self.http.get_json(&self.esearch_url, &params).await?;

        match response.esearchresult.and_then(|result| result.idlist) {
            Some(ids) => {
                tracing::debug!(count = ids.len(), "PubMed esearch returned PMIDs");
                Ok(ids)
            }
            None => {
                tracing::warn!("No PubMed search results found");
                Ok(Vec::new())
            }
        }
    }

    /// Fetch and normalize article details for one batch of PMIDs.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or unparseable XML.
    pub async fn fetch_details(&self, pmids: &[String]) -> ClientResult<Vec<PaperRecord>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let params = [
            ("db", "pubmed".to_string()),
            ("id", pmids.join(",")),
            ("retmode", "xml".to_string()),
        ];

        let body = self.http.get_text(&self.efetch_url, &params).await?;
        let document = parse_document(&body)?;

        Ok(normalize_document(Source::PubMed, &document))
    }

    /// Search, then fetch details batch by batch.
    ///
    /// A failed batch is logged and skipped; later batches still run.
    ///
    /// # Errors
    ///
    /// Returns error only if the search phase fails.
    pub async fn search(&self, query: &str, max_results: usize) -> ClientResult<Vec<PaperRecord>> {
        let pmids = self.search_ids(query, max_results).await?;

        if pmids.is_empty() {
            tracing::warn!("No PubMed paper IDs found");
            return Ok(Vec::new());
        }

        let mut records = Vec::with_capacity(pmids.len());
        for (index, batch) in pmids.chunks(self.batch.size).enumerate() {
            if index > 0 && !self.batch.delay.is_zero() {
                tokio::time::sleep(self.batch.delay).await;
            }

            match self.fetch_details(batch).await {
                Ok(batch_records) => records.extend(batch_records),
                Err(e) => {
                    tracing::error!(
                        batch = index + 1,
                        size = batch.len(),
                        error = %e,
                        "Error fetching PubMed details"
                    );
                }
            }
        }

        Ok(records)
    }
}

#[async_trait::async_trait]
impl LiteratureSource for PubMedClient {
    fn source(&self) -> Source {
        Source::PubMed
    }

    async fn fetch(&self, query: &str, max_results: usize) -> Vec<PaperRecord> {
        tracing::info!(query, max_results, "Fetching papers from PubMed");

        match self.search(query, max_results).await {
            Ok(records) => {
                tracing::info!(count = records.len(), "Fetched papers from PubMed");
                records
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching from PubMed");
                Vec::new()
            }
        }
    }
}
