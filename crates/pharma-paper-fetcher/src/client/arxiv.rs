//! arXiv query API client.

use super::{ApiClient, LiteratureSource};
use crate::config::Config;
use crate::error::ClientResult;
use crate::models::{PaperRecord, Source};
use crate::normalize::normalize_document;
use crate::xml::parse_document;

/// Client for the arXiv Atom query endpoint.
#[derive(Debug, Clone)]
pub struct ArxivClient {
    http: ApiClient,
    url: String,
}

impl ArxivClient {
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
            url: config.arxiv_api_url.clone(),
        }
    }

    /// Search arXiv, most recently updated first.
    ///
    /// # Errors
    ///
    /// Returns error on API failure or an unparseable feed.
    pub async fn search(&self, query: &str, max_results: usize) -> ClientResult<Vec<PaperRecord>> {
        let params = [
            ("search_query", query.to_string()),
            ("start", "0".to_string()),
            ("max_results", max_results.to_string()),
            ("sortBy", "lastUpdatedDate".to_string()),
            ("sortOrder", "descending".to_string()),
        ];

        let body = self.http.get_text(&self.url, &params).await?;
        let feed = parse_document(&body)?;

        Ok(normalize_document(Source::Arxiv, &feed))
    }
}

#[async_trait::async_trait]
impl LiteratureSource for ArxivClient {
    fn source(&self) -> Source {
        Source::Arxiv
    }

    async fn fetch(&self, query: &str, max_results: usize) -> Vec<PaperRecord> {
        tracing::info!(query, max_results, "Fetching papers from arXiv");

        match self.search(query, max_results).await {
            Ok(records) => {
                tracing::info!(count = records.len(), "Fetched papers from arXiv");
                records
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching from arXiv");
                Vec::new()
            }
        }
    }
}
