//! Fetch pipeline: query sources, concatenate, classify, export.

use std::future::Future;
use std::path::PathBuf;

use crate::classifier::AffiliationClassifier;
use crate::client::{ApiClient, ArxivClient, LiteratureSource, PubMedClient};
use crate::config::{Config, api};
use crate::error::{FetchError, FetchResult};
use crate::export::save_to_csv;
use crate::models::{PaperRecord, Source};

/// Parameters for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Free-text query passed to every source.
    pub query: String,

    /// Maximum results requested from each source.
    pub max_results: usize,

    /// Sources to query; duplicates are ignored.
    pub sources: Vec<Source>,

    /// CSV file to write the retained records to.
    pub output: Option<PathBuf>,
}

impl FetchRequest {
    /// Request against both sources with default limits and no export.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: api::DEFAULT_MAX_RESULTS,
            sources: Source::ALL.to_vec(),
            output: None,
        }
    }

    /// Set the per-source result limit.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Restrict the sources queried.
    #[must_use]
    pub fn with_sources(mut self, sources: impl Into<Vec<Source>>) -> Self {
        self.sources = sources.into();
        self
    }

    /// Export retained records to `path`.
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Check the request before any network call is made.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty query, a zero limit, or no sources.
    pub fn validate(&self) -> FetchResult<()> {
        if self.query.trim().is_empty() {
            return Err(FetchError::validation("query", "cannot be empty"));
        }
        if self.max_results == 0 {
            return Err(FetchError::validation("max_results", "must be at least 1"));
        }
        if self.sources.is_empty() {
            return Err(FetchError::validation("sources", "at least one source is required"));
        }
        Ok(())
    }

    /// Whether `source` was requested.
    #[must_use]
    pub fn includes(&self, source: Source) -> bool {
        self.sources.contains(&source)
    }
}

/// Runs the fetch-classify-export pipeline.
pub struct PaperFetcher {
    sources: Vec<Box<dyn LiteratureSource>>,
    classifier: &'static AffiliationClassifier,
}

impl PaperFetcher {
    /// Create a fetcher querying PubMed, then arXiv.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = ApiClient::new(config)?;

        let sources: Vec<Box<dyn LiteratureSource>> = vec![
            Box::new(PubMedClient::with_http(http.clone(), config)),
            Box::new(ArxivClient::with_http(http, config)),
        ];

        Ok(Self::with_sources(sources))
    }

    /// Create a fetcher over custom sources, queried in the given order.
    #[must_use]
    pub fn with_sources(sources: Vec<Box<dyn LiteratureSource>>) -> Self {
        Self {
            sources,
            classifier: AffiliationClassifier::shared(),
        }
    }

    /// Sources in query order.
    #[must_use]
    pub fn source_order(&self) -> Vec<Source> {
        self.sources.iter().map(|s| s.source()).collect()
    }

    /// Fetch from every requested source without filtering.
    ///
    /// Records keep each source's order; sources follow the fetcher's order.
    pub async fn fetch_all(&self, request: &FetchRequest) -> Vec<PaperRecord> {
        let mut records = Vec::new();

        for source in &self.sources {
            if request.includes(source.source()) {
                records.extend(source.fetch(&request.query, request.max_results).await);
            }
        }

        tracing::info!(count = records.len(), "Total papers fetched");
        records
    }

    /// Fetch, keep pharma/biotech-linked records, and export them if requested.
    ///
    /// Source failures are absorbed by the sources themselves; the returned
    /// records are the filtered set whether or not an export was written.
    ///
    /// # Errors
    ///
    /// Returns error on an invalid request or a failed export.
    pub async fn fetch_and_filter(&self, request: &FetchRequest) -> FetchResult<Vec<PaperRecord>> {
        request.validate()?;

        let records = self.fetch_all(request).await;
        let filtered = self.classifier.filter(records);
        tracing::info!(count = filtered.len(), "Papers with pharma/biotech affiliations");

        if let Some(path) = &request.output {
            save_to_csv(&filtered, path)?;
        }

        Ok(filtered)
    }

    /// Like [`fetch_and_filter`](Self::fetch_and_filter), abandoned when `cancel` completes first.
    ///
    /// In-flight requests are dropped and no export is written.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Cancelled`] on cancellation, otherwise as `fetch_and_filter`.
    pub async fn fetch_and_filter_or_cancel<F>(
        &self,
        request: &FetchRequest,
        cancel: F,
    ) -> FetchResult<Vec<PaperRecord>>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            () = cancel => {
                tracing::warn!("Fetch cancelled");
                Err(FetchError::Cancelled)
            }
            result = self.fetch_and_filter(request) => result,
        }
    }
}

impl std::fmt::Debug for PaperFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaperFetcher").field("sources", &self.source_order()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request = FetchRequest::new("CRISPR");
        assert_eq!(request.max_results, 100);
        assert_eq!(request.sources, vec![Source::PubMed, Source::Arxiv]);
        assert!(request.output.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_validation() {
        assert!(FetchRequest::new("   ").validate().is_err());
        assert!(FetchRequest::new("q").with_max_results(0).validate().is_err());
        assert!(FetchRequest::new("q").with_sources(Vec::<Source>::new()).validate().is_err());
    }

    #[test]
    fn test_default_source_order() {
        let fetcher = PaperFetcher::new(&Config::default()).unwrap();
        assert_eq!(fetcher.source_order(), vec![Source::PubMed, Source::Arxiv]);
    }
}
