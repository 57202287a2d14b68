//! Configuration for the paper fetcher.

use std::time::Duration;

use anyhow::Context;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv Atom query endpoint.
    pub const ARXIV_API: &str = "http://export.arxiv.org/api/query";

    /// NCBI E-utilities search endpoint.
    pub const PUBMED_ESEARCH: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi";

    /// NCBI E-utilities fetch endpoint.
    pub const PUBMED_EFETCH: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/efetch.fcgi";

    /// Public record page for a PubMed ID.
    pub const PUBMED_RECORD_URL: &str = "https://pubmed.ncbi.nlm.nih.gov";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// PubMed IDs per efetch request.
    pub const PUBMED_BATCH_SIZE: usize = 20;

    /// Pause between consecutive efetch requests.
    pub const PUBMED_BATCH_DELAY: Duration = Duration::from_millis(500);

    /// Default number of results requested from each source.
    pub const DEFAULT_MAX_RESULTS: usize = 100;
}

/// Batching policy for the two-phase PubMed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPolicy {
    /// Maximum number of IDs per detail request.
    pub size: usize,

    /// Pause between consecutive detail requests.
    pub delay: Duration,
}

impl BatchPolicy {
    /// Create a policy; a size of zero is raised to one.
    #[must_use]
    pub fn new(size: usize, delay: Duration) -> Self {
        Self {
            size: size.max(1),
            delay,
        }
    }
}

impl Default for BatchPolicy {
    fn default() -> Self {
        Self::new(api::PUBMED_BATCH_SIZE, api::PUBMED_BATCH_DELAY)
    }
}

/// Fetcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// arXiv query URL (overridable for mock servers).
    pub arxiv_api_url: String,

    /// PubMed esearch URL.
    pub esearch_url: String,

    /// PubMed efetch URL.
    pub efetch_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,

    /// PubMed detail batching.
    pub batch: BatchPolicy,
}

impl Config {
    /// Create the default configuration pointing at the public APIs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            arxiv_api_url: api::ARXIV_API.to_string(),
            esearch_url: api::PUBMED_ESEARCH.to_string(),
            efetch_url: api::PUBMED_EFETCH.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
            batch: BatchPolicy::default(),
        }
    }

    /// Create a test configuration with custom URLs for mock servers.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            arxiv_api_url: format!("{base_url}/api/query"),
            esearch_url: format!("{base_url}/entrez/eutils/esearch.fcgi"),
            efetch_url: format!("{base_url}/entrez/eutils/efetch.fcgi"),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            batch: BatchPolicy::new(api::PUBMED_BATCH_SIZE, Duration::ZERO), // No delay in tests
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Recognised overrides: `PAPER_FETCH_BATCH_SIZE`, `PAPER_FETCH_BATCH_DELAY_MS`,
    /// `PAPER_FETCH_TIMEOUT_SECS`. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but not a valid number.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::new();

        if let Some(size) = env_number("PAPER_FETCH_BATCH_SIZE")? {
            let size = usize::try_from(size).context("PAPER_FETCH_BATCH_SIZE is too large")?;
            config.batch = BatchPolicy::new(size, config.batch.delay);
        }
        if let Some(ms) = env_number("PAPER_FETCH_BATCH_DELAY_MS")? {
            config.batch = BatchPolicy::new(config.batch.size, Duration::from_millis(ms));
        }
        if let Some(secs) = env_number("PAPER_FETCH_TIMEOUT_SECS")? {
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the batching policy.
    #[must_use]
    pub fn with_batch_policy(mut self, batch: BatchPolicy) -> Self {
        self.batch = batch;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn env_number(name: &str) -> anyhow::Result<Option<u64>> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a non-negative integer, got {value:?}")),
        Err(_) => Ok(None),
    }
}
