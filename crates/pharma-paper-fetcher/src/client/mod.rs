//! HTTP clients for the two literature sources.
//!
//! Provides:
//! - [`ApiClient`]: shared reqwest client with uniform status handling
//! - [`ArxivClient`]: single-request Atom search
//! - [`PubMedClient`]: two-phase esearch + batched efetch
//!
//! Requests are never retried. Each source's [`LiteratureSource::fetch`] absorbs
//! request-level failures so one failing source does not abort the pipeline.

mod arxiv;
mod pubmed;

pub use arxiv::ArxivClient;
pub use pubmed::PubMedClient;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::{PaperRecord, Source};

/// Query parameters for a GET request.
pub type QueryParams = [(&'static str, String)];

/// A literature source the pipeline can query.
#[async_trait::async_trait]
pub trait LiteratureSource: Send + Sync {
    /// Which source this is.
    fn source(&self) -> Source;

    /// Fetch up to `max_results` normalized records for `query`.
    ///
    /// Never fails: request-level errors are logged and yield whatever was collected.
    async fn fetch(&self, query: &str, max_results: usize) -> Vec<PaperRecord>;
}

/// Shared HTTP client.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// Create a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self { client })
    }

    /// GET a URL and return the body as text.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure or a non-success status.
    pub async fn get_text(&self, url: &str, params: &QueryParams) -> ClientResult<String> {
        tracing::debug!(url, "GET");

        let response = self.client.get(url).query(params).send().await?;
        let response = self.handle_response(response).await?;

        Ok(response.text().await?)
    }

    /// GET a URL and decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, a non-success status, or invalid JSON.
    pub async fn get_json<T>(&self, url: &str, params: &QueryParams) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let body = self.get_text(url, params).await?;
        serde_json::from_str(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            429 => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60);

                Err(ClientError::rate_limited(retry_after))
            }
            404 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::not_found(text))
            }
            400 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::bad_request(text))
            }
            500..=599 => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::server(status.as_u16(), text))
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                Err(ClientError::UnexpectedStatus {
                    status: status.as_u16(),
                    message: text,
                })
            }
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}
