//! Pharma Paper Fetcher
//!
//! Retrieves paper metadata from arXiv and PubMed, keeps the papers linked to
//! pharmaceutical or biotech organizations, and exports them as CSV.
//!
//! # Features
//!
//! - **Two sources**: arXiv Atom search and PubMed esearch + batched efetch
//! - **Uniform records**: both formats normalize into [`PaperRecord`]
//! - **Affiliation heuristic**: vocabulary plus gated corporate-name patterns
//! - **Fault tolerant**: malformed entries and failed requests are logged and skipped
//!
//! # Example
//!
//! ```no_run
//! use pharma_paper_fetcher::{Config, FetchRequest, PaperFetcher};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let fetcher = PaperFetcher::new(&Config::from_env()?)?;
//!     let request = FetchRequest::new("CRISPR gene editing").with_max_results(20);
//!
//!     let papers = fetcher.fetch_and_filter(&request).await?;
//!     println!("{} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod formatters;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod xml;

pub use classifier::AffiliationClassifier;
pub use config::Config;
pub use error::{ClientError, FetchError};
pub use models::{PaperRecord, Source};
pub use pipeline::{FetchRequest, PaperFetcher};
