//! Fuzzing library for pharma-paper-fetcher.
//!
//! Targets exercise the untrusted-input surfaces: both XML normalizers and
//! the affiliation classifier.
//!
//! # Usage
//!
//! ```bash
//! cd crates/sentinel-fuzz
//! cargo +nightly fuzz run fuzz_arxiv_feed -- -max_total_time=60
//! ```

pub use pharma_paper_fetcher::{classifier, normalize, xml};
