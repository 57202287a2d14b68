//! Console output formatting.

mod summary;

pub use summary::{SAMPLE_LIMIT, format_run_header, format_summary};
