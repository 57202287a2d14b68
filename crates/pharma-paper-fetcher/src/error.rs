//! Error types for the paper fetcher.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! Errors are layered the same way failures are handled:
//!
//! - [`EntryError`]: one upstream entry is malformed; the entry is skipped.
//! - [`XmlError`] / [`ClientError`]: a whole request failed; its contribution is empty.
//! - [`FetchError`]: the pipeline itself failed (validation, export, cancellation).

use std::time::Duration;

/// Errors from building an XML element tree.
#[derive(thiserror::Error, Debug)]
pub enum XmlError {
    /// Tokenizer or escaping error reported by `quick-xml`.
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// A closing tag did not match the open element.
    #[error("Mismatched closing tag </{found}>, expected </{expected}>")]
    MismatchedTag {
        /// Name of the element that was open
        expected: String,
        /// Name of the closing tag that was read
        found: String,
    },

    /// The document ended while elements were still open.
    #[error("Unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    /// The document contained no root element.
    #[error("Document has no root element")]
    NoRoot,
}

/// Errors from normalizing a single upstream entry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    /// An element the record depends on is present but has no text.
    #[error("Element <{0}> is present but empty")]
    EmptyElement(String),

    /// The entry element is not the kind this normalizer handles.
    #[error("Expected <{expected}> entry, found <{found}>")]
    WrongElement {
        /// Expected element name
        expected: &'static str,
        /// Actual element name
        found: String,
    },
}

impl EntryError {
    /// Create an empty element error.
    #[must_use]
    pub fn empty(element: impl Into<String>) -> Self {
        Self::EmptyElement(element.into())
    }
}

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Rate limited by the upstream API (429 response)
    #[error("Rate limited, retry after {retry_after:?}")]
    RateLimited {
        /// Suggested wait time before retry
        retry_after: Duration,
    },

    /// Resource not found (404 response)
    #[error("Resource not found: {resource}")]
    NotFound {
        /// Description of the missing resource
        resource: String,
    },

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// JSON parsing error
    #[error("Failed to parse JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// XML parsing error
    #[error("Failed to parse XML response: {0}")]
    Xml(#[from] XmlError),

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },
}

impl ClientError {
    /// Create a rate limited error with retry-after duration.
    #[must_use]
    pub fn rate_limited(seconds: u64) -> Self {
        Self::RateLimited {
            retry_after: Duration::from_secs(seconds),
        }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Get the retry-after duration if this is a rate limit error.
    #[must_use]
    pub const fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after } => Some(*retry_after),
            _ => None,
        }
    }

    /// Returns true if the response body could not be understood.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Xml(_))
    }
}

/// Errors from a pipeline invocation.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    /// Error from an API client that was not absorbed by a source
    #[error("API error: {0}")]
    Client(#[from] ClientError),

    /// Input validation failed
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Writing the CSV export failed
    #[error("Export error: {0}")]
    Export(#[from] csv::Error),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user interrupted the run
    #[error("Operation cancelled by user")]
    Cancelled,
}

impl FetchError {
    /// Create a validation error.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this outcome is a user cancellation rather than a failure.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Convert to a user-friendly message for the console.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Client(ClientError::RateLimited { retry_after }) => {
                format!("Rate limited by the upstream API. Wait {retry_after:?} before retrying.")
            }
            Self::Validation { field, message } => {
                format!("Invalid input for '{field}': {message}")
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for entry normalization.
pub type EntryResult<T> = Result<T, EntryError>;

/// Result type alias for pipeline operations.
pub type FetchResult<T> = Result<T, FetchError>;
