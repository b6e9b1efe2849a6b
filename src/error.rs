//! Error types for OHGO API operations.

use thiserror::Error;

/// Errors that can occur during OHGO API operations.
#[derive(Debug, Error)]
pub enum OhgoError {
    /// Configuration is missing or incomplete.
    #[error("OHGO configuration required: {0}")]
    ConfigMissing(String),

    /// HTTP transport error (connection failure, timeout).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Malformed response body: {0}")]
    MalformedBody(#[source] serde_json::Error),

    /// The server returned a status outside the 2xx range.
    #[error("HTTP {code}: {reason}")]
    Status { code: u16, reason: String },

    /// The response envelope or a resource record failed to decode.
    ///
    /// The OHGO envelope always carries `links`, `totalResultCount`,
    /// `results` and `rejectedFilters`; a missing key means the API
    /// contract was violated and is surfaced rather than defaulted.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A single-resource lookup returned zero results.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    /// Image dispatch attempted on a resource kind that does not
    /// support the operation.
    #[error("Cannot {operation} for resource kind '{kind}'")]
    Unsupported {
        operation: &'static str,
        kind: &'static str,
    },

    /// Multi-view image dispatch attempted on a resource with no views.
    #[error("No views found for {kind} '{id}'")]
    EmptyResource { kind: &'static str, id: String },

    /// An image fetch failed, either in transit or with a non-2xx status.
    #[error("Failed to fetch image from {url}")]
    ImageFetch {
        url: String,
        #[source]
        source: Box<OhgoError>,
    },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for OHGO operations.
pub type Result<T> = core::result::Result<T, OhgoError>;
