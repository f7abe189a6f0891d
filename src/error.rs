//! Error types for the Delirius API.

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for all Delirius operations.
///
/// Which variants an operation can actually produce depends on its error
/// policy; see the method docs on [`crate::DeliriusClient`].
#[derive(Debug, Error)]
pub enum DeliriusError {
    /// HTTP request failed at the transport level.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote replied with a non-success status.
    ///
    /// The response body is carried unchanged.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Status code of the failed response.
        status: StatusCode,
        /// Raw response body, unmodified.
        body: String,
    },

    /// A bare text failure message from the remote, wrapped.
    ///
    /// Only produced by operations with the wrapped error policy, and only
    /// when the failure body is plain text rather than JSON.
    #[error("API error: {0}")]
    Api(String),

    /// Response body could not be decoded into the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for Delirius operations.
pub type Result<T> = std::result::Result<T, DeliriusError>;
