//! REST-specific error type wrapping transport and protocol failures.

use pricelist_domain::error::CatalogError;

/// Errors originating from the REST source adapter.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// The HTTP request could not be sent or the body could not be read.
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("remote source returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The exact-count response carried no parseable `Content-Range`.
    #[error("malformed count response: {0}")]
    Count(String),
}

impl From<RestError> for CatalogError {
    fn from(err: RestError) -> Self {
        Self::Source(Box::new(err))
    }
}
