//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
///
/// None of these reach consumers of the aggregate operations
/// ([`fetch_events`](crate::EonetClient::fetch_events) and
/// [`CategoryCache`](crate::cache::CategoryCache)); they are logged and
/// replaced with empty results there.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid URL for endpoint: {endpoint}")]
    InvalidUrl { endpoint: String },

    #[error("Invalid query parameter {key}: {value}")]
    InvalidParameter { key: String, value: String },

    #[error("Invalid JSON from {origin}")]
    InvalidJson { origin: String },

    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server returned {status} for {url}")]
    ServerError { status: u16, url: String },
}
