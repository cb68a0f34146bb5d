//! HTTP client for the EONET API.

pub mod categories;
pub mod events;
pub mod query;

#[cfg(test)]
pub(crate) mod test_server;

use serde_json::{Map, Value};
use url::Url;

use crate::config::Config;
use crate::error::{ClientError, Result};

pub use query::Query;

/// HTTP client for the EONET API.
#[derive(Debug, Clone)]
pub struct EonetClient {
    client: reqwest::Client,
    base_url: String,
}

impl EonetClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Replace the default `reqwest::Client` with a custom one (e.g. to
    /// configure timeouts or a proxy).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the absolute URL for a query.
    pub fn url(&self, query: &Query) -> Result<Url> {
        let endpoint = query.endpoint.trim_start_matches('/');
        if endpoint.is_empty() {
            return Err(ClientError::InvalidUrl {
                endpoint: query.endpoint.clone(),
            });
        }

        let pairs = query.query_pairs()?;

        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint);
        let mut url = Url::parse(&raw).map_err(|_| ClientError::InvalidUrl {
            endpoint: query.endpoint.clone(),
        })?;

        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }

        Ok(url)
    }

    /// Issue a GET for the query and return the top-level JSON object.
    ///
    /// No retries: a failure here is terminal for this one request.
    pub async fn request(&self, query: &Query) -> Result<Map<String, Value>> {
        let url = self.url(query)?;
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::ServerError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(object)) => Ok(object),
            _ => Err(ClientError::InvalidJson {
                origin: url.to_string(),
            }),
        }
    }
}

/// Pull the array stored under `key` out of a response object.
///
/// A missing or non-array value means the whole batch is malformed, which is
/// reported against `endpoint`.
pub(crate) fn take_batch(
    mut response: Map<String, Value>,
    key: &str,
    endpoint: &str,
) -> Result<Vec<Value>> {
    match response.remove(key) {
        Some(Value::Array(items)) => Ok(items),
        _ => Err(ClientError::InvalidJson {
            origin: endpoint.to_string(),
        }),
    }
}
