//! # HTTP Retrieval Utilities
//!
//! This module provides a small blocking API client wrapper around `reqwest`.
//! It joins relative paths onto a base URL, attaches query parameters, rejects
//! non-2xx responses and decodes the body as JSON.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Longest slice of an error body kept in [`RetrieveError::HttpStatus`].
const MAX_ERROR_BODY: usize = 512;

/// Errors raised while retrieving a JSON document.
#[derive(Debug, Error)]
pub enum RetrieveError {
    /// The request URL could not be built from the base URL and path.
    #[error("Invalid request URL: {0}")]
    Url(#[from] url::ParseError),

    /// DNS, connection or body read failure. The request URL is stripped
    /// from the source error since it carries credentials.
    #[error("Network error")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP request failed with status {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    /// The body is not valid JSON.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A blocking HTTP client bound to a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying `reqwest` blocking client.
    inner: Client,
    /// The base URL to which all relative paths are joined.
    base_url: Url,
}

impl ApiClient {
    /// Creates a new `ApiClient` with client-default timeouts and headers.
    ///
    /// # Arguments
    /// * `base_url` - The absolute base URL (e.g., "https://api.eia.gov/v2/").
    pub fn new(base_url: Url) -> Self {
        Self {
            inner: Client::new(),
            base_url,
        }
    }

    /// The base URL every request path is joined to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the absolute URL for `path` with each `query` pair appended once,
    /// percent-encoded.
    pub fn url_for(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, RetrieveError> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// Performs a GET request and decodes the body as JSON.
    ///
    /// The response body is always read to the end, so the connection is
    /// released before this returns, whatever the outcome.
    ///
    /// # Errors
    /// * [`RetrieveError::Network`] for transport failures or unreadable bodies.
    /// * [`RetrieveError::HttpStatus`] for non-2xx statuses.
    /// * [`RetrieveError::Decode`] when the body is not JSON.
    pub fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, RetrieveError> {
        let url = self.url_for(path, query)?;
        let redacted = redact_query(&url);
        debug!(url = %redacted, "GET");

        let response = self.inner.get(url).send().map_err(network_error)?;
        let status = response.status();
        let text = response.text().map_err(network_error)?;

        if !status.is_success() {
            warn!(url = %redacted, %status, "request rejected");
            return Err(RetrieveError::HttpStatus {
                status,
                body: truncate(&text, MAX_ERROR_BODY),
            });
        }

        debug!(url = %redacted, bytes = text.len(), "response received");
        Ok(serde_json::from_str(&text)?)
    }
}

/// Returns `url` as a string with every query value replaced by `***`.
/// Used so credentials passed as query parameters never reach the logs.
pub fn redact_query(url: &Url) -> String {
    if url.query().is_none() {
        return url.to_string();
    }
    let mut redacted = url.clone();
    let names: Vec<String> = url.query_pairs().map(|(k, _)| k.into_owned()).collect();
    {
        let mut pairs = redacted.query_pairs_mut();
        pairs.clear();
        for name in &names {
            pairs.append_pair(name, "***");
        }
    }
    redacted.to_string()
}

fn network_error(err: reqwest::Error) -> RetrieveError {
    RetrieveError::Network(err.without_url())
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
