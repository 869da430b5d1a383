//! # EIA API Client
//!
//! A dedicated client for the facet endpoints of the EIA open-data API v2.
//! It wraps the generic blocking `ApiClient`, injects the `api_key` query
//! parameter and peels the `response.facets` value out of the reply.
//!
//! One call, one request: no retries, no paging, no caching.

use std::fmt;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use crate::configs::config_eia::{ConfigError, EiaConfig};
use crate::retrieve::ky_http::{ApiClient, RetrieveError};

/// Query parameter the EIA API reads the credential from.
pub const API_KEY_PARAM: &str = "api_key";

/// Errors surfaced by the EIA client and the facet helpers.
#[derive(Debug, Error)]
pub enum EiaError {
    /// The API key or base URL could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport failure, non-2xx status or undecodable body.
    #[error(transparent)]
    Retrieve(#[from] RetrieveError),

    /// The JSON document lacks an expected key. Carries the dotted path.
    #[error("Missing field in EIA response: {0}")]
    MissingField(String),

    /// The facets value does not have the expected `{id, name}` shape.
    #[error("Unexpected facet shape: {0}")]
    UnexpectedShape(String),

    /// A data reply holds no usable value for the named series.
    #[error("No value for series {0} in EIA response")]
    MissingSeries(String),

    /// The facets value could not be serialized back to text.
    #[error("Failed to render facets: {0}")]
    Render(String),

    /// Writing the rendered output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// # EIA API Call Client
///
/// Holds the shared HTTP client and the API key for one process run.
#[derive(Clone)]
pub struct EiaClient {
    /// The underlying HTTP client, pre-configured with the EIA base URL.
    client: ApiClient,
    /// The credential appended to every request.
    api_key: String,
}

impl fmt::Debug for EiaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EiaClient")
            .field("base_url", &self.client.base_url().as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl EiaClient {
    /// Builds a client from a resolved configuration.
    pub fn new(config: &EiaConfig) -> Self {
        Self {
            client: ApiClient::new(config.base_url.clone()),
            api_key: config.api_key.clone(),
        }
    }

    /// The absolute facet URL for `route` and `facet_id`, key included.
    pub fn facet_url(&self, route: &str, facet_id: &str) -> Result<Url, EiaError> {
        let path = facet_path(route, facet_id);
        Ok(self
            .client
            .url_for(&path, &[(API_KEY_PARAM, self.api_key.as_str())])?)
    }

    /// Fetches the full JSON document of a facet endpoint.
    pub fn fetch_facet_document(&self, route: &str, facet_id: &str) -> Result<Value, EiaError> {
        let path = facet_path(route, facet_id);
        info!(route, facet_id, "fetching EIA facets");
        let document = self
            .client
            .get_json(&path, &[(API_KEY_PARAM, self.api_key.as_str())])?;
        let total_facets = document
            .pointer("/response/totalFacets")
            .and_then(serde_json::Value::as_u64);
        debug!(?total_facets, "facet document decoded");
        Ok(document)
    }

    /// Fetches a facet endpoint and returns only its `response.facets` value.
    pub fn fetch_facets(&self, route: &str, facet_id: &str) -> Result<Value, EiaError> {
        let document = self.fetch_facet_document(route, facet_id)?;
        extract_facets(&document).cloned()
    }

    /// Fetches `<route>/data` with `params` appended after the key and returns
    /// its `response.data` value.
    pub fn fetch_data(&self, route: &str, params: &[(&str, &str)]) -> Result<Value, EiaError> {
        let path = data_path(route);
        let mut query = Vec::with_capacity(params.len() + 1);
        query.push((API_KEY_PARAM, self.api_key.as_str()));
        query.extend_from_slice(params);

        info!(route, "fetching EIA data");
        let document = self.client.get_json(&path, &query)?;
        extract_response_field(&document, "data").cloned()
    }
}

/// Relative path of a facet endpoint: `<route>/facet/<facet_id>`.
///
/// Leading and trailing slashes are stripped so the path always joins
/// beneath the base URL instead of replacing it.
pub fn facet_path(route: &str, facet_id: &str) -> String {
    format!(
        "{}/facet/{}",
        route.trim_matches('/'),
        facet_id.trim_matches('/')
    )
}

/// Relative path of a data endpoint: `<route>/data`.
pub fn data_path(route: &str) -> String {
    format!("{}/data", route.trim_matches('/'))
}

/// Borrows `response.<field>` from an EIA document.
pub fn extract_response_field<'a>(document: &'a Value, field: &str) -> Result<&'a Value, EiaError> {
    document
        .get("response")
        .ok_or_else(|| EiaError::MissingField("response".to_string()))?
        .get(field)
        .ok_or_else(|| EiaError::MissingField(format!("response.{}", field)))
}

/// Borrows `response.facets` from a facet document.
pub fn extract_facets(document: &Value) -> Result<&Value, EiaError> {
    extract_response_field(document, "facets")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::serve_once;
    use serde_json::json;

    fn client_for(key: &str, base: &str) -> EiaClient {
        let config = EiaConfig::resolve(Some(key.into()), Some(base.into()), |_| None).unwrap();
        EiaClient::new(&config)
    }

    #[test]
    fn test_facet_path_strips_slashes() {
        assert_eq!(facet_path("petroleum/pri/spt", "series"), "petroleum/pri/spt/facet/series");
        assert_eq!(facet_path("/international/", "activityId/"), "international/facet/activityId");
    }

    #[test]
    fn test_facet_url_matches_production_layout() {
        let client = client_for("KEY", "https://api.eia.gov/v2/");
        let url = client.facet_url("petroleum/pri/spt", "series").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.eia.gov/v2/petroleum/pri/spt/facet/series?api_key=KEY"
        );
    }

    #[test]
    fn test_facet_url_contains_key_once_encoded() {
        let client = client_for("k+y/&=?#", "https://api.eia.gov/v2");
        let url = client.facet_url("petroleum/pri/spt", "series").unwrap();

        let keys: Vec<String> = url
            .query_pairs()
            .filter(|(name, _)| name == API_KEY_PARAM)
            .map(|(_, value)| value.into_owned())
            .collect();
        assert_eq!(keys, vec!["k+y/&=?#".to_string()]);

        let query = url.query().unwrap();
        assert_eq!(query.matches("api_key=").count(), 1);
        assert!(!query.contains('&'));
        assert!(!query.contains('#'));
    }

    #[test]
    fn test_extract_facets() {
        let doc = json!({"response": {"totalFacets": 1, "facets": [{"id": "RWTC", "name": "WTI"}]}});
        assert_eq!(extract_facets(&doc).unwrap(), &json!([{"id": "RWTC", "name": "WTI"}]));
    }

    #[test]
    fn test_extract_facets_missing_response() {
        let err = extract_facets(&json!({"error": "bad"})).unwrap_err();
        assert!(matches!(err, EiaError::MissingField(ref p) if p == "response"));
    }

    #[test]
    fn test_extract_facets_missing_facets() {
        let err = extract_facets(&json!({"response": {"totalFacets": 0}})).unwrap_err();
        assert!(matches!(err, EiaError::MissingField(ref p) if p == "response.facets"));
    }

    #[test]
    fn test_extract_response_field_names_path() {
        let err = extract_response_field(&json!({"response": {}}), "data").unwrap_err();
        assert!(matches!(err, EiaError::MissingField(ref p) if p == "response.data"));
    }

    #[test]
    fn test_data_path() {
        assert_eq!(data_path("/petroleum/pri/spt/"), "petroleum/pri/spt/data");
    }

    #[test]
    fn test_fetch_data_puts_key_first_and_reads_data() {
        let (base, handle) = serve_once("200 OK", r#"{"response": {"data": [{"series": "RWTC"}]}}"#);
        let client = client_for("KEY", base.as_str());

        let data = client.fetch_data("petroleum/pri/spt", &[("frequency", "daily")]).unwrap();
        let request = handle.join().unwrap();

        assert_eq!(data, json!([{"series": "RWTC"}]));
        assert!(request.starts_with("GET /v2/petroleum/pri/spt/data?api_key=KEY&frequency=daily HTTP/1.1"));
    }
}
