//! # EIA Facet Rendering and Data Model
//!
//! Turns the `response.facets` value of a facet endpoint into console output,
//! and offers a typed view of the `{id, name, alias}` entries for callers
//! that want to search them.

use std::io::Write;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::apicalleia::{EiaClient, EiaError};

/// One selectable value of a facet, e.g. a series identifier or a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    /// Identifier used in data queries. Numeric ids are kept as text.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Optional alternate label some routes provide.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Accepts either a JSON string or a JSON number for the facet id.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "facet id must be a string or number, got {}",
            other
        ))),
    }
}

impl Facet {
    /// `id:name` label, as listed by the diagnostics tools.
    pub fn label(&self) -> String {
        format!("{}:{}", self.id, self.name)
    }
}

/// Renders a facets value as JSON indented by two spaces.
pub fn render_facets(facets: &Value) -> Result<String, EiaError> {
    serde_json::to_string_pretty(facets).map_err(|e| EiaError::Render(e.to_string()))
}

/// Fetches `route`/`facet_id` and writes the pretty-printed facets to `out`.
///
/// The text is fully rendered before anything is written, so a failure at
/// any step leaves `out` untouched.
pub fn print_facets<W: Write>(
    client: &EiaClient,
    route: &str,
    facet_id: &str,
    out: &mut W,
) -> Result<(), EiaError> {
    let facets = client.fetch_facets(route, facet_id)?;
    let rendered = render_facets(&facets)?;
    writeln!(out, "{}", rendered)?;
    out.flush()?;
    Ok(())
}

/// Parses a facets value into typed entries.
pub fn parse_facets(facets: &Value) -> Result<Vec<Facet>, EiaError> {
    Vec::<Facet>::deserialize(facets).map_err(|e| EiaError::UnexpectedShape(e.to_string()))
}

/// `id:name` labels for every facet, in upstream order.
pub fn facet_labels(facets: &[Facet]) -> Vec<String> {
    facets.iter().map(Facet::label).collect()
}

/// First facet whose name contains `needle`, ignoring case.
pub fn find_facet_by_name<'a>(facets: &'a [Facet], needle: &str) -> Option<&'a Facet> {
    let needle = needle.to_lowercase();
    facets
        .iter()
        .find(|facet| facet.name.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::config_eia::EiaConfig;
    use crate::retrieve::ky_http::RetrieveError;
    use crate::test_support::serve_once;
    use serde_json::json;
    use url::Url;

    fn client_for(base: &Url, key: &str) -> EiaClient {
        let config =
            EiaConfig::resolve(Some(key.into()), Some(base.to_string()), |_| None).unwrap();
        EiaClient::new(&config)
    }

    fn run_against(status: &str, body: &str) -> (Result<(), EiaError>, Vec<u8>, String) {
        let (base, handle) = serve_once(status, body);
        let client = client_for(&base, "test-key");
        let mut out = Vec::new();
        let result = print_facets(&client, "petroleum/pri/spt", "series", &mut out);
        let request = handle.join().unwrap();
        (result, out, request)
    }

    #[test]
    fn test_print_facets_success() {
        let (result, out, request) = run_against("200 OK", r#"{"response": {"facets": {"a": 1}}}"#);

        assert!(result.is_ok(), "Expected Ok, got Err: {:?}", result.err());
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"a\": 1\n}\n");
        assert!(request.starts_with("GET /v2/petroleum/pri/spt/facet/series?api_key=test-key HTTP/1.1"));
    }

    #[test]
    fn test_print_facets_is_idempotent() {
        let body = r#"{"response": {"totalFacets": 2, "facets": [{"id": "RWTC", "name": "WTI"}, {"id": "RBRTE", "name": "Brent"}]}}"#;
        let (first, out1, _) = run_against("200 OK", body);
        let (second, out2, _) = run_against("200 OK", body);

        assert!(first.is_ok() && second.is_ok());
        assert!(!out1.is_empty());
        assert_eq!(out1, out2);
    }

    #[test]
    fn test_print_facets_keeps_upstream_key_order() {
        let (result, out, _) = run_against("200 OK", r#"{"response": {"facets": {"z": 1, "a": 2}}}"#);

        assert!(result.is_ok());
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"z\": 1,\n  \"a\": 2\n}\n");
    }

    #[test]
    fn test_print_facets_invalid_json_writes_nothing() {
        let (result, out, _) = run_against("200 OK", "this is not json");

        assert!(matches!(result, Err(EiaError::Retrieve(RetrieveError::Decode(_)))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_facets_missing_facets_writes_nothing() {
        let (result, out, _) = run_against("200 OK", r#"{"response": {"totalFacets": 0}}"#);

        assert!(matches!(result, Err(EiaError::MissingField(ref p)) if p == "response.facets"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_print_facets_error_status_writes_nothing() {
        let (result, out, _) = run_against(
            "403 Forbidden",
            r#"{"error": {"code": "API_KEY_INVALID", "message": "An invalid api_key was supplied."}}"#,
        );

        assert!(matches!(
            result,
            Err(EiaError::Retrieve(RetrieveError::HttpStatus { .. }))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_render_facets_two_space_indent() {
        let rendered = render_facets(&json!([{"id": "1", "name": "Production"}])).unwrap();
        assert_eq!(
            rendered,
            "[\n  {\n    \"id\": \"1\",\n    \"name\": \"Production\"\n  }\n]"
        );
    }

    #[test]
    fn test_parse_facets_accepts_numeric_ids_and_alias() {
        let facets = parse_facets(&json!([
            {"id": 57, "name": "Crude oil including lease condensate"},
            {"id": "2", "name": "Consumption", "alias": "cons"}
        ]))
        .unwrap();

        assert_eq!(facets[0].id, "57");
        assert_eq!(facets[0].alias, None);
        assert_eq!(facets[1].alias.as_deref(), Some("cons"));
    }

    #[test]
    fn test_parse_facets_rejects_object() {
        let err = parse_facets(&json!({"a": 1})).unwrap_err();
        assert!(matches!(err, EiaError::UnexpectedShape(_)));
    }

    #[test]
    fn test_facet_labels() {
        let facets = parse_facets(&json!([
            {"id": "1", "name": "Production"},
            {"id": "2", "name": "Consumption"}
        ]))
        .unwrap();
        assert_eq!(facet_labels(&facets), vec!["1:Production", "2:Consumption"]);
    }

    #[test]
    fn test_find_facet_by_name_ignores_case() {
        let facets = parse_facets(&json!([
            {"id": "5", "name": "Petroleum and other liquids"},
            {"id": "57", "name": "Crude Oil including lease condensate"}
        ]))
        .unwrap();

        let found = find_facet_by_name(&facets, "crude oil").unwrap();
        assert_eq!(found.id, "57");
        assert!(find_facet_by_name(&facets, "uranium").is_none());
    }
}
