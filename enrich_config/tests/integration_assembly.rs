//! Integration tests for enrichment-layer assembly.
//!
//! These tests verify that:
//! - Managers come out wired with the configured header and codec
//! - The engine is mandatory and its absence is a build-time error
//! - Repositories registered on the builder are exposed for the engine

use http::Response;
use serde_json::{Value, json};

use enrich_config::{ConfigError, EnrichmentBuilder, Settings};
use enrich_core::{Enricher, ItemSpec, Repository, RequestSet};
use enrich_http::ENRICHMENT_REQUEST_HEADER;

/// Engine double that tags the data it was handed.
struct TaggingEnricher;

impl Enricher for TaggingEnricher {
    fn enrich(&self, data: Value, requests: &RequestSet) -> anyhow::Result<Value> {
        Ok(json!({"data": data, "requests": requests.len()}))
    }
}

struct StaticRepository(Value);

impl Repository for StaticRepository {
    fn find(&self, _key: &Value) -> anyhow::Result<Option<Value>> {
        Ok(Some(self.0.clone()))
    }
}

#[test]
fn test_missing_enricher_is_a_build_error() {
    let builder = EnrichmentBuilder::new();
    assert!(matches!(
        builder.build_array_manager(),
        Err(ConfigError::MissingEnricher)
    ));
    assert!(matches!(
        builder.build_http_manager(),
        Err(ConfigError::MissingEnricher)
    ));
}

#[test]
fn test_array_manager_end_to_end() {
    let mut manager = EnrichmentBuilder::new()
        .with_enricher(TaggingEnricher)
        .build_array_manager()
        .expect("engine supplied");

    manager
        .add_request("user", None, &[ItemSpec::record("name", "userName")])
        .expect("valid request");

    let result = manager.enrich_data(json!({"id": 7})).expect("enrichment runs");
    assert_eq!(result, json!({"data": {"id": 7}, "requests": 1}));
}

#[test]
fn test_http_manager_uses_the_configured_header() {
    let settings: Settings = serde_json::from_str(r#"{"header":"x-hydration-plan"}"#)
        .expect("valid settings");

    let mut manager = EnrichmentBuilder::from_settings(&settings)
        .expect("valid header name")
        .with_enricher(TaggingEnricher)
        .build_http_manager()
        .expect("engine supplied");

    assert_eq!(manager.requests_header().as_str(), "x-hydration-plan");

    manager.add_request("user", None, &[]).expect("valid request");
    let response = manager
        .set_requests(Response::new(Vec::new()))
        .expect("set_requests succeeds");

    assert!(response.headers().contains_key("x-hydration-plan"));
    assert!(!response.headers().contains_key(&ENRICHMENT_REQUEST_HEADER));
}

#[test]
fn test_default_header_applies_when_unconfigured() {
    let manager = EnrichmentBuilder::new()
        .with_enricher(TaggingEnricher)
        .build_http_manager()
        .expect("engine supplied");
    assert_eq!(manager.requests_header(), &ENRICHMENT_REQUEST_HEADER);
}

#[test]
fn test_invalid_header_name_is_rejected() {
    let settings: Settings = serde_json::from_str(r#"{"header":"not a header\n"}"#)
        .expect("settings parse, validation happens at assembly");
    assert!(matches!(
        EnrichmentBuilder::from_settings(&settings),
        Err(ConfigError::InvalidHeader(_))
    ));
}

#[test]
fn test_registered_repositories_are_exposed() {
    let builder = EnrichmentBuilder::new()
        .with_enricher(TaggingEnricher)
        .repository("user", StaticRepository(json!({"name": "ada"})))
        .repository("account", StaticRepository(json!({"plan": "pro"})));

    let repositories = builder.repositories();
    assert_eq!(repositories.len(), 2);
    assert!(repositories.contains("user"));

    let found = repositories
        .get("account")
        .expect("registered target")
        .find(&json!(7))
        .expect("lookup runs");
    assert_eq!(found, Some(json!({"plan": "pro"})));
}
