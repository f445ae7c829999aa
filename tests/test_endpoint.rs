//! Verb classification, envelopes and body parsing for the transport layer.

use mtg_catalog_search::endpoint::{self, Dispatch, Endpoint};
use mtg_catalog_search::{CatalogError, DeckSearchRequest, DeckSearchResponse};
use serde_json::json;

#[test]
fn searches_accept_post_and_preflight_only() {
    for ep in [Endpoint::DeckSearch, Endpoint::CardSearch] {
        assert_eq!(ep.classify("POST").unwrap(), Dispatch::Handle);
        assert_eq!(ep.classify("OPTIONS").unwrap(), Dispatch::Preflight);
        let err = ep.classify("GET").unwrap_err();
        assert!(matches!(err, CatalogError::MethodNotAllowed(_)));
        assert_eq!(err.status_code(), 405);
        assert!(ep.classify("DELETE").is_err());
    }
}

#[test]
fn lookup_accepts_get_and_preflight_only() {
    let ep = Endpoint::DeckLookup;
    assert_eq!(ep.classify("get").unwrap(), Dispatch::Handle);
    assert_eq!(ep.classify("OPTIONS").unwrap(), Dispatch::Preflight);
    assert_eq!(ep.classify("POST").unwrap_err().status_code(), 405);
}

#[test]
fn lookup_is_cacheable_longer_than_searches() {
    assert_eq!(
        Endpoint::DeckSearch.cache_control(),
        "s-maxage=180, stale-while-revalidate=600"
    );
    assert_eq!(
        Endpoint::CardSearch.cache_control(),
        "s-maxage=120, stale-while-revalidate=600"
    );
    assert_eq!(Endpoint::DeckLookup.cache_control(), "s-maxage=600");
}

#[test]
fn success_body_adds_ok_and_source() {
    let resp = DeckSearchResponse {
        request_url: "https://archidekt.com/api/decks/cards/?pageSize=20".into(),
        count: 0,
        total_matching: 0,
        site_total: None,
        decks: vec![],
    };
    let body = Endpoint::DeckSearch.success_body(&resp).unwrap();
    assert_eq!(
        body,
        json!({
            "ok": true,
            "source": "archidekt",
            "requestUrl": "https://archidekt.com/api/decks/cards/?pageSize=20",
            "count": 0,
            "total_matching": 0,
            "site_total": null,
            "decks": []
        })
    );
}

#[test]
fn error_body_carries_message() {
    let err = CatalogError::InvalidRequest("Missing deck id".into());
    assert_eq!(
        endpoint::error_body(&err),
        json!({"ok": false, "error": "Invalid request: Missing deck id"})
    );
}

#[test]
fn parse_body_defaults_blank_and_rejects_malformed() {
    let req: DeckSearchRequest = endpoint::parse_body("  ").unwrap();
    assert!(req.name.is_empty());
    assert!(!req.include_site_total);

    let req: DeckSearchRequest = endpoint::parse_body(r#"{"name":"goblins"}"#).unwrap();
    assert_eq!(req.name, "goblins");

    let err = endpoint::parse_body::<DeckSearchRequest>("{not json").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
    assert_eq!(err.status_code(), 400);
}
