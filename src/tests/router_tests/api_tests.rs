// src/tests/router_tests/api_tests.rs
use super::get;
use crate::config::AppConfig;
use crate::router::respond;
use crate::tests::utils::{body_json, test_state, StubTransport};
use crate::upstream::UpstreamError;
use serde_json::{json, Value};
use std::collections::HashSet;

fn live_config() -> AppConfig {
    AppConfig {
        use_mock_data: false,
        ..AppConfig::default()
    }
}

fn ids(body: &Value) -> HashSet<String> {
    body["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn idx_serves_mock_listings_when_upstream_errors() {
    let stub = StubTransport::failing(|| UpstreamError::Status {
        status: 500,
        body: "boom".into(),
    });
    let state = test_state(live_config(), stub.clone());

    let resp = respond(get("/api/idx?page=1&limit=7"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["listings"].as_array().unwrap().len(), 7);
    assert_eq!(body["total"], 120);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 7);
    assert_eq!(stub.calls().len(), 1, "upstream was tried first");
}

#[test]
fn idx_serves_mock_listings_when_upstream_is_unreachable() {
    let stub = StubTransport::failing(|| UpstreamError::Transport("connection refused".into()));
    let state = test_state(live_config(), stub);

    let body = body_json(respond(get("/api/idx"), &state));
    assert_eq!(body["listings"].as_array().unwrap().len(), 10);
    assert_eq!(body["page"], 1);
    assert_eq!(body["limit"], 10);
}

#[test]
fn idx_echoes_limits_above_the_mock_total() {
    let stub = StubTransport::failing(|| UpstreamError::Transport("refused".into()));
    let state = test_state(live_config(), stub);

    let body = body_json(respond(get("/api/idx?page=1&limit=150"), &state));
    assert_eq!(body["limit"], 150);
    assert_eq!(body["page"], 1);
    assert_eq!(body["listings"].as_array().unwrap().len(), 120);
}

#[test]
fn idx_accepts_numeric_ids_from_upstream() {
    let stub = StubTransport::with_json(json!({
        "value": [{ "Id": 501, "StreetNumber": 12, "StreetName": "Bay", "City": "Toronto" }]
    }));
    let state = test_state(live_config(), stub);

    let body = body_json(respond(get("/api/idx"), &state));
    assert_eq!(body["listings"].as_array().unwrap().len(), 1);
    assert_eq!(body["listings"][0]["id"], "501");
    assert_eq!(body["listings"][0]["address"]["streetNumber"], "12");
}

#[test]
fn idx_serves_mock_listings_when_upstream_body_does_not_decode() {
    let stub = StubTransport::with_json(json!({
        "value": [{ "Id": "X1", "ListPrice": "call for price", "Bedrooms": [3] }]
    }));
    let state = test_state(live_config(), stub.clone());

    let resp = respond(get("/api/idx?limit=4"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["total"], 120);
    assert_eq!(body["listings"].as_array().unwrap().len(), 4);
    assert!(body["listings"][0]["id"].as_str().unwrap().starts_with("mock-"));
    assert_eq!(stub.calls().len(), 1);
}

#[test]
fn idx_mock_mode_never_calls_upstream() {
    let stub = StubTransport::with_json(json!({ "value": [] }));
    let config = AppConfig {
        use_mock_data: true,
        ..AppConfig::default()
    };
    let state = test_state(config, stub.clone());

    let body = body_json(respond(get("/api/idx?city=Toronto&limit=5"), &state));

    assert!(stub.calls().is_empty());
    for listing in body["listings"].as_array().unwrap() {
        assert_eq!(listing["address"]["city"], "Toronto");
    }
}

#[test]
fn idx_pages_do_not_share_ids() {
    let stub = StubTransport::with_json(json!({}));
    let config = AppConfig {
        use_mock_data: true,
        ..AppConfig::default()
    };
    let state = test_state(config, stub);

    let first = ids(&body_json(respond(get("/api/idx?page=1"), &state)));
    let second = ids(&body_json(respond(get("/api/idx?page=2"), &state)));

    assert_eq!(first.len(), 10);
    assert!(first.is_disjoint(&second));
}

#[test]
fn idx_passes_upstream_rows_through() {
    let stub = StubTransport::with_json(json!({
        "@odata.count": 31,
        "value": [{
            "Id": "X100",
            "MlsNumber": "W555",
            "City": "Oakville",
            "ListPrice": 1899000.0,
            "Media": [{ "MediaUrl": "https://cdn/x100-1.jpg" }]
        }]
    }));
    let state = test_state(live_config(), stub.clone());

    let body = body_json(respond(get("/api/idx?city=Oakville&limit=1"), &state));

    assert_eq!(body["total"], 31);
    assert_eq!(body["listings"][0]["id"], "X100");
    assert_eq!(body["listings"][0]["images"][0], "https://cdn/x100-1.jpg");

    let (resource, query) = &stub.calls()[0];
    assert_eq!(resource, "Property");
    assert!(query.contains(&("$filter".to_string(), "contains(City, 'Oakville')".to_string())));
}

#[test]
fn treb_properties_maps_reso_rows() {
    let stub = StubTransport::with_json(json!({
        "value": [
            { "ListingKey": "C1", "City": "Toronto", "PropertySubType": "Detached", "ListPrice": 1250000 },
            { "ListingKey": "C2", "City": "Vaughan" }
        ]
    }));
    let state = test_state(live_config(), stub.clone());

    let resp = respond(get("/api/treb/properties?page=3&limit=2"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["total"], 2);
    assert_eq!(body["page"], 3);
    assert_eq!(body["listings"][0]["id"], "C1");
    assert_eq!(body["listings"][0]["propertyType"], "detached");
    assert_eq!(body["listings"][1]["propertyType"], "unknown");

    let (_, query) = &stub.calls()[0];
    assert!(query.contains(&("$skip".to_string(), "4".to_string())));
}

#[test]
fn treb_properties_by_id_returns_one_row_page() {
    let stub = StubTransport::new(|resource, _| {
        assert_eq!(resource, "Property('C9')");
        Ok(json!({ "ListingKey": "C9", "City": "Markham" }))
    });
    let state = test_state(live_config(), stub);

    let body = body_json(respond(get("/api/treb/properties?id=C9"), &state));

    assert_eq!(body["total"], 1);
    assert_eq!(body["listings"].as_array().unwrap().len(), 1);
    assert_eq!(body["listings"][0]["address"]["city"], "Markham");
}

#[test]
fn treb_properties_reports_upstream_failure() {
    let stub = StubTransport::failing(|| UpstreamError::Status {
        status: 503,
        body: "maintenance".into(),
    });
    let state = test_state(live_config(), stub);

    let resp = respond(get("/api/treb/properties"), &state);
    assert_eq!(resp.status(), 500);
    assert!(body_json(resp)["error"].as_str().unwrap().contains("503"));
}

#[test]
fn treb_media_requires_property_id() {
    let stub = StubTransport::with_json(json!({ "value": [] }));
    let state = test_state(live_config(), stub.clone());

    for uri in ["/api/treb/media", "/api/treb/media?propertyId=", "/api/treb/media?propertyId=%20"] {
        let resp = respond(get(uri), &state);
        assert_eq!(resp.status(), 400, "{uri}");
        assert_eq!(body_json(resp), json!({ "error": "Property ID is required" }));
    }
    assert!(stub.calls().is_empty());
}

#[test]
fn treb_media_sorts_preferred_then_order() {
    let stub = StubTransport::with_json(json!({
        "value": [
            { "MediaKey": "m3", "MediaURL": "https://cdn/3.jpg", "Order": 3, "MediaType": "image/jpeg" },
            { "MediaKey": "m1", "MediaURL": "https://cdn/1.jpg", "Order": 1 },
            { "MediaKey": "m9", "MediaURL": "https://cdn/9.jpg", "Order": 9, "PreferredPhotoYN": true }
        ]
    }));
    let state = test_state(live_config(), stub.clone());

    let resp = respond(get("/api/treb/media?propertyId=C1"), &state);
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["propertyId"], "C1");
    assert_eq!(body["total"], 3);
    let order: Vec<&str> = body["media"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap())
        .collect();
    assert_eq!(order, vec!["m9", "m1", "m3"]);
    assert_eq!(body["media"][0]["isPreferred"], true);

    let (resource, query) = &stub.calls()[0];
    assert_eq!(resource, "Media");
    assert!(query.contains(&(
        "$filter".to_string(),
        "ResourceRecordKey eq 'C1' and ResourceName eq 'Property'".to_string()
    )));
}

#[test]
fn treb_media_reports_upstream_failure() {
    let stub = StubTransport::failing(|| UpstreamError::Transport("reset".into()));
    let state = test_state(live_config(), stub);

    let resp = respond(get("/api/treb/media?propertyId=C1"), &state);
    assert_eq!(resp.status(), 500);
    assert!(body_json(resp)["error"].is_string());
}

#[test]
fn debug_reports_failure_when_site_unreachable() {
    let config = AppConfig {
        public_base_url: "http://127.0.0.1:9".into(),
        public_dir: std::env::temp_dir().join("realty-site-missing-public"),
        ..AppConfig::default()
    };
    let state = test_state(config, StubTransport::with_json(json!({})));

    let resp = respond(get("/api/debug"), &state);
    assert_eq!(resp.status(), 500);

    let body = body_json(resp);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to fetch property data");
}

#[test]
fn unknown_api_path_is_json_404() {
    let state = test_state(live_config(), StubTransport::with_json(json!({})));

    let resp = respond(get("/api/nope"), &state);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp)["error"], "Not Found");
}
