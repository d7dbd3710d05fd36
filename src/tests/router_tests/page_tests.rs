// src/tests/router_tests/page_tests.rs
use super::get;
use crate::config::{AppConfig, SearchBackend};
use crate::listings::MockListings;
use crate::router::respond;
use crate::templates::components::PLACEHOLDER_IMAGE;
use crate::tests::utils::{body_string, test_state, StubTransport};
use crate::upstream::UpstreamError;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

fn mock_config() -> AppConfig {
    AppConfig {
        use_mock_data: true,
        ..AppConfig::default()
    }
}

/// Fresh public dir with one image and one stylesheet.
fn public_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("realty-site-{name}-{}", std::process::id()));
    fs::create_dir_all(dir.join("images")).unwrap();
    fs::create_dir_all(dir.join("static")).unwrap();
    fs::write(dir.join("images/luxury-home-1.png"), b"\x89PNG").unwrap();
    fs::write(dir.join("static/main.css"), "body{}").unwrap();
    dir
}

#[test]
fn home_page_renders_search_form() {
    let state = test_state(mock_config(), StubTransport::with_json(json!({})));

    let resp = respond(get("/"), &state);
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert!(html.contains(r#"action="/search""#));
    assert!(html.contains("Advanced Filters"));
}

#[test]
fn search_page_renders_mock_results() {
    let state = test_state(mock_config(), StubTransport::with_json(json!({})));

    let resp = respond(get("/search?city=Toronto&page=2"), &state);
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert_eq!(html.matches(r#"class="property-card""#).count(), 10);
    assert!(html.contains("Showing 11 to 20 of 120 properties"));
    assert!(html.contains("/search?city=Toronto&amp;page=3&amp;limit=10"));
}

#[test]
fn treb_search_page_attaches_photos() {
    let stub = StubTransport::new(|resource, _| match resource {
        "Property" => Ok(json!({ "value": [{ "ListingKey": "T1", "ListPrice": 990000 }] })),
        "Media" => Ok(json!({ "value": [{ "MediaKey": "p1", "MediaURL": "https://cdn/t1.jpg", "Order": 1 }] })),
        other => panic!("unexpected resource {other}"),
    });
    let config = AppConfig {
        search_backend: SearchBackend::Treb,
        ..AppConfig::default()
    };
    let state = test_state(config, stub);

    let html = body_string(respond(get("/search"), &state));

    assert!(html.contains("https://cdn/t1.jpg"));
    assert!(html.contains("$990,000"));
}

#[test]
fn treb_search_page_shows_error_state() {
    let stub = StubTransport::failing(|| UpstreamError::Transport("dns failure".into()));
    let config = AppConfig {
        search_backend: SearchBackend::Treb,
        ..AppConfig::default()
    };
    let state = test_state(config, stub);

    let resp = respond(get("/search"), &state);
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Something went wrong"));
}

#[test]
fn property_page_uses_collapsed_photos() {
    let stub = StubTransport::new(|resource, _| match resource {
        "Property('W42')" => Ok(json!({
            "ListingKey": "W42",
            "StreetNumber": "42",
            "StreetName": "Lakeshore",
            "StreetSuffix": "Blvd",
            "City": "Oakville",
            "ListPrice": 2450000,
            "ListingContractDate": "2024-03-02",
            "InteriorFeatures": ["Sauna", null, ""]
        })),
        "Media" => Ok(json!({ "value": [
            { "MediaKey": "a", "MediaURL": "https://cdn/a.jpg", "Order": 1 },
            { "MediaKey": "a-thumb", "MediaURL": "https://cdn/a-small.jpg", "Order": 1 },
            { "MediaKey": "b", "MediaURL": "https://cdn/b.jpg", "Order": 2 }
        ]})),
        other => panic!("unexpected resource {other}"),
    });
    let state = test_state(AppConfig::default(), stub);

    let resp = respond(get("/property/W42"), &state);
    assert_eq!(resp.status(), 200);

    let html = body_string(resp);
    assert!(html.contains("42 Lakeshore Blvd"));
    assert!(html.contains("$2,450,000"));
    assert!(html.contains("March 2, 2024"));
    assert!(html.contains("<li>Sauna</li>"));
    assert!(html.contains("https://cdn/b.jpg"));
    assert!(!html.contains("a-small.jpg"));
}

#[test]
fn property_page_without_photos_uses_placeholder() {
    let stub = StubTransport::new(|resource, _| match resource {
        "Media" => Err(UpstreamError::Transport("timeout".into())),
        _ => Ok(json!({ "ListingKey": "N7" })),
    });
    let state = test_state(AppConfig::default(), stub);

    let html = body_string(respond(get("/property/N7"), &state));
    assert!(html.contains("/images/property-placeholder.svg"));
}

#[test]
fn unknown_property_is_not_found_page() {
    let stub = StubTransport::failing(|| UpstreamError::Status {
        status: 404,
        body: String::new(),
    });
    let state = test_state(AppConfig::default(), stub);

    let resp = respond(get("/property/missing"), &state);
    assert_eq!(resp.status(), 404);

    let html = body_string(resp);
    assert!(html.contains("Property Not Found"));
    assert!(html.contains("Back to Home"));
}

#[test]
fn serves_static_files_from_public_dir() {
    let config = AppConfig {
        public_dir: public_dir("assets"),
        ..AppConfig::default()
    };
    let state = test_state(config, StubTransport::with_json(json!({})));

    let resp = respond(get("/images/luxury-home-1.png"), &state);
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), "image/png");

    let resp = respond(get("/static/main.css"), &state);
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(resp), "body{}");

    assert_eq!(respond(get("/images/nope.png"), &state).status(), 404);
}

#[test]
fn rejects_path_traversal() {
    let config = AppConfig {
        public_dir: public_dir("traversal"),
        ..AppConfig::default()
    };
    let state = test_state(config, StubTransport::with_json(json!({})));

    for uri in ["/images/../static/main.css", "/static/..%2fCargo.toml", "/images/"] {
        assert_eq!(respond(get(uri), &state).status(), 400, "{uri}");
    }
}

#[test]
fn unknown_page_is_html_404() {
    let state = test_state(mock_config(), StubTransport::with_json(json!({})));

    let resp = respond(get("/nowhere"), &state);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("← Back to home"));
}

#[test]
fn property_ids_are_percent_decoded() {
    let stub = StubTransport::new(|resource, _| match resource {
        "Media" => Ok(json!({ "value": [] })),
        _ => Ok(json!({ "ListingKey": "W 1" })),
    });
    let state = test_state(AppConfig::default(), stub.clone());

    assert_eq!(respond(get("/property/W%201"), &state).status(), 200);
    assert_eq!(respond(get("/property/A+B"), &state).status(), 200);

    let resources: Vec<String> = stub.calls().into_iter().map(|(r, _)| r).collect();
    assert_eq!(resources[0], "Property('W 1')");
    assert_eq!(resources[2], "Property('A+B')");

    let (_, media_query) = &stub.calls()[1];
    assert!(media_query.iter().any(|(_, v)| v.contains("'W 1'")));
}

#[test]
fn encoded_slash_in_property_id_is_not_found() {
    let stub = StubTransport::with_json(json!({ "ListingKey": "x" }));
    let state = test_state(AppConfig::default(), stub.clone());

    assert_eq!(respond(get("/property/a%2Fb"), &state).status(), 404);
    assert!(stub.calls().is_empty());
}

#[test]
fn shipped_images_cover_mock_listings_and_placeholder() {
    let public = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public");
    let config = AppConfig {
        public_dir: public,
        ..AppConfig::default()
    };
    let state = test_state(config, StubTransport::with_json(json!({})));

    let mut paths: Vec<String> = MockListings::generate(6, None, 0)
        .into_iter()
        .flat_map(|listing| listing.images)
        .collect();
    paths.push(PLACEHOLDER_IMAGE.to_string());

    for path in paths {
        assert_eq!(respond(get(&path), &state).status(), 200, "{path}");
    }
}
