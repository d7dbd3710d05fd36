use crate::domain::{MediaResponse, SearchParams};
use crate::errors::{ResultResp, ServerError};
use crate::media::{collapse_urls, MediaFetcher};
use crate::responses::{
    error_response, file_response, html_response, html_response_with_status, json_response,
};
use crate::search::SearchSession;
use crate::state::AppState;
use crate::templates;
use anyhow::Context;
use astra::{Request, Response};
use serde_json::{json, Value};
use std::fs;
use tracing::{debug, warn};
use url::form_urlencoded;

const PROPERTY_NOT_FOUND: &str = "We couldn't find the property you're looking for.";

/// Entry point for the server loop: errors become JSON under `/api/`, an
/// HTML page elsewhere.
pub fn respond(req: Request, state: &AppState) -> Response {
    let path = req.uri().path().to_string();

    match handle(req, state) {
        Ok(resp) => resp,
        Err(err) => error_response(&path, err),
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query();

    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/search") => search_page(state, query),
        ("GET", "/api/idx") => idx_listings(state, query),
        ("GET", "/api/treb/properties") => treb_properties(state, query),
        ("GET", "/api/treb/media") => treb_media(state, query),
        ("GET", "/api/debug") => debug_report(state),
        ("GET", p) if p.starts_with("/property/") => {
            property_page(state, &decode_segment(&p["/property/".len()..]))
        }
        ("GET", p) if p.starts_with("/images/") => static_file(state, "images", &p["/images/".len()..]),
        ("GET", p) if p.starts_with("/static/") => static_file(state, "static", &p["/static/".len()..]),
        _ => Err(ServerError::NotFound),
    }
}

fn search_page(state: &AppState, query: Option<&str>) -> ResultResp {
    let params = SearchParams::from_query(query);
    let session = SearchSession::new();

    state.orchestrator().search(&session, &params);

    html_response(templates::pages::search_page(&session.snapshot(), &params))
}

fn idx_listings(state: &AppState, query: Option<&str>) -> ResultResp {
    let params = SearchParams::from_query(query);
    json_response(200, &state.idx().search(&params))
}

fn treb_properties(state: &AppState, query: Option<&str>) -> ResultResp {
    let params = SearchParams::from_query(query);
    let treb = state.treb();

    let page = match query_value(query, "id") {
        Some(id) => treb.single(&id, &params)?,
        None => treb.page(&params)?,
    };

    json_response(200, &page)
}

fn treb_media(state: &AppState, query: Option<&str>) -> ResultResp {
    let property_id = query_value(query, "propertyId")
        .ok_or_else(|| ServerError::BadRequest("Property ID is required".into()))?;

    let media = state.media().fetch(&property_id)?;

    json_response(
        200,
        &MediaResponse {
            total: media.len(),
            media,
            property_id,
        },
    )
}

fn property_page(state: &AppState, id: &str) -> ResultResp {
    let not_found = || {
        html_response_with_status(
            404,
            templates::pages::property_not_found_page(PROPERTY_NOT_FOUND),
        )
    };

    if id.is_empty() || id.contains('/') {
        return not_found();
    }

    let mut listing = match state.treb().by_id(id) {
        Ok(listing) => listing,
        Err(err) => {
            warn!(id, error = %err, "property lookup failed");
            return not_found();
        }
    };

    match state.media().fetch(id) {
        Ok(media) if !media.is_empty() => listing.images = collapse_urls(&media),
        Ok(_) => {}
        Err(err) => warn!(id, error = %err, "photos unavailable"),
    }

    html_response(templates::pages::property_page(&listing))
}

fn debug_report(state: &AppState) -> ResultResp {
    match collect_debug_info(state) {
        Ok(report) => json_response(200, &report),
        Err(err) => {
            warn!(error = %err, "debug report failed");
            json_response(500, &json!({ "success": false, "error": err.to_string() }))
        }
    }
}

fn collect_debug_info(state: &AppState) -> anyhow::Result<Value> {
    let public_dir = &state.config.public_dir;
    let images_dir = public_dir.join("images");

    let mut image_files: Vec<String> = match fs::read_dir(&images_dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| !name.starts_with('.'))
            .map(|name| format!("/images/{name}"))
            .collect(),
        Err(err) => {
            warn!(dir = %images_dir.display(), error = %err, "cannot list images");
            Vec::new()
        }
    };
    image_files.sort();

    let url = format!(
        "{}/api/idx?id=mock-1",
        state.config.public_base_url.trim_end_matches('/')
    );
    let resp = state
        .http
        .get(&url)
        .send()
        .context("Failed to fetch property data")?;
    if !resp.status().is_success() {
        anyhow::bail!("Failed to fetch property data");
    }
    let page: Value = resp.json().context("Failed to fetch property data")?;

    let cwd = std::env::current_dir()
        .map(|dir| dir.display().to_string())
        .unwrap_or_default();

    Ok(json!({
        "success": true,
        "publicDirExists": public_dir.exists(),
        "imagesDirExists": images_dir.exists(),
        "imageFiles": image_files,
        "property": page["listings"].get(0).cloned().unwrap_or(Value::Null),
        "cwd": cwd,
    }))
}

fn static_file(state: &AppState, dir: &str, name: &str) -> ResultResp {
    if name.is_empty() || name.contains("..") || name.contains('/') || name.contains('\\') {
        return Err(ServerError::BadRequest("Invalid asset path".into()));
    }

    file_response(&state.config.public_dir.join(dir).join(name))
}

/// Percent-decode one path segment. `+` stays literal, unlike in a query.
fn decode_segment(raw: &str) -> String {
    let escaped = raw
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D");

    form_urlencoded::parse(escaped.as_bytes())
        .next()
        .map(|(segment, _)| segment.into_owned())
        .unwrap_or_default()
}

/// Decoded value for `key`. Blank counts as missing.
fn query_value(query: Option<&str>, key: &str) -> Option<String> {
    form_urlencoded::parse(query.unwrap_or("").as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
