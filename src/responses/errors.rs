use crate::errors::ServerError;
use crate::templates::html_error_response;
use astra::{Body, Response, ResponseBuilder};
use serde_json::json;
use tracing::error;

/// `{ "error": "..." }` with the error's status code.
pub fn json_error_response(err: ServerError) -> Response {
    let status = err.status();
    let body = json!({ "error": err.public_message() }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// JSON for API paths, an HTML page for everything else.
pub fn error_response(path: &str, err: ServerError) -> Response {
    if err.status() >= 500 {
        error!(path, error = %err, "request failed");
    }

    if path.starts_with("/api/") {
        json_error_response(err)
    } else {
        html_error_response(err)
    }
}
