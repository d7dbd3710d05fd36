mod api_tests;
mod page_tests;

use astra::{Body, Request};
use http::Method;

/// GET request for `uri`, the way the server loop hands it over.
fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}
