mod client;
pub mod filter;
pub mod models;
mod upstream_error;

pub use client::{HttpTransport, ODataTransport};
pub use upstream_error::UpstreamError;
