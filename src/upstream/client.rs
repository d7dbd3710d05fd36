// client.rs
use crate::upstream::UpstreamError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("realty_site/", env!("CARGO_PKG_VERSION"));

/// A GET against one OData resource (`Property`, `Property('X')`, `Media`),
/// returning the decoded JSON document.
pub trait ODataTransport: Send + Sync {
    fn get(&self, resource: &str, query: &[(&str, String)]) -> Result<Value, UpstreamError>;
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
        })
    }

    fn resource_url(&self, resource: &str) -> Result<Url, UpstreamError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| UpstreamError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(resource);

        Ok(url)
    }
}

impl ODataTransport for HttpTransport {
    fn get(&self, resource: &str, query: &[(&str, String)]) -> Result<Value, UpstreamError> {
        let token = self
            .token
            .as_deref()
            .ok_or(UpstreamError::MissingCredentials)?;

        let url = self.resource_url(resource)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let start = std::time::Instant::now();
        let resp = self
            .client
            .get(url.clone())
            .headers(headers)
            .bearer_auth(token)
            .query(query)
            .send()?;

        let status = resp.status();
        let text = resp.text()?;

        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "upstream request finished"
        );

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
