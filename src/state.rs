use crate::config::{AppConfig, SearchBackend};
use crate::listings::{IdxAdapter, TrebListings};
use crate::media::ODataMediaFetcher;
use crate::search::SearchOrchestrator;
use crate::upstream::{HttpTransport, ODataTransport, UpstreamError};
use reqwest::blocking::Client;
use std::sync::Arc;

/// Shared by every worker. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub transport: Arc<dyn ODataTransport>,
    pub http: Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self, UpstreamError> {
        let transport = HttpTransport::new(
            config.api_base_url.clone(),
            config.api_token.as_ref().map(|t| t.expose().to_string()),
            config.upstream_timeout,
        )?;

        let http = Client::builder().timeout(config.upstream_timeout).build()?;

        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
            http,
        })
    }

    /// Swap in another transport (the tests use a canned one).
    pub fn with_transport(config: AppConfig, transport: Arc<dyn ODataTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
            http: Client::new(),
        }
    }

    pub fn idx(&self) -> IdxAdapter {
        IdxAdapter::new(self.transport.clone(), self.config.use_mock_data)
    }

    pub fn treb(&self) -> TrebListings {
        TrebListings::new(self.transport.clone())
    }

    pub fn media(&self) -> ODataMediaFetcher {
        ODataMediaFetcher::new(self.transport.clone())
    }

    /// Search flow for the configured backend.
    pub fn orchestrator(&self) -> SearchOrchestrator {
        match self.config.search_backend {
            SearchBackend::Idx => SearchOrchestrator::new(Arc::new(self.idx())),
            SearchBackend::Treb => SearchOrchestrator::new(Arc::new(self.treb()))
                .with_media(Arc::new(self.media()), self.config.media_concurrency),
        }
    }
}
