// idx.rs
use crate::domain::{ListingsPage, PropertyListing, SearchParams};
use crate::listings::{ListingsSource, MockListings};
use crate::upstream::filter::build_filter;
use crate::upstream::models::{IdxProperty, ODataCollection};
use crate::upstream::{ODataTransport, UpstreamError};
use std::sync::Arc;
use tracing::{info, warn};

/// Filtered, paginated query against the IDX `Property` resource.
pub struct ODataListings {
    transport: Arc<dyn ODataTransport>,
}

impl ODataListings {
    pub fn new(transport: Arc<dyn ODataTransport>) -> Self {
        Self { transport }
    }

    pub fn query(params: &SearchParams) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(filter) = build_filter(params) {
            query.push(("$filter", filter));
        }
        query.push(("$top", params.limit.to_string()));
        query.push(("$skip", params.skip().to_string()));
        query.push(("$count", "true".to_string()));
        query.push(("$expand", "Media".to_string()));
        query
    }
}

impl ListingsSource for ODataListings {
    fn fetch_page(&self, params: &SearchParams) -> Result<ListingsPage, UpstreamError> {
        let data = self.transport.get("Property", &Self::query(params))?;
        let rows: ODataCollection<IdxProperty> = serde_json::from_value(data)?;

        let total = rows.count.unwrap_or(rows.value.len() as u64);
        let listings = rows
            .value
            .into_iter()
            .map(PropertyListing::from_idx)
            .collect();

        Ok(ListingsPage {
            listings,
            total,
            page: params.page,
            limit: params.limit,
        })
    }
}

/// The `/api/idx` contract: mock data when configured, otherwise the
/// upstream query, degrading to mock data on any upstream failure.
pub struct IdxAdapter {
    upstream: ODataListings,
    use_mock: bool,
}

impl IdxAdapter {
    pub fn new(transport: Arc<dyn ODataTransport>, use_mock: bool) -> Self {
        Self {
            upstream: ODataListings::new(transport),
            use_mock,
        }
    }

    pub fn search(&self, params: &SearchParams) -> ListingsPage {
        if self.use_mock {
            info!(page = params.page, limit = params.limit, "serving mock listings");
            return MockListings::page(params);
        }

        match self.upstream.fetch_page(params) {
            Ok(page) => page,
            Err(err) => {
                warn!(
                    error = %err,
                    page = params.page,
                    limit = params.limit,
                    city = params.city.as_deref().unwrap_or(""),
                    "upstream listings failed, falling back to mock data"
                );
                MockListings::page(params)
            }
        }
    }
}

impl ListingsSource for IdxAdapter {
    fn fetch_page(&self, params: &SearchParams) -> Result<ListingsPage, UpstreamError> {
        Ok(self.search(params))
    }
}
