// treb.rs
use crate::domain::{ListingsPage, PropertyListing, SearchParams};
use crate::listings::ListingsSource;
use crate::upstream::filter::keyed;
use crate::upstream::models::{ODataCollection, ResoProperty};
use crate::upstream::{ODataTransport, UpstreamError};
use std::sync::Arc;

/// The RESO `Property` resource: unfiltered pages and single-record
/// lookups. Rows carry no photos.
pub struct TrebListings {
    transport: Arc<dyn ODataTransport>,
}

impl TrebListings {
    pub fn new(transport: Arc<dyn ODataTransport>) -> Self {
        Self { transport }
    }

    pub fn page(&self, params: &SearchParams) -> Result<ListingsPage, UpstreamError> {
        let query = [
            ("$top", params.limit.to_string()),
            ("$skip", params.skip().to_string()),
            ("$format", "json".to_string()),
        ];

        let data = self.transport.get("Property", &query)?;
        let rows: ODataCollection<ResoProperty> = serde_json::from_value(data)?;

        let listings: Vec<_> = rows
            .value
            .into_iter()
            .map(PropertyListing::from_reso)
            .collect();

        Ok(ListingsPage {
            total: rows.count.unwrap_or(listings.len() as u64),
            listings,
            page: params.page,
            limit: params.limit,
        })
    }

    pub fn by_id(&self, id: &str) -> Result<PropertyListing, UpstreamError> {
        let data = self
            .transport
            .get(&keyed("Property", id), &[("$format", "json".to_string())])
            .map_err(|err| not_found_as(id, err))?;

        if data.is_null() || data.as_object().is_some_and(|o| o.is_empty()) {
            return Err(UpstreamError::NotFound(id.to_string()));
        }

        let record: ResoProperty = serde_json::from_value(data)?;
        Ok(PropertyListing::from_reso(record))
    }

    /// `by_id` shaped as a one-row page.
    pub fn single(&self, id: &str, params: &SearchParams) -> Result<ListingsPage, UpstreamError> {
        let listing = self.by_id(id)?;
        Ok(ListingsPage {
            listings: vec![listing],
            total: 1,
            page: params.page,
            limit: params.limit,
        })
    }
}

impl ListingsSource for TrebListings {
    fn fetch_page(&self, params: &SearchParams) -> Result<ListingsPage, UpstreamError> {
        self.page(params)
    }

    fn needs_media_enrichment(&self) -> bool {
        true
    }
}

/// Upstream answers 404 for unknown keys.
fn not_found_as(id: &str, err: UpstreamError) -> UpstreamError {
    match err {
        UpstreamError::Status { status: 404, .. } => UpstreamError::NotFound(id.to_string()),
        other => other,
    }
}
