mod idx;
mod mock;
mod treb;

pub use idx::IdxAdapter;
pub use mock::MockListings;
pub use treb::TrebListings;

use crate::domain::{ListingsPage, SearchParams};
use crate::upstream::UpstreamError;

/// One strategy for turning a search into a page of listings.
pub trait ListingsSource: Send + Sync {
    fn fetch_page(&self, params: &SearchParams) -> Result<ListingsPage, UpstreamError>;

    /// Whether the rows come back without photos and need the media step.
    fn needs_media_enrichment(&self) -> bool {
        false
    }
}
