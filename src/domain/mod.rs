mod listing;
mod property;
mod search;

pub use listing::{Address, ListingsPage, MediaItem, MediaResponse, PropertyListing};
pub use search::{SearchParams, DEFAULT_PAGE_SIZE};
