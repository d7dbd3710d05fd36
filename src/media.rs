// media.rs
//
// Photo lookup for a listing, and the step that attaches photos to a whole
// page of listings with a bounded number of requests in flight.

use crate::domain::{MediaItem, PropertyListing};
use crate::upstream::filter::media_filter;
use crate::upstream::models::{ODataCollection, ResoMedia};
use crate::upstream::{ODataTransport, UpstreamError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Size variants of one photo carry this in their media id.
const VARIANT_MARKER: char = '-';

pub trait MediaFetcher: Send + Sync {
    fn fetch(&self, listing_id: &str) -> Result<Vec<MediaItem>, UpstreamError>;
}

pub struct ODataMediaFetcher {
    transport: Arc<dyn ODataTransport>,
}

impl ODataMediaFetcher {
    pub fn new(transport: Arc<dyn ODataTransport>) -> Self {
        Self { transport }
    }
}

impl MediaFetcher for ODataMediaFetcher {
    fn fetch(&self, listing_id: &str) -> Result<Vec<MediaItem>, UpstreamError> {
        let query = [
            ("$filter", media_filter(listing_id)),
            ("$orderby", "Order".to_string()),
            ("$format", "json".to_string()),
        ];

        let data = self.transport.get("Media", &query)?;
        let rows: ODataCollection<ResoMedia> = serde_json::from_value(data)?;

        let mut media: Vec<MediaItem> = rows.value.into_iter().map(MediaItem::from).collect();
        sort_media(&mut media);
        Ok(media)
    }
}

/// Preferred photos first, then ascending `order`. Stable.
pub fn sort_media(media: &mut [MediaItem]) {
    media.sort_by(|a, b| {
        b.is_preferred
            .cmp(&a.is_preferred)
            .then(a.order.cmp(&b.order))
    });
}

/// Flatten sorted media to photo URLs: variant ids are skipped and each
/// `order` value keeps one URL (the last one seen), in first-seen position.
pub fn collapse_urls(media: &[MediaItem]) -> Vec<String> {
    let mut slots: Vec<(i64, &str)> = Vec::new();

    for item in media.iter().filter(|m| !m.id.contains(VARIANT_MARKER)) {
        match slots.iter_mut().find(|(order, _)| *order == item.order) {
            Some(slot) => slot.1 = item.url.as_str(),
            None => slots.push((item.order, item.url.as_str())),
        }
    }

    slots.into_iter().map(|(_, url)| url.to_string()).collect()
}

/// Attach photos to every listing using at most `concurrency` requests at
/// once. Returns only after every lookup has settled. A failed lookup
/// leaves that listing's images untouched.
pub fn enrich_listings(
    listings: &mut [PropertyListing],
    fetcher: &dyn MediaFetcher,
    concurrency: usize,
) {
    if listings.is_empty() {
        return;
    }

    let ids: Vec<&str> = listings.iter().map(|l| l.id.as_str()).collect();
    let workers = concurrency.max(1).min(ids.len());
    let cursor = AtomicUsize::new(0);

    let ids = &ids;
    let cursor = &cursor;

    let found: Vec<(usize, Vec<String>)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(move |_| {
                scope.spawn(move || {
                    let mut done = Vec::new();
                    loop {
                        let index = cursor.fetch_add(1, Ordering::SeqCst);
                        let Some(id) = ids.get(index).copied() else {
                            break;
                        };

                        match fetcher.fetch(id) {
                            Ok(media) if !media.is_empty() => {
                                done.push((index, collapse_urls(&media)));
                            }
                            Ok(_) => debug!(listing_id = id, "no media for listing"),
                            Err(err) => {
                                warn!(listing_id = id, error = %err, "media lookup failed");
                            }
                        }
                    }
                    done
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle.join().unwrap_or_else(|_| {
                    warn!("media worker panicked");
                    Vec::new()
                })
            })
            .collect()
    });

    for (index, urls) in found {
        listings[index].images = urls;
    }
}
