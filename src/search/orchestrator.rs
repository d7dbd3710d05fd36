// orchestrator.rs
use crate::domain::SearchParams;
use crate::listings::ListingsSource;
use crate::media::{enrich_listings, MediaFetcher};
use crate::search::SearchSession;
use std::sync::Arc;
use tracing::info;

/// Runs one search end to end: listings, then photos when the source
/// needs them, then a single publish into the session.
pub struct SearchOrchestrator {
    source: Arc<dyn ListingsSource>,
    media: Option<Arc<dyn MediaFetcher>>,
    concurrency: usize,
}

impl SearchOrchestrator {
    pub fn new(source: Arc<dyn ListingsSource>) -> Self {
        Self {
            source,
            media: None,
            concurrency: 1,
        }
    }

    pub fn with_media(mut self, media: Arc<dyn MediaFetcher>, concurrency: usize) -> Self {
        self.media = Some(media);
        self.concurrency = concurrency;
        self
    }

    /// Returns whether the result was published (it is not if a newer
    /// search on the same session started meanwhile).
    pub fn search(&self, session: &SearchSession, params: &SearchParams) -> bool {
        let ticket = session.begin(params);

        let result = self.source.fetch_page(params).map(|mut page| {
            if let (true, Some(media)) = (self.source.needs_media_enrichment(), &self.media) {
                enrich_listings(&mut page.listings, media.as_ref(), self.concurrency);
            }
            page
        });

        info!(
            generation = ticket.generation,
            page = params.page,
            ok = result.is_ok(),
            "search finished"
        );

        session.finish(ticket, result)
    }
}
