// session.rs
use crate::domain::{ListingsPage, PropertyListing, SearchParams, DEFAULT_PAGE_SIZE};
use crate::upstream::UpstreamError;
use parking_lot::Mutex;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Issued by `begin`; only the most recent ticket may publish results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub page: u32,
}

/// What the pages render from.
#[derive(Debug, Clone)]
pub struct SearchSnapshot {
    pub state: SearchState,
    pub results: Vec<PropertyListing>,
    pub total: u64,
    pub current_page: u32,
    pub limit: u32,
}

impl SearchSnapshot {
    pub fn total_pages(&self) -> u32 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit)) as u32
    }
}

struct Inner {
    generation: u64,
    snapshot: SearchSnapshot,
}

/// Search state for one visitor. Single writer at a time, any number of
/// readers through `snapshot`.
pub struct SearchSession {
    inner: Mutex<Inner>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                generation: 0,
                snapshot: SearchSnapshot {
                    state: SearchState::Idle,
                    results: Vec::new(),
                    total: 0,
                    current_page: 1,
                    limit: DEFAULT_PAGE_SIZE,
                },
            }),
        }
    }

    pub fn begin(&self, params: &SearchParams) -> SearchTicket {
        let mut inner = self.inner.lock();
        inner.generation += 1;
        inner.snapshot.state = SearchState::Loading;

        SearchTicket {
            generation: inner.generation,
            page: params.page,
        }
    }

    /// Publish a finished search. Returns `false` when a newer search has
    /// started since `ticket` was issued; the result is then dropped.
    pub fn finish(&self, ticket: SearchTicket, result: Result<ListingsPage, UpstreamError>) -> bool {
        let mut inner = self.inner.lock();

        if ticket.generation != inner.generation {
            debug!(
                stale = ticket.generation,
                current = inner.generation,
                "dropping superseded search result"
            );
            return false;
        }

        let snapshot = &mut inner.snapshot;
        match result {
            Ok(page) => {
                snapshot.results = page.listings;
                snapshot.total = page.total;
                snapshot.current_page = ticket.page;
                snapshot.limit = page.limit;
                snapshot.state = SearchState::Success;
            }
            Err(err) => {
                snapshot.results.clear();
                snapshot.state = SearchState::Error(err.to_string());
            }
        }

        true
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.inner.lock().snapshot.clone()
    }
}
