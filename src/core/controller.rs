use crate::core::query::Query;
use crate::core::state::{SearchState, SEARCH_FAILED_MESSAGE};
use crate::services::SearchBackend;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Mediates between user input and the remote search service
///
/// Owns the single `SearchState` and notifies subscribed views through
/// a watch channel whenever it changes. Cloning the controller shares
/// the same state; overlapping submissions from clones are resolved by
/// a per-submission sequence number.
#[derive(Clone)]
pub struct SearchController {
    backend: Arc<dyn SearchBackend>,
    state: Arc<watch::Sender<SearchState>>,
    seq: Arc<AtomicU64>,
}

impl SearchController {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        let (state, _) = watch::channel(SearchState::Idle);
        Self {
            backend,
            state: Arc::new(state),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Subscribe a view to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SearchState {
        self.state.borrow().clone()
    }

    /// Submit a search.
    ///
    /// Blank input is ignored: no state change, no request. Valid input
    /// moves the state to `Loading` before the request is issued, then
    /// to `Success` or `Error` once the response settles. A submission
    /// started while an earlier one is still in flight supersedes it;
    /// the superseded response is discarded when it eventually arrives.
    pub async fn submit(&self, input: &str) {
        let Some(query) = Query::parse(input) else {
            tracing::debug!("Ignoring blank query");
            return;
        };

        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(SearchState::Loading);

        tracing::info!("Searching for: {}", query);

        let next = match self.backend.search(&query).await {
            Ok(response) => {
                tracing::debug!(
                    "Received {} matches: {}",
                    response.matches.len(),
                    response.explanation
                );
                SearchState::Success(response)
            }
            Err(e) => {
                tracing::error!("Search failed: {}", e);
                SearchState::Error(SEARCH_FAILED_MESSAGE.to_string())
            }
        };

        // A newer submission owns the state now; this response is stale.
        if self.seq.load(Ordering::SeqCst) != seq {
            tracing::debug!("Discarding response for superseded search");
            return;
        }

        self.state.send_replace(next);
    }
}
