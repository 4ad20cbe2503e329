//! Shared product-list store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use sweetshop_catalog::search::ProductService;

use crate::debounce::Debouncer;
use crate::state::{Action, FetchStatus, ProductsState};

/// How a fetch ended, from the caller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was stored.
    Succeeded,
    /// The error was stored.
    Failed,
    /// A newer fetch was issued meanwhile; the response was dropped.
    Stale,
}

/// Cloneable handle to the product-list state.
///
/// Fetches may overlap. Each one is tagged with a sequence number when issued
/// and only the response to the latest tag is applied.
#[derive(Clone)]
pub struct ProductsStore {
    state: Arc<Mutex<ProductsState>>,
    service: Arc<dyn ProductService>,
}

impl ProductsStore {
    /// Create a store with default state.
    pub fn new(service: Arc<dyn ProductService>) -> Self {
        Self::with_state(service, ProductsState::default())
    }

    /// Create a store starting from `state`.
    pub fn with_state(service: Arc<dyn ProductService>, state: ProductsState) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            service,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProductsState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply an action; see [`ProductsState::apply`].
    pub fn dispatch(&self, action: Action) -> bool {
        self.lock().apply(action)
    }

    /// Apply several actions under one lock.
    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = Action>) {
        let mut state = self.lock();
        for action in actions {
            state.apply(action);
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ProductsState {
        self.lock().clone()
    }

    pub fn status(&self) -> FetchStatus {
        self.lock().status
    }

    /// Fetch the page the current parameters describe.
    ///
    /// Failures are stored in the state, never returned.
    pub async fn fetch(&self) -> FetchOutcome {
        let (seq, request) = {
            let mut state = self.lock();
            let seq = state.latest_seq + 1;
            state.apply(Action::FetchPending { seq });
            (seq, state.request())
        };

        tracing::debug!(
            seq,
            page = request.page,
            keyword = request.keyword.as_deref().unwrap_or(""),
            "fetching products"
        );

        let (action, outcome) = match self.service.fetch_products(&request).await {
            Ok(result) => {
                tracing::debug!(
                    seq,
                    total = result.total,
                    returned = result.items.len(),
                    "products fetched"
                );
                (Action::FetchFulfilled { seq, result }, FetchOutcome::Succeeded)
            }
            Err(e) => {
                tracing::warn!(seq, error = %e, "product fetch failed");
                (
                    Action::FetchRejected {
                        seq,
                        error: e.to_string(),
                    },
                    FetchOutcome::Failed,
                )
            }
        };

        let applied = self.dispatch(action);
        if applied {
            outcome
        } else {
            tracing::debug!(seq, "discarding stale product response");
            FetchOutcome::Stale
        }
    }

    /// Move to `page` and fetch it.
    pub async fn go_to_page(&self, page: usize) -> FetchOutcome {
        self.dispatch(Action::SetPage(page));
        self.fetch().await
    }

    /// Debouncer for keyword input: once typing settles, sets the keyword,
    /// goes back to page 1 and fetches.
    pub fn keyword_debouncer(&self, wait: Duration) -> Debouncer<String> {
        let store = self.clone();
        Debouncer::new(wait, move |keyword: String| {
            let store = store.clone();
            async move {
                store.dispatch_all([Action::SetKeyword(keyword), Action::SetPage(1)]);
                store.fetch().await;
            }
        })
    }
}

impl std::fmt::Debug for ProductsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductsStore")
            .field("state", &*self.lock())
            .finish_non_exhaustive()
    }
}
