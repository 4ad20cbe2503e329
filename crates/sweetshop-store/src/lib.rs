//! Product-list state container for Sweetshop.
//!
//! Holds the current query parameters and the last fetched page, and fetches
//! through any [`ProductService`](sweetshop_catalog::search::ProductService).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sweetshop_catalog::prelude::*;
//! use sweetshop_store::{Action, ProductsStore};
//!
//! let engine = QueryEngine::new(Catalog::generate(&CatalogGenerator::default()));
//! let store = ProductsStore::new(Arc::new(engine));
//!
//! store.dispatch(Action::SetSortOrder(SortOrder::Asc));
//! store.fetch().await;
//! println!("{} products", store.snapshot().total);
//! ```

mod debounce;
mod state;
mod store;

pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use state::{Action, FetchStatus, ProductsState};
pub use store::{FetchOutcome, ProductsStore};
