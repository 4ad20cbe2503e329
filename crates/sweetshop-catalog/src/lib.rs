//! Dessert catalog and product queries for Sweetshop.
//!
//! This crate provides:
//!
//! - **Catalog**: the product type, a mock generator and image resolution
//! - **Search**: filters, query requests, pagination and an in-memory engine
//!   with simulated network latency
//! - **Config**: serde-backed settings for both
//!
//! # Example
//!
//! ```rust,ignore
//! use sweetshop_catalog::prelude::*;
//!
//! let catalog = Catalog::generate(&CatalogGenerator::default());
//! let engine = QueryEngine::new(catalog).with_latency(LatencyProfile::none());
//!
//! let request = QueryRequest::new()
//!     .with_sort(SortKey::Price, SortOrder::Asc)
//!     .with_filters(Filters::default().with_gift_box(true));
//!
//! let page = engine.query(&request).await;
//! println!("{} gift boxes", page.total);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod search;

pub use error::CatalogError;
pub use ids::ProductId;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ProductId;

    pub use crate::catalog::{Catalog, CatalogGenerator, ImageResolver, Product, ProductSource};
    pub use crate::config::{CatalogConfig, QueryConfig};
    pub use crate::search::{
        run_query, Facet, FacetValue, FilterField, Filters, LatencyProfile, Pagination,
        ProductService, QueryEngine, QueryRequest, QueryResult, SortKey, SortOrder,
    };
}
