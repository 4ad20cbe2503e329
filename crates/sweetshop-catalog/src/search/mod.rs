//! Search module.
//!
//! Contains the filter set, query request, results and the in-memory engine.

mod engine;
mod filter;
mod query;
mod results;

pub use engine::{run_query, LatencyProfile, ProductService, QueryEngine};
pub use filter::{FilterField, Filters};
pub use query::{QueryRequest, SortKey, SortOrder, DEFAULT_PAGE_SIZE};
pub use results::{Facet, FacetValue, Pagination, QueryResult};
