//! In-memory query engine.
//!
//! Filtering runs in a fixed order over a private copy of the catalog:
//! keyword, category, brand, gift box, allergens. Sorting is stable and only
//! happens when a sort key is given; pagination slices the sorted list.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use rand::Rng;

use crate::catalog::{Product, ProductSource};
use crate::error::CatalogError;
use crate::search::{QueryRequest, QueryResult, SortOrder};

/// Artificial latency applied before answering a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    /// Shortest delay.
    pub min: Duration,
    /// Longest delay.
    pub max: Duration,
}

impl LatencyProfile {
    /// Create a profile; `min` and `max` are swapped if given backwards.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn from_millis(min: u64, max: u64) -> Self {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    pub fn is_none(&self) -> bool {
        self.max.is_zero()
    }

    /// Draw a delay uniformly from `[min, max]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let min = self.min.as_micros() as u64;
        let max = self.max.as_micros() as u64;
        Duration::from_micros(rng.gen_range(min..=max))
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::from_millis(150, 350)
    }
}

/// Filter, sort and paginate `products` according to `request`.
///
/// Total over its inputs: unknown sort keys, page 0 and pages past the end
/// all produce a well-formed (possibly empty) result.
pub fn run_query(mut products: Vec<Product>, request: &QueryRequest) -> QueryResult {
    if let Some(keyword) = request.normalized_keyword() {
        products.retain(|p| {
            p.title.to_lowercase().contains(&keyword)
                || p.description.to_lowercase().contains(&keyword)
        });
    }

    let filters = request.filters.compile();
    products.retain(|p| filters.matches_category(p));
    products.retain(|p| filters.matches_brand(p));
    products.retain(|p| filters.matches_gift_box(p));
    products.retain(|p| filters.matches_allergens(p));

    if let Some(key) = &request.sort_key {
        let order = request.sort_order;
        products.sort_by(|a, b| {
            let (av, bv) = (key.project(a), key.project(b));
            match order {
                SortOrder::Asc => av.total_cmp(&bv),
                SortOrder::Desc => bv.total_cmp(&av),
            }
        });
    }

    let total = products.len();
    let items = match request.offset() {
        Some(start) if start < total => {
            let end = start.saturating_add(request.page_size).min(total);
            products.drain(start..end).collect()
        }
        _ => Vec::new(),
    };

    QueryResult { items, total }
}

/// Asynchronous product listing service.
///
/// This is the seam the products store fetches through.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// Answer a listing query.
    async fn fetch_products(&self, request: &QueryRequest) -> Result<QueryResult, CatalogError>;
}

#[async_trait]
impl<T: ProductService + ?Sized> ProductService for Arc<T> {
    async fn fetch_products(&self, request: &QueryRequest) -> Result<QueryResult, CatalogError> {
        (**self).fetch_products(request).await
    }
}

/// Query engine over an injected product source.
#[derive(Debug, Clone)]
pub struct QueryEngine<S> {
    source: S,
    latency: LatencyProfile,
}

impl<S: ProductSource> QueryEngine<S> {
    /// Create an engine with the default simulated latency.
    pub fn new(source: S) -> Self {
        Self {
            source,
            latency: LatencyProfile::default(),
        }
    }

    pub fn with_latency(mut self, latency: LatencyProfile) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }

    /// Run a query without any delay.
    pub fn query_now(&self, request: &QueryRequest) -> QueryResult {
        let started = Instant::now();
        let result = run_query(self.source.snapshot(), request);
        tracing::debug!(
            keyword = request.keyword.as_deref().unwrap_or(""),
            sort_key = request.sort_key.as_ref().map(|k| k.as_str()).unwrap_or("none"),
            sort_order = request.sort_order.as_str(),
            page = request.page,
            page_size = request.page_size,
            total = result.total,
            returned = result.items.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "product query"
        );
        result
    }

    /// Run a query after the simulated network delay.
    pub async fn query(&self, request: &QueryRequest) -> QueryResult {
        if !self.latency.is_none() {
            let delay = self.latency.sample(&mut rand::thread_rng());
            tokio::time::sleep(delay).await;
        }
        self.query_now(request)
    }
}

#[async_trait]
impl<S: ProductSource> ProductService for QueryEngine<S> {
    async fn fetch_products(&self, request: &QueryRequest) -> Result<QueryResult, CatalogError> {
        Ok(self.query(request).await)
    }
}
