//! Product-list state and its reducer.

use serde::Serialize;
use sweetshop_catalog::catalog::Product;
use sweetshop_catalog::search::{
    FilterField, Filters, QueryRequest, QueryResult, SortKey, SortOrder, DEFAULT_PAGE_SIZE,
};

/// Where the last fetch stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl FetchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStatus::Idle => "idle",
            FetchStatus::Loading => "loading",
            FetchStatus::Succeeded => "succeeded",
            FetchStatus::Failed => "failed",
        }
    }
}

/// State changes the product list understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetPage(usize),
    SetPageSize(usize),
    SetSortKey(Option<SortKey>),
    SetSortOrder(SortOrder),
    SetFilters(Filters),
    /// Replace a single filter field.
    UpdateFilterField(FilterField),
    SetKeyword(String),
    ClearFilters,
    SetFeaturedIndex(usize),
    /// Advance the featured pointer, wrapping at the end of the page.
    IncFeaturedIndex,
    /// A fetch tagged `seq` was issued.
    FetchPending { seq: u64 },
    /// The fetch tagged `seq` answered.
    FetchFulfilled { seq: u64, result: QueryResult },
    /// The fetch tagged `seq` failed.
    FetchRejected { seq: u64, error: String },
}

/// Query parameters plus the last fetched page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsState {
    pub items: Vec<Product>,
    pub total: usize,
    pub status: FetchStatus,
    pub error: Option<String>,

    pub page: usize,
    pub page_size: usize,
    pub sort_key: Option<SortKey>,
    pub sort_order: SortOrder,
    pub filters: Filters,
    pub keyword: String,

    /// Index into `items` of the highlighted product.
    pub featured_index: usize,

    /// Sequence number of the most recently issued fetch.
    #[serde(skip)]
    pub latest_seq: u64,
}

impl Default for ProductsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            status: FetchStatus::Idle,
            error: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_key: Some(SortKey::Price),
            sort_order: SortOrder::Desc,
            filters: Filters::default(),
            keyword: String::new(),
            featured_index: 0,
            latest_seq: 0,
        }
    }
}

impl ProductsState {
    /// Start with a different page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Apply an action.
    ///
    /// Returns `false` only for fetch completions that are not for the most
    /// recently issued fetch; those leave the state untouched.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::SetPage(page) => self.page = page,
            Action::SetPageSize(page_size) => self.page_size = page_size,
            Action::SetSortKey(key) => self.sort_key = key,
            Action::SetSortOrder(order) => self.sort_order = order,
            Action::SetFilters(filters) => self.filters = filters,
            Action::UpdateFilterField(field) => self.filters.apply(field),
            Action::SetKeyword(keyword) => self.keyword = keyword,
            Action::ClearFilters => self.filters = Filters::default(),
            Action::SetFeaturedIndex(index) => self.featured_index = index,
            Action::IncFeaturedIndex => {
                self.featured_index = if self.items.is_empty() {
                    0
                } else {
                    (self.featured_index + 1) % self.items.len()
                };
            }
            Action::FetchPending { seq } => {
                self.status = FetchStatus::Loading;
                self.error = None;
                self.latest_seq = seq;
            }
            Action::FetchFulfilled { seq, result } => {
                if seq != self.latest_seq {
                    return false;
                }
                self.status = FetchStatus::Succeeded;
                self.items = result.items;
                self.total = result.total;
                self.error = None;
                if self.featured_index >= self.items.len() {
                    self.featured_index = 0;
                }
            }
            Action::FetchRejected { seq, error } => {
                if seq != self.latest_seq {
                    return false;
                }
                self.status = FetchStatus::Failed;
                self.error = Some(error);
            }
        }
        true
    }

    /// The query the current parameters describe.
    pub fn request(&self) -> QueryRequest {
        QueryRequest {
            page: self.page,
            page_size: self.page_size,
            sort_key: self.sort_key.clone(),
            sort_order: self.sort_order,
            filters: self.filters.clone(),
            keyword: None,
        }
        .with_keyword(self.keyword.clone())
    }

    /// The highlighted product, if the page has any.
    pub fn featured(&self) -> Option<&Product> {
        self.items.get(self.featured_index)
    }
}
