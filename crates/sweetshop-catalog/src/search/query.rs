//! Product query request.

use std::fmt;

use crate::catalog::Product;
use crate::search::Filters;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Default page size for product listings.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Field a product listing is sorted by.
///
/// Unknown keys are kept as [`SortKey::Other`]; they project every product to
/// 0, which leaves the filtered order untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    Price,
    CreatedAt,
    Popularity,
    Other(String),
}

impl SortKey {
    pub fn parse(s: &str) -> Self {
        match s {
            "price" => SortKey::Price,
            "createdAt" => SortKey::CreatedAt,
            "popularity" => SortKey::Popularity,
            other => SortKey::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Price => "price",
            SortKey::CreatedAt => "createdAt",
            SortKey::Popularity => "popularity",
            SortKey::Other(s) => s,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            SortKey::Price => "Price",
            SortKey::CreatedAt => "New Arrivals",
            SortKey::Popularity => "Popularity",
            SortKey::Other(s) => s,
        }
    }

    /// Numeric value a product is compared by.
    pub fn project(&self, product: &Product) -> f64 {
        match self {
            SortKey::Price => product.price,
            SortKey::CreatedAt => product.created_at_millis() as f64,
            SortKey::Popularity => product.popularity.unwrap_or(0.0),
            SortKey::Other(_) => 0.0,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        SortKey::parse(s)
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(SortKey::parse(&s))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

}

/// A product listing query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryRequest {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
    /// Sort key; `None` keeps catalog order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<SortKey>,
    pub sort_order: SortOrder,
    pub filters: Filters,
    /// Free-text search over title and description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_key: None,
            sort_order: SortOrder::Desc,
            filters: Filters::default(),
            keyword: None,
        }
    }
}

impl QueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the keyword; blank keywords clear it.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        self.keyword = if keyword.trim().is_empty() {
            None
        } else {
            Some(keyword)
        };
        self
    }

    pub fn with_sort(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_key = Some(key);
        self.sort_order = order;
        self
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_pagination(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Index of the first item on the requested page, `None` for page 0.
    pub fn offset(&self) -> Option<usize> {
        self.page
            .checked_sub(1)
            .map(|p| p.saturating_mul(self.page_size))
    }

    /// The keyword to search for, trimmed and lowercased; `None` when blank.
    pub fn normalized_keyword(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let q = QueryRequest::new();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 12);
        assert_eq!(q.sort_order, SortOrder::Desc);
        assert!(q.sort_key.is_none());
    }

    #[test]
    fn test_builder_and_offset() {
        let q = QueryRequest::new()
            .with_keyword("mousse")
            .with_sort(SortKey::Price, SortOrder::Asc)
            .with_pagination(3, 10);
        assert_eq!(q.offset(), Some(20));
        assert_eq!(q.keyword.as_deref(), Some("mousse"));
        assert_eq!(q.sort_key, Some(SortKey::Price));
    }

    #[test]
    fn test_page_zero_has_no_offset() {
        let q = QueryRequest::new().with_pagination(0, 12);
        assert_eq!(q.offset(), None);
    }

    #[test]
    fn test_blank_keyword_cleared() {
        let q = QueryRequest::new().with_keyword("   ");
        assert!(q.keyword.is_none());
    }

    #[test]
    fn test_normalized_keyword() {
        let q = QueryRequest {
            keyword: Some("  MouSSe ".to_string()),
            ..Default::default()
        };
        assert_eq!(q.normalized_keyword().as_deref(), Some("mousse"));
    }

    #[test]
    fn test_sort_key_parse_round_trip() {
        assert_eq!(SortKey::parse("createdAt"), SortKey::CreatedAt);
        assert_eq!(SortKey::parse("rating"), SortKey::Other("rating".to_string()));
        assert_eq!(SortKey::Other("rating".to_string()).as_str(), "rating");
    }

    #[test]
    fn test_unknown_key_projects_zero() {
        let product = Product::new("1", "x").with_price(20.0);
        assert_eq!(SortKey::Other("weight".to_string()).project(&product), 0.0);
        assert_eq!(SortKey::Price.project(&product), 20.0);
        assert_eq!(SortKey::Popularity.project(&product), 0.0);
    }

    #[test]
    fn test_request_from_partial_json() {
        let q: QueryRequest = serde_json::from_str(
            r#"{"page":2,"sortKey":"price","sortOrder":"asc","filters":{"isGiftBox":true}}"#,
        )
        .unwrap();
        assert_eq!(q.page, 2);
        assert_eq!(q.page_size, 12);
        assert_eq!(q.sort_key, Some(SortKey::Price));
        assert_eq!(q.sort_order, SortOrder::Asc);
        assert_eq!(q.filters.is_gift_box, Some(true));
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(SortOrder::parse("ASC"), Some(SortOrder::Asc));
        assert_eq!(SortOrder::parse("sideways"), None);
    }
}
