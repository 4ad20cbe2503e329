//! Query results, pagination and facets.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One page of a product query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QueryResult {
    /// The page slice, in sorted order.
    pub items: Vec<Product>,
    /// Number of products matching the filters, before pagination.
    pub total: usize,
}

impl QueryResult {
    pub fn new(items: Vec<Product>, total: usize) -> Self {
        Self { items, total }
    }

    /// Create empty results.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pagination info for the page this result was requested as.
    pub fn pagination(&self, page: usize, page_size: usize) -> Pagination {
        Pagination::new(page, page_size, self.total)
    }
}

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages (at least 1).
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let total_pages = if total == 0 || page_size == 0 {
            1
        } else {
            total.div_ceil(page_size)
        };

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Get start item number (1-indexed), 0 for an empty page.
    pub fn start_item(&self) -> usize {
        if self.total == 0 || self.page == 0 || self.start_index() >= self.total {
            0
        } else {
            self.start_index() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        if self.start_item() == 0 {
            0
        } else {
            self.page.saturating_mul(self.page_size).min(self.total)
        }
    }

    fn start_index(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, crate::search::DEFAULT_PAGE_SIZE, 0)
    }
}

/// A facet for the filter drawer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Facet {
    /// Facet name (e.g., "Category").
    pub name: String,
    /// Filter field this facet drives.
    pub field: String,
    /// Values in order of first appearance.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create a new terms facet.
    pub fn terms(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Count one occurrence of `value`.
    pub fn count_value(&mut self, value: &str) {
        match self.values.iter_mut().find(|v| v.value == value) {
            Some(existing) => existing.count += 1,
            None => self.values.push(FacetValue {
                value: value.to_string(),
                count: 1,
                selected: false,
            }),
        }
    }

    /// Mark the values present in `selected` (compared trimmed).
    pub fn mark_selected(&mut self, selected: &[String]) {
        for v in &mut self.values {
            v.selected = selected.iter().any(|s| s.trim() == v.value);
        }
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetValue {
    pub value: String,
    /// Number of products with this value.
    pub count: usize,
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 41);
        assert_eq!(p.end_item(), 45);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 12, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 0);
    }

    #[test]
    fn test_pagination_past_the_end() {
        let p = Pagination::new(9, 12, 29);
        assert_eq!(p.start_item(), 0);
        assert!(!p.has_next);
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(1, 10, 100);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3, 4, 5]);

        let p = Pagination::new(10, 10, 100);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_result_pagination() {
        let result = QueryResult::new(Vec::new(), 29);
        let p = result.pagination(3, 12);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.start_item(), 25);
        assert_eq!(p.end_item(), 29);
    }

    #[test]
    fn test_facet_counting() {
        let mut facet = Facet::terms("Brand", "brand");
        facet.count_value("SugarJoy");
        facet.count_value("HappyBake");
        facet.count_value("SugarJoy");
        facet.mark_selected(&[" HappyBake".to_string()]);

        assert_eq!(facet.values[0].count, 2);
        assert!(!facet.values[0].selected);
        assert!(facet.values[1].selected);
    }
}
