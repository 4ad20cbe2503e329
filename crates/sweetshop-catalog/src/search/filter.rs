//! Product filter set.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Conjunctive field filters.
///
/// Every field that is present narrows the result; an empty list or `None`
/// imposes no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    /// Keep products whose category is one of these (exact, trimmed).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    /// Keep products whose brand is one of these.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brand: Vec<String>,
    /// Keep only gift boxes (`true`) or only non-gift boxes (`false`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_gift_box: Option<bool>,
    /// Drop products containing any of these allergens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergens_exclude: Vec<String>,
}

/// A single-field filter update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum FilterField {
    Categories(Vec<String>),
    Brand(Vec<String>),
    IsGiftBox(Option<bool>),
    AllergensExclude(Vec<String>),
}

impl Filters {
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_brands(mut self, brands: Vec<String>) -> Self {
        self.brand = brands;
        self
    }

    pub fn with_gift_box(mut self, is_gift_box: bool) -> Self {
        self.is_gift_box = Some(is_gift_box);
        self
    }

    pub fn with_allergens_excluded(mut self, allergens: Vec<String>) -> Self {
        self.allergens_exclude = allergens;
        self
    }

    /// Replace one field.
    pub fn apply(&mut self, field: FilterField) {
        match field {
            FilterField::Categories(v) => self.categories = v,
            FilterField::Brand(v) => self.brand = v,
            FilterField::IsGiftBox(v) => self.is_gift_box = v,
            FilterField::AllergensExclude(v) => self.allergens_exclude = v,
        }
    }

    /// Whether no field constrains the result.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.brand.is_empty()
            && self.is_gift_box.is_none()
            && self.allergens_exclude.is_empty()
    }

    /// Number of selected filter values, as shown on the filter button badge.
    pub fn active_count(&self) -> usize {
        self.categories.len()
            + self.brand.len()
            + self.allergens_exclude.len()
            + usize::from(self.is_gift_box.is_some())
    }

    /// Whether `product` passes every present filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.compile().matches(product)
    }

    /// Pre-trim the requested values once for a whole filtering pass.
    pub(crate) fn compile(&self) -> CompiledFilters {
        CompiledFilters {
            categories: trimmed(&self.categories),
            brands: trimmed(&self.brand),
            is_gift_box: self.is_gift_box,
            allergens: trimmed(&self.allergens_exclude),
        }
    }
}

fn trimmed(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.trim().to_string()).collect()
}

/// Filters with requested values already trimmed.
#[derive(Debug, Clone)]
pub(crate) struct CompiledFilters {
    categories: Vec<String>,
    brands: Vec<String>,
    is_gift_box: Option<bool>,
    allergens: Vec<String>,
}

impl CompiledFilters {
    pub(crate) fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| c == product.category.trim())
    }

    // Product brands are compared untrimmed.
    pub(crate) fn matches_brand(&self, product: &Product) -> bool {
        self.brands.is_empty() || self.brands.contains(&product.brand)
    }

    pub(crate) fn matches_gift_box(&self, product: &Product) -> bool {
        self.is_gift_box.map_or(true, |g| product.is_gift_box == g)
    }

    pub(crate) fn matches_allergens(&self, product: &Product) -> bool {
        self.allergens.is_empty()
            || !product
                .allergens_exclude
                .iter()
                .any(|a| self.allergens.contains(a))
    }

    pub(crate) fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_brand(product)
            && self.matches_gift_box(product)
            && self.matches_allergens(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new("6", "Fresh Lemon Cookie")
            .with_category(" Cookie ")
            .with_brand("SweetHouse")
            .with_allergens(vec!["Nuts".to_string()])
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let filters = Filters::default();
        assert!(filters.is_empty());
        assert!(filters.matches(&product()));
    }

    #[test]
    fn test_category_trimmed_on_both_sides() {
        let filters = Filters::default().with_categories(vec!["Cookie  ".to_string()]);
        assert!(filters.matches(&product()));
    }

    #[test]
    fn test_brand_compares_product_side_untrimmed() {
        let filters = Filters::default().with_brands(vec![" SweetHouse".to_string()]);
        assert!(filters.matches(&product()));

        let spaced = product().with_brand("SweetHouse ");
        assert!(!filters.matches(&spaced));
    }

    #[test]
    fn test_gift_box_equality() {
        assert!(!Filters::default().with_gift_box(true).matches(&product()));
        assert!(Filters::default().with_gift_box(false).matches(&product()));
    }

    #[test]
    fn test_allergen_exclusion() {
        let filters = Filters::default().with_allergens_excluded(vec!["Nuts".to_string()]);
        assert!(!filters.matches(&product()));

        let filters = Filters::default().with_allergens_excluded(vec!["Dairy".to_string()]);
        assert!(filters.matches(&product()));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let filters = Filters::default()
            .with_categories(vec!["Cookie".to_string()])
            .with_brands(vec!["HappyBake".to_string()]);
        assert!(!filters.matches(&product()));
    }

    #[test]
    fn test_apply_single_field() {
        let mut filters = Filters::default().with_categories(vec!["Mousse".to_string()]);
        filters.apply(FilterField::IsGiftBox(Some(true)));
        filters.apply(FilterField::Categories(Vec::new()));
        assert_eq!(filters, Filters::default().with_gift_box(true));
    }

    #[test]
    fn test_active_count() {
        let filters = Filters::default()
            .with_categories(vec!["Mousse".to_string(), "Pudding".to_string()])
            .with_gift_box(false);
        assert_eq!(filters.active_count(), 3);
    }

    #[test]
    fn test_filter_field_wire_shape() {
        let field: FilterField =
            serde_json::from_str(r#"{"key":"isGiftBox","value":true}"#).unwrap();
        assert_eq!(field, FilterField::IsGiftBox(Some(true)));
    }
}
