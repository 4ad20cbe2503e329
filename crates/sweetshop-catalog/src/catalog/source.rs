//! Read-only catalog data source.

use std::sync::Arc;

use crate::catalog::generator::CatalogGenerator;
use crate::catalog::product::Product;
use crate::search::{Facet, Filters};

/// Something that can hand out a private copy of its products.
///
/// The query engine filters and sorts the copy in place; implementations must
/// never expose their own storage mutably.
pub trait ProductSource: Send + Sync {
    /// A fresh copy of every product, in catalog order.
    fn snapshot(&self) -> Vec<Product>;
}

/// The generated, immutable product list.
///
/// Cloning is cheap; all clones share the same storage.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Wrap an explicit product list (fixtures, imports).
    pub fn from_products(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// Generate a catalog with the given generator.
    pub fn generate(generator: &CatalogGenerator) -> Self {
        let catalog = Self::from_products(generator.generate());
        tracing::info!(
            products = catalog.len(),
            per_category = generator.per_category(),
            "catalog generated"
        );
        catalog
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Borrow the products.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Category and brand facets over the whole catalog, with the values
    /// selected in `filters` marked.
    pub fn facets(&self, filters: &Filters) -> Vec<Facet> {
        let mut categories = Facet::terms("Category", "categories");
        let mut brands = Facet::terms("Brand", "brand");

        for product in self.products.iter() {
            categories.count_value(product.category.trim());
            brands.count_value(&product.brand);
        }

        categories.mark_selected(&filters.categories);
        brands.mark_selected(&filters.brand);

        vec![categories, brands]
    }
}

impl ProductSource for Catalog {
    fn snapshot(&self) -> Vec<Product> {
        self.products.to_vec()
    }
}

impl<S: ProductSource + ?Sized> ProductSource for Arc<S> {
    fn snapshot(&self) -> Vec<Product> {
        (**self).snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Catalog {
        Catalog::from_products(vec![
            Product::new("1", "Classic Matcha Mousse")
                .with_category("Mousse")
                .with_brand("HappyBake"),
            Product::new("2", "French Lemon Cookie")
                .with_category("Cookie")
                .with_brand("SugarJoy"),
            Product::new("3", "Rich Almond Mousse")
                .with_category("Mousse")
                .with_brand("HappyBake"),
        ])
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let catalog = fixture();
        let mut copy = catalog.snapshot();
        copy.clear();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_facets_count_and_mark_selected() {
        let catalog = fixture();
        let filters = Filters::default().with_categories(vec!["Mousse".to_string()]);
        let facets = catalog.facets(&filters);

        let categories = &facets[0];
        assert_eq!(categories.field, "categories");
        assert_eq!(categories.values[0].value, "Mousse");
        assert_eq!(categories.values[0].count, 2);
        assert!(categories.values[0].selected);
        assert!(!categories.values[1].selected);

        let brands = &facets[1];
        assert_eq!(brands.values.len(), 2);
        assert!(brands.values.iter().all(|v| !v.selected));
    }

    #[test]
    fn test_facet_values_in_first_appearance_order() {
        let facets = fixture().facets(&Filters::default());
        let categories: Vec<(&str, usize)> = facets[0]
            .values
            .iter()
            .map(|v| (v.value.as_str(), v.count))
            .collect();
        assert_eq!(categories, vec![("Mousse", 2), ("Cookie", 1)]);
        assert_eq!(facets[1].values[0].value, "HappyBake");
    }

    #[test]
    fn test_generated_catalog() {
        let catalog = Catalog::generate(&CatalogGenerator::new(2));
        assert_eq!(catalog.len(), 10);
    }
}
