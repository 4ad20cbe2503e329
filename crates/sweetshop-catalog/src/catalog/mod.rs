//! Product catalog module.
//!
//! Contains the product type, the mock generator, image resolution and the
//! read-only catalog data source.

mod generator;
mod images;
mod product;
mod source;

pub use generator::{
    generate, CatalogGenerator, ADJECTIVES, BRANDS, CATEGORIES, DEFAULT_PER_CATEGORY,
    DEFAULT_SENTINEL_TITLE, FLAVOR_KEYS, FLAVOR_LABELS, NUT_ALLERGEN, TAG_POOL,
};
pub use images::{ImageResolver, DEFAULT_PLACEHOLDER_BASE};
pub use product::{format_timestamp, parse_timestamp, Product};
pub use source::{Catalog, ProductSource};
