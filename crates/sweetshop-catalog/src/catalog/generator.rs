//! Mock catalog generation.
//!
//! Products are composed from small lookup tables. Everything except the
//! price is a function of the product counter, so a seeded RNG and a fixed
//! clock give a fully reproducible catalog.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::catalog::images::ImageResolver;
use crate::catalog::product::{format_timestamp, Product};
use crate::ids::ProductId;

/// Category labels, in asset-index order (index 0 is asset category 1).
pub const CATEGORIES: [&str; 5] = ["Mousse", "Cookie", "Cheese Tart", "Pudding", "Gift Box"];

/// Flavor keys used in asset file names.
pub const FLAVOR_KEYS: [&str; 7] = [
    "Matcha",
    "Chocolate",
    "Strawberry",
    "Almond",
    "Blueberry",
    "Lemon",
    "Fruit",
];

/// Flavor labels shown in titles, parallel to [`FLAVOR_KEYS`].
pub const FLAVOR_LABELS: [&str; 7] = [
    "Matcha",
    "Chocolate",
    "Strawberry",
    "Almond",
    "Blueberry",
    "Lemon",
    "Mixed Fruit",
];

pub const ADJECTIVES: [&str; 7] = [
    "Classic", "Handmade", "French", "Silky", "Rich", "Fresh", "Caramel",
];

pub const TAG_POOL: [&str; 7] = [
    "Handmade",
    "Limited",
    "Matcha",
    "Chocolate",
    "Lemon",
    "Almond",
    "Fruit",
];

pub const BRANDS: [&str; 3] = ["SweetHouse", "HappyBake", "SugarJoy"];

/// The single allergen the generator assigns.
pub const NUT_ALLERGEN: &str = "Nuts";

/// Title removed from the public catalog after generation.
pub const DEFAULT_SENTINEL_TITLE: &str = "Caramel Chocolate Gift Box";

/// Default number of products per category.
pub const DEFAULT_PER_CATEGORY: usize = 6;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Builds the mock product list.
#[derive(Debug, Clone)]
pub struct CatalogGenerator {
    per_category: usize,
    sentinel_title: Option<String>,
    images: ImageResolver,
}

impl Default for CatalogGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PER_CATEGORY)
    }
}

impl CatalogGenerator {
    /// Create a generator producing `per_category` products per category.
    pub fn new(per_category: usize) -> Self {
        Self {
            per_category,
            sentinel_title: Some(DEFAULT_SENTINEL_TITLE.to_string()),
            images: ImageResolver::placeholders_only(),
        }
    }

    /// Set (or clear) the title dropped after generation.
    pub fn with_sentinel_title(mut self, title: Option<String>) -> Self {
        self.sentinel_title = title;
        self
    }

    /// Use the given image resolver for product images.
    pub fn with_images(mut self, images: ImageResolver) -> Self {
        self.images = images;
        self
    }

    pub fn per_category(&self) -> usize {
        self.per_category
    }

    /// Generate using the thread RNG and the current time.
    pub fn generate(&self) -> Vec<Product> {
        self.generate_with(&mut rand::thread_rng(), Utc::now())
    }

    /// Generate with an explicit RNG (prices) and clock (creation times).
    pub fn generate_with<R: Rng>(&self, rng: &mut R, now: DateTime<Utc>) -> Vec<Product> {
        let mut products = Vec::with_capacity(self.per_category * CATEGORIES.len());
        let mut counter: u64 = 1;

        for (ci, category) in CATEGORIES.iter().enumerate() {
            for i in 0..self.per_category {
                products.push(self.build_product(counter, i as u64, ci, category, rng, now));
                counter += 1;
            }
        }

        if let Some(sentinel) = &self.sentinel_title {
            let before = products.len();
            products.retain(|p| &p.title != sentinel);
            if products.len() != before {
                tracing::debug!(
                    title = %sentinel,
                    removed = before - products.len(),
                    "dropped sentinel product"
                );
            }
        }

        products
    }

    fn build_product<R: Rng>(
        &self,
        counter: u64,
        i: u64,
        category_index: usize,
        category: &str,
        rng: &mut R,
        now: DateTime<Utc>,
    ) -> Product {
        let flavor = (i as usize) % FLAVOR_KEYS.len();
        let adjective = ADJECTIVES[((counter + i) as usize) % ADJECTIVES.len()];
        let title = format!("{} {} {}", adjective, FLAVOR_LABELS[flavor], category);

        let images = self
            .images
            .resolve(category_index + 1, FLAVOR_KEYS[flavor], counter);

        let created = now - chrono::Duration::milliseconds(counter as i64 * MILLIS_PER_DAY);

        Product {
            id: ProductId::from_counter(counter),
            description: format!("{} - hand-picked ingredients, baked by hand.", title),
            title,
            price: rng.gen_range(500u32..6500) as f64 / 100.0,
            images,
            brand: BRANDS[(counter as usize) % BRANDS.len()].to_string(),
            category: category.to_string(),
            created_at: format_timestamp(created),
            popularity: None,
            tags: build_tags(counter, i),
            is_gift_box: counter % 4 == 0,
            allergens_exclude: if counter % 6 == 0 {
                vec![NUT_ALLERGEN.to_string()]
            } else {
                Vec::new()
            },
        }
    }
}

/// Tags for the product with the given counter and in-category index.
fn build_tags(counter: u64, i: u64) -> Vec<String> {
    let mix = counter + i;
    let count = 1 + (mix % 3);

    let mut tags: Vec<String> = (0..count)
        .map(|t| TAG_POOL[((counter + t) as usize) % TAG_POOL.len()].to_string())
        .collect();

    if mix % 7 == 0 && !tags.iter().any(|t| t == "Almond") {
        tags.push("Almond".to_string());
    }
    if mix % 5 == 0 && !tags.iter().any(|t| t == "Fruit") {
        tags.push("Fruit".to_string());
    }

    tags
}

/// Generate `per_category` products per category with default settings.
pub fn generate(per_category: usize) -> Vec<Product> {
    CatalogGenerator::new(per_category).generate()
}
