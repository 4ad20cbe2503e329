//! Product type.

use crate::ids::ProductId;
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once generated. Queries work on clones, never on the
/// catalog's own storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title (adjective, flavor and category).
    pub title: String,
    /// Listing description.
    pub description: String,
    /// Price in the shop currency, two decimals.
    pub price: f64,
    /// Primary and secondary image URLs.
    pub images: [String; 2],
    /// Brand label.
    pub brand: String,
    /// Category label.
    pub category: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// Popularity score, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    /// Display tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the product is sold as a gift box.
    #[serde(default)]
    pub is_gift_box: bool,
    /// Allergens this product contains, used by exclusion filters.
    #[serde(default)]
    pub allergens_exclude: Vec<String>,
}

impl Product {
    /// Create a product with the given id and title.
    ///
    /// The description mirrors the title, images are empty strings and the
    /// creation time is the Unix epoch. Use the `with_*` methods to fill in
    /// the rest.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            description: title.clone(),
            title,
            price: 0.0,
            images: [String::new(), String::new()],
            brand: String::new(),
            category: String::new(),
            created_at: format_timestamp(DateTime::<Utc>::default()),
            popularity: None,
            tags: Vec::new(),
            is_gift_box: false,
            allergens_exclude: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = Some(popularity);
        self
    }

    pub fn with_gift_box(mut self, is_gift_box: bool) -> Self {
        self.is_gift_box = is_gift_box;
        self
    }

    pub fn with_allergens(mut self, allergens: Vec<String>) -> Self {
        self.allergens_exclude = allergens;
        self
    }

    /// Creation time in epoch milliseconds, or 0 if `created_at` does not parse.
    pub fn created_at_millis(&self) -> i64 {
        parse_timestamp(&self.created_at)
            .map(|dt| dt.timestamp_millis())
            .unwrap_or(0)
    }

    /// The image shown first on a product card.
    pub fn primary_image(&self) -> &str {
        &self.images[0]
    }

    /// The image shown on hover; falls back to the primary one when empty.
    pub fn secondary_image(&self) -> &str {
        if self.images[1].is_empty() {
            &self.images[0]
        } else {
            &self.images[1]
        }
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339, date-times without an offset and plain dates; the last
/// two are taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Format a timestamp the way product records carry it
/// (`2024-05-01T08:30:00.000Z`).
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}
