//! Catalog and query configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    CatalogGenerator, ImageResolver, DEFAULT_PER_CATEGORY, DEFAULT_PLACEHOLDER_BASE,
    DEFAULT_SENTINEL_TITLE,
};
use crate::error::CatalogError;
use crate::search::{LatencyProfile, DEFAULT_PAGE_SIZE};

/// How the mock catalog is generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Products generated per category.
    #[serde(default = "default_per_category")]
    pub per_category: usize,

    /// Title dropped from the generated catalog; `None` keeps everything.
    #[serde(default = "default_sentinel_title")]
    pub sentinel_title: Option<String>,

    /// Directory of local product images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,

    /// URL prefix under which `assets_dir` is served.
    #[serde(default = "default_asset_url_prefix")]
    pub asset_url_prefix: String,

    /// Host used for placeholder images.
    #[serde(default = "default_placeholder_base")]
    pub placeholder_base: String,
}

fn default_per_category() -> usize {
    DEFAULT_PER_CATEGORY
}

fn default_sentinel_title() -> Option<String> {
    Some(DEFAULT_SENTINEL_TITLE.to_string())
}

fn default_asset_url_prefix() -> String {
    "/assets/images/products".to_string()
}

fn default_placeholder_base() -> String {
    DEFAULT_PLACEHOLDER_BASE.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            per_category: default_per_category(),
            sentinel_title: default_sentinel_title(),
            assets_dir: None,
            asset_url_prefix: default_asset_url_prefix(),
            placeholder_base: default_placeholder_base(),
        }
    }
}

impl CatalogConfig {
    /// Build the image resolver; reads `assets_dir` when configured.
    pub fn image_resolver(&self) -> Result<ImageResolver, CatalogError> {
        let resolver = match &self.assets_dir {
            Some(dir) => ImageResolver::from_dir(dir, &self.asset_url_prefix)?,
            None => ImageResolver::placeholders_only(),
        };
        Ok(resolver.with_placeholder_base(self.placeholder_base.clone()))
    }

    /// Build a generator with the given image resolver.
    pub fn generator(&self, images: ImageResolver) -> CatalogGenerator {
        CatalogGenerator::new(self.per_category)
            .with_sentinel_title(self.sentinel_title.clone())
            .with_images(images)
    }
}

/// Query engine settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryConfig {
    /// Page size used when a request does not set one.
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Lower bound of the simulated latency.
    #[serde(default = "default_latency_min_ms")]
    pub latency_min_ms: u64,

    /// Upper bound of the simulated latency; 0 disables the delay.
    #[serde(default = "default_latency_max_ms")]
    pub latency_max_ms: u64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_latency_min_ms() -> u64 {
    150
}

fn default_latency_max_ms() -> u64 {
    350
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            latency_min_ms: default_latency_min_ms(),
            latency_max_ms: default_latency_max_ms(),
        }
    }
}

impl QueryConfig {
    pub fn latency(&self) -> LatencyProfile {
        if self.latency_max_ms == 0 {
            LatencyProfile::none()
        } else {
            LatencyProfile::from_millis(self.latency_min_ms, self.latency_max_ms)
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.default_page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        if self.latency_min_ms > self.latency_max_ms && self.latency_max_ms != 0 {
            return Err(CatalogError::InvalidConfig(format!(
                "latency_min_ms ({}) exceeds latency_max_ms ({})",
                self.latency_min_ms, self.latency_max_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let catalog = CatalogConfig::default();
        assert_eq!(catalog.per_category, 6);
        assert_eq!(catalog.sentinel_title.as_deref(), Some(DEFAULT_SENTINEL_TITLE));

        let query = QueryConfig::default();
        assert_eq!(query.default_page_size, 12);
        assert_eq!(query.latency().min, Duration::from_millis(150));
        assert_eq!(query.latency().max, Duration::from_millis(350));
    }

    #[test]
    fn test_partial_toml() {
        let catalog: CatalogConfig = toml::from_str("per_category = 3").unwrap();
        assert_eq!(catalog.per_category, 3);
        assert_eq!(catalog.placeholder_base, DEFAULT_PLACEHOLDER_BASE);

        let query: QueryConfig = toml::from_str("latency_max_ms = 0").unwrap();
        assert!(query.latency().is_none());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let query = QueryConfig {
            default_page_size: 0,
            ..Default::default()
        };
        assert!(matches!(query.validate(), Err(CatalogError::InvalidConfig(_))));
    }

    #[test]
    fn test_generator_from_config() {
        let config = CatalogConfig {
            per_category: 2,
            ..Default::default()
        };
        let images = config.image_resolver().unwrap();
        assert_eq!(images.asset_count(), 0);
        assert_eq!(config.generator(images).per_category(), 2);
    }
}
