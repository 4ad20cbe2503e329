//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sweetshop_catalog::config::{CatalogConfig, QueryConfig};
use sweetshop_observability::LoggingConfig;

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog generation.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Query engine settings.
    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config = Self::parse(path, &content)?;
        config
            .query
            .validate()
            .with_context(|| format!("Invalid [query] section in {}", path))?;
        Ok(config)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweetshop_observability::{LogFormat, LogLevel};

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = StorefrontConfig::parse("sweetshop.toml", "").unwrap();
        assert_eq!(config.catalog, CatalogConfig::default());
        assert_eq!(config.query, QueryConfig::default());
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_toml_sections() {
        let toml = r#"
            [catalog]
            per_category = 4
            sentinel_title = "Rich Lemon Cookie"

            [query]
            latency_max_ms = 0

            [logging]
            level = "info"
            format = "json"
        "#;
        let config = StorefrontConfig::parse("sweetshop.toml", toml).unwrap();
        assert_eq!(config.catalog.per_category, 4);
        assert_eq!(config.catalog.sentinel_title.as_deref(), Some("Rich Lemon Cookie"));
        assert!(config.query.latency().is_none());
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_json_by_extension() {
        let json = r#"{ "query": { "default_page_size": 6 } }"#;
        let config = StorefrontConfig::parse("sweetshop.json", json).unwrap();
        assert_eq!(config.query.default_page_size, 6);
        assert!(StorefrontConfig::parse("sweetshop.toml", json).is_err());
    }
}
