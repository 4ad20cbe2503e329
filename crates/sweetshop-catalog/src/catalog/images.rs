//! Product image resolution.
//!
//! Local assets are named `<categoryIndex>-<FlavorKey>[-1|-2].<ext>`, e.g.
//! `1-Matcha.jpg` or `3-Lemon-2.webp`. A product whose assets are missing
//! gets seeded placeholder images instead, so every product always carries
//! two URLs.

use std::collections::HashMap;
use std::path::Path;

use crate::error::CatalogError;

/// Default placeholder image host.
pub const DEFAULT_PLACEHOLDER_BASE: &str = "https://picsum.photos";

/// Extensions picked up by [`ImageResolver::from_dir`].
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

const PLACEHOLDER_WIDTH: u32 = 1200;
const PLACEHOLDER_HEIGHT: u32 = 900;

/// Maps asset names (file stems) to URLs, with placeholder fallback.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    assets: HashMap<String, String>,
    placeholder_base: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::placeholders_only()
    }
}

impl ImageResolver {
    /// A resolver with no local assets; every lookup yields a placeholder.
    pub fn placeholders_only() -> Self {
        Self {
            assets: HashMap::new(),
            placeholder_base: DEFAULT_PLACEHOLDER_BASE.to_string(),
        }
    }

    /// Build a resolver from an explicit name → URL table.
    pub fn from_table(assets: HashMap<String, String>) -> Self {
        Self {
            assets,
            placeholder_base: DEFAULT_PLACEHOLDER_BASE.to_string(),
        }
    }

    /// Scan `dir` for image files and map each file stem to
    /// `<url_prefix>/<file name>`.
    pub fn from_dir(dir: impl AsRef<Path>, url_prefix: &str) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let entries =
            std::fs::read_dir(dir).map_err(|e| CatalogError::io(dir.display().to_string(), e))?;

        let prefix = url_prefix.trim_end_matches('/');
        let mut assets = HashMap::new();

        for entry in entries {
            let entry = entry.map_err(|e| CatalogError::io(dir.display().to_string(), e))?;
            let path = entry.path();

            let is_image = path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if !is_image {
                continue;
            }

            let (Some(stem), Some(file_name)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.file_name().and_then(|s| s.to_str()),
            ) else {
                continue;
            };

            assets.insert(stem.to_string(), format!("{}/{}", prefix, file_name));
        }

        tracing::debug!(dir = %dir.display(), count = assets.len(), "loaded product image assets");
        Ok(Self::from_table(assets))
    }

    /// Use a different placeholder host.
    pub fn with_placeholder_base(mut self, base: impl Into<String>) -> Self {
        self.placeholder_base = base.into();
        self
    }

    /// Number of known local assets.
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }

    /// Resolve the (primary, secondary) images for a product.
    ///
    /// `category_index` is 1-based, `flavor_key` is the asset flavor name and
    /// `seed` is used to build placeholder URLs (the product counter).
    pub fn resolve(&self, category_index: usize, flavor_key: &str, seed: u64) -> [String; 2] {
        let base = format!("{}-{}", category_index, flavor_key);

        let primary = self
            .lookup(&base)
            .or_else(|| self.lookup(&format!("{}-1", base)))
            .unwrap_or_else(|| self.placeholder(seed, 1));

        let secondary = self
            .lookup(&format!("{}-2", base))
            .or_else(|| self.lookup(&base))
            .unwrap_or_else(|| self.placeholder(seed, 2));

        [primary, secondary]
    }

    fn lookup(&self, name: &str) -> Option<String> {
        self.assets.get(name).cloned()
    }

    /// Placeholder URL for the `slot`th image of product `seed`.
    pub fn placeholder(&self, seed: u64, slot: u8) -> String {
        format!(
            "{}/seed/dessert-{}-{}/{}/{}",
            self.placeholder_base.trim_end_matches('/'),
            seed,
            slot,
            PLACEHOLDER_WIDTH,
            PLACEHOLDER_HEIGHT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> ImageResolver {
        ImageResolver::from_table(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_placeholders_when_no_assets() {
        let resolver = ImageResolver::placeholders_only();
        let [primary, secondary] = resolver.resolve(1, "Matcha", 7);
        assert_eq!(primary, "https://picsum.photos/seed/dessert-7-1/1200/900");
        assert_eq!(secondary, "https://picsum.photos/seed/dessert-7-2/1200/900");
    }

    #[test]
    fn test_base_asset_serves_both_slots() {
        let resolver = table(&[("2-Lemon", "/img/2-Lemon.jpg")]);
        let images = resolver.resolve(2, "Lemon", 1);
        assert_eq!(images, ["/img/2-Lemon.jpg".to_string(), "/img/2-Lemon.jpg".to_string()]);
    }

    #[test]
    fn test_numbered_assets() {
        let resolver = table(&[
            ("3-Almond-1", "/img/a1.png"),
            ("3-Almond-2", "/img/a2.png"),
        ]);
        let [primary, secondary] = resolver.resolve(3, "Almond", 1);
        assert_eq!(primary, "/img/a1.png");
        assert_eq!(secondary, "/img/a2.png");
    }

    #[test]
    fn test_only_secondary_asset() {
        let resolver = table(&[("1-Fruit-2", "/img/f2.webp")]);
        let [primary, secondary] = resolver.resolve(1, "Fruit", 9);
        assert_eq!(primary, "https://picsum.photos/seed/dessert-9-1/1200/900");
        assert_eq!(secondary, "/img/f2.webp");
    }

    #[test]
    fn test_custom_placeholder_base() {
        let resolver =
            ImageResolver::placeholders_only().with_placeholder_base("http://cdn.local/");
        assert_eq!(resolver.placeholder(3, 2), "http://cdn.local/seed/dessert-3-2/1200/900");
    }

    #[test]
    fn test_from_dir_picks_up_images_only() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        std::fs::write(dir.join("1-Matcha.jpg"), b"").unwrap();
        std::fs::write(dir.join("1-Matcha-2.WEBP"), b"").unwrap();
        std::fs::write(dir.join("notes.txt"), b"").unwrap();

        let resolver = ImageResolver::from_dir(dir, "/assets/").unwrap();
        assert_eq!(resolver.asset_count(), 2);
        let [primary, secondary] = resolver.resolve(1, "Matcha", 1);
        assert_eq!(primary, "/assets/1-Matcha.jpg");
        assert_eq!(secondary, "/assets/1-Matcha-2.WEBP");
    }

    #[test]
    fn test_from_missing_dir_is_error() {
        let err = ImageResolver::from_dir("/definitely/not/here", "/assets").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
