//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use sweetshop_catalog::catalog::{Catalog, ImageResolver};
use sweetshop_catalog::search::{LatencyProfile, QueryEngine};

use crate::config::StorefrontConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["sweetshop.toml", ".sweetshop.toml", "sweetshop.json"];

/// Execution context for CLI commands.
pub struct Context {
    pub config: StorefrontConfig,
    pub output: Output,
    /// Config file in use, if one was found.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        if let Some(path) = config_path {
            let config = StorefrontConfig::load(path)?;
            return Ok(Self {
                config,
                output,
                config_path: Some(PathBuf::from(path)),
            });
        }

        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        let (config, config_path) = match Self::find_config(&cwd) {
            Some(path) => {
                let config = StorefrontConfig::load(&path.to_string_lossy())?;
                (config, Some(path))
            }
            None => (StorefrontConfig::default(), None),
        };

        Ok(Self {
            config,
            output,
            config_path,
        })
    }

    /// Find the nearest config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let candidate = current.join(name);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Generate the catalog. An unreadable assets directory falls back to
    /// placeholder images.
    pub fn catalog(&self) -> Catalog {
        let images = match self.config.catalog.image_resolver() {
            Ok(images) => images,
            Err(e) => {
                self.output.warn(&format!("{}; using placeholder images", e));
                ImageResolver::placeholders_only()
                    .with_placeholder_base(self.config.catalog.placeholder_base.clone())
            }
        };
        self.output.debug(&format!("{} local image(s) indexed", images.asset_count()));

        Catalog::generate(&self.config.catalog.generator(images))
    }

    /// Build the query engine over a freshly generated catalog.
    pub fn engine(&self, instant: bool) -> QueryEngine<Catalog> {
        let latency = if instant {
            LatencyProfile::none()
        } else {
            self.config.query.latency()
        };
        QueryEngine::new(self.catalog()).with_latency(latency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.join(".sweetshop.toml"), "").unwrap();

        let found = Context::find_config(&nested).unwrap();
        assert_eq!(found, root.join(".sweetshop.toml"));
    }
}
