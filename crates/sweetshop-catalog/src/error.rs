//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while building or querying the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading image assets or other files failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The product service could not answer the query.
    #[error("Product service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        CatalogError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
