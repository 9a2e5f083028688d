//! Error types for the pagewise crate.
//!
//! List operations never fail; only loading a [`ListViewConfig`] can.
//!
//! [`ListViewConfig`]: crate::ListViewConfig

use thiserror::Error;

/// Errors that can occur when loading list view configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The YAML document could not be parsed.
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document set a page size of zero.
    #[error("page_size must be at least 1")]
    InvalidPageSize,
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;
