// src/error.rs

//! Unified error handling for the site directory.

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Result type alias for site directory operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// A load-bearing page element is missing
    #[error("Missing '{element}' in page {url}")]
    Structure { url: String, element: String },

    /// The cache file exists but cannot be parsed
    #[error("Corrupt cache file {path}: {message}")]
    CacheCorrupt { path: String, message: String },

    /// A cached value does not have the expected shape
    #[error("Corrupt cache entry '{key}': {message}")]
    CacheEntry { key: String, message: String },

    /// Key outside the URL / postal code key space
    #[error("Invalid cache key '{key}': {message}")]
    InvalidKey { key: String, message: String },

    /// Region name not present in the state index
    #[error("Unknown state: {0}")]
    UnknownRegion(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a missing-element error for a page.
    pub fn structure(url: impl Into<String>, element: impl Into<String>) -> Self {
        Self::Structure {
            url: url.into(),
            element: element.into(),
        }
    }

    /// Create a non-success status error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }

    /// Create a corrupt cache file error.
    pub fn cache_corrupt(path: &Path, message: impl fmt::Display) -> Self {
        Self::CacheCorrupt {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a corrupt cache entry error.
    pub fn cache_entry(key: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::CacheEntry {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Create an invalid key error.
    pub fn invalid_key(key: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::InvalidKey {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether the error came from the network layer.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}
