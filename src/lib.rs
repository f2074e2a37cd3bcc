//! pget: download numbered resource sequences
//!
//! This crate finds a numeric index embedded in a URL (file name, query string
//! or path), infers its zero-padding, and walks the sequence in both directions
//! until the first missing resource.

pub mod config;
pub mod crawler;
pub mod index;
pub mod output;
pub mod state;
pub mod storage;
pub mod url;

use thiserror::Error;

/// Main error type for pget operations
#[derive(Debug, Error)]
pub enum PgetError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),

    #[error("Index \"{digits}\" is not a valid number: {source}")]
    Parse {
        digits: String,
        source: std::num::ParseIntError,
    },

    #[error("HTTP error for {url}: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Resource \"{url}\" not found")]
    NotFound { url: String, status: Option<u16> },

    #[error("Storage error: {0}")]
    Persistence(#[from] storage::StorageError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Crawler task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while locating the index inside a URL
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Malformed URL \"{url}\": {reason}")]
    Malformed { url: String, reason: String },

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("No pattern detected in \"{0}\"")]
    NoPatternFound(String),
}

/// Result type alias for pget operations
pub type Result<T> = std::result::Result<T, PgetError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{dual_crawl, start_crawl, Direction};
pub use index::{resolve, IndexFormat, ResolvedIndex};
pub use output::{CrawlResult, CrawlSummary};
pub use state::{CrawlState, StopReason};
pub use crate::url::{find_pattern, Pattern};
