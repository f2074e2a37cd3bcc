//! Configuration module for pget
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so an empty file (or no file)
//! is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use pget::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("pget.toml")).unwrap();
//! println!("Request timeout: {}s", config.http.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, CrawlMode, HttpConfig, OutputConfig};

// Re-export parser functions
pub use parser::{load_config, load_or_default, parse_config};
pub use validation::validate;
