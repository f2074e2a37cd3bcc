//! URL handling module for pget
//!
//! This module locates the numeric index inside a seed URL and turns the URL
//! into a `Pattern`: the text before the index, the index digits, and the text
//! after them.

mod matcher;
mod raw;
mod strategy;

use crate::{UrlError, UrlResult};
use std::fmt;
use strategy::STRATEGIES;

// Re-export main functions
pub use matcher::{extract_index, IndexMatch};
pub use raw::RawUrl;

/// Which part of the URL the index was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternLocation {
    /// Final path segment, e.g. `pic_023.jpg`
    FileName,
    /// Query string, e.g. `?page=5`
    Query,
    /// Anywhere in the path, e.g. `/chapter/12/`
    Path,
}

impl fmt::Display for PatternLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FileName => "file name",
            Self::Query => "query string",
            Self::Path => "path",
        };
        write!(f, "{}", name)
    }
}

/// A URL template parameterized by a single numeric index
///
/// `prefix + matched + suffix` is the URL the pattern was extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// Everything before the index, including scheme and host
    pub prefix: String,
    /// The index digits exactly as found
    pub matched: String,
    /// Everything after the index, including any query string
    pub suffix: String,
    /// Where the index was found
    pub location: PatternLocation,
}

impl Pattern {
    /// Builds the URL for an already formatted index
    pub fn url_for(&self, index: &str) -> String {
        format!("{}{}{}", self.prefix, index, self.suffix)
    }

    /// The URL this pattern was extracted from
    pub fn seed_url(&self) -> String {
        self.url_for(&self.matched)
    }
}

/// Finds the numeric index in a URL
///
/// The candidates are tried in this order, first match wins:
/// 1. The file name (final path segment)
/// 2. The raw query string
/// 3. The full path
///
/// Within a candidate the last run of digits is the index.
///
/// # Arguments
///
/// * `url_str` - The seed URL; surrounding whitespace is ignored
///
/// # Returns
///
/// * `Ok(Pattern)` - The URL split around its index
/// * `Err(UrlError)` - The URL is malformed or contains no index
///
/// # Examples
///
/// ```
/// use pget::url::find_pattern;
///
/// let pattern = find_pattern("http://h/path/1/2.rar?param=3").unwrap();
/// assert_eq!(pattern.matched, "2");
/// assert_eq!(pattern.prefix, "http://h/path/1/");
/// assert_eq!(pattern.suffix, ".rar?param=3");
/// ```
pub fn find_pattern(url_str: &str) -> UrlResult<Pattern> {
    let input = url_str.trim();
    let raw = RawUrl::parse(input)?;

    let pattern = STRATEGIES
        .iter()
        .find_map(|strategy| strategy(&raw))
        .ok_or_else(|| UrlError::NoPatternFound(input.to_string()))?;

    tracing::debug!(
        "Index \"{}\" found in {} of {}",
        pattern.matched,
        pattern.location,
        input
    );

    Ok(pattern)
}
