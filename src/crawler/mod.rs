//! Crawler module for walking a numbered URL sequence
//!
//! This module contains the core crawling logic, including:
//! - HTTP probing and fetching behind the `Transport` trait
//! - Index stepping in each direction
//! - The zero-padding sanity check
//! - Running both directions and collecting their results

mod coordinator;
mod direction;
mod fetcher;
mod padding;

#[cfg(test)]
pub(crate) mod fakes;

pub use coordinator::{dual_crawl, run_crawl, start_crawl, Coordinator, CrawlAction, Crawler};
pub use direction::Direction;
pub use fetcher::{
    build_http_client, describe_error, probe_existence, FetchResult, HttpTransport, Transport,
};
pub use padding::{probe_shorter_boundary, verify_padding};

use crate::config::Config;
use crate::output::CrawlSummary;
use crate::PgetError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Locate the index in the seed URL and resolve its padding
/// 2. Build the HTTP client
/// 3. Optionally verify the padding and the seed resource
/// 4. Crawl downwards from the seed and upwards from the next index
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `seed_url` - A URL containing a numeric index
///
/// # Returns
///
/// * `Ok(CrawlSummary)` - Both directions ran to their first miss
/// * `Err(PgetError)` - The crawl could not start
pub async fn crawl(config: Config, seed_url: &str) -> Result<CrawlSummary, PgetError> {
    run_crawl(config, seed_url).await
}
