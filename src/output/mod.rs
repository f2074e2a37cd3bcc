//! Output module for crawl results
//!
//! This module holds the per-direction results and prints the final summary.

pub mod stats;

pub use stats::{format_bytes, print_summary, CrawlResult, CrawlSummary};
