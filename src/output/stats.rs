//! Per-direction crawl results and the final summary

use crate::crawler::Direction;
use crate::state::StopReason;
use std::time::Duration;

/// Outcome of one crawl direction
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlResult {
    /// Which way the index moved
    pub direction: Direction,

    /// First index tried
    pub start: i64,

    /// First index found absent (or out of range), i.e. the next index to try
    pub stopped_at: i64,

    /// Why the direction stopped
    pub reason: StopReason,

    /// Number of resources confirmed (probed or retrieved)
    pub retrieved: u64,

    /// Total body bytes transferred; zero for probe-only crawls
    pub bytes: u64,

    /// Wall-clock time spent in this direction
    pub elapsed: Duration,
}

impl CrawlResult {
    /// The last index confirmed to exist, if any
    pub fn last_found(&self) -> Option<i64> {
        (self.retrieved > 0).then(|| self.direction.retreat(self.stopped_at))
    }

    /// Average transfer rate in bytes per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.bytes as f64 / secs
        } else {
            0.0
        }
    }
}

/// Aggregate result of both directions
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlSummary {
    pub descending: CrawlResult,
    pub ascending: CrawlResult,
}

impl CrawlSummary {
    /// Total resources confirmed across both directions
    pub fn total_retrieved(&self) -> u64 {
        self.descending.retrieved + self.ascending.retrieved
    }

    /// Total bytes transferred across both directions
    pub fn total_bytes(&self) -> u64 {
        self.descending.bytes + self.ascending.bytes
    }

    /// The contiguous index range confirmed to exist, lowest first
    pub fn found_range(&self) -> Option<(i64, i64)> {
        let low = self
            .descending
            .last_found()
            .or_else(|| self.ascending.last_found().map(|_| self.ascending.start))?;
        let high = self.ascending.last_found().unwrap_or(self.descending.start);
        Some((low, high))
    }
}

/// Formats a byte count with a binary unit suffix
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Prints the crawl summary to stdout
///
/// # Arguments
///
/// * `summary` - Results of both directions
/// * `downloaded` - Whether bodies were transferred (adds byte and rate lines)
pub fn print_summary(summary: &CrawlSummary, downloaded: bool) {
    println!(
        "Crawler 1 stopped at {}, crawler 2 stopped at {}",
        summary.descending.stopped_at, summary.ascending.stopped_at
    );

    if let Some((low, high)) = summary.found_range() {
        println!(
            "Found {} resources (indices {} to {})",
            summary.total_retrieved(),
            low,
            high
        );
    }

    if downloaded {
        for result in [&summary.descending, &summary.ascending] {
            println!(
                "  {}: {} files, {} in {:.2}s ({}/s)",
                result.direction,
                result.retrieved,
                format_bytes(result.bytes),
                result.elapsed.as_secs_f64(),
                format_bytes(result.throughput() as u64)
            );
        }
        println!("Total: {}", format_bytes(summary.total_bytes()));
    }
}
