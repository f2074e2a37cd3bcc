//! State module for tracking a directional crawl
//!
//! A crawl direction has one active state, `Scanning`, which it re-enters for
//! every index, and one terminal state, `Stopped`, carrying the reason.

mod crawl_state;

// Re-export main types
pub use crawl_state::{CrawlState, StopReason};
