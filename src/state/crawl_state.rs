//! Crawl state definitions for one crawl direction

use std::fmt;

/// Why a crawl direction stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The server answered, but not with a success status
    Missing {
        /// HTTP status code, when one was received
        status: Option<u16>,
    },

    /// Network-level failure (connection refused, timeout, broken body)
    Transport {
        /// Error description
        error: String,
    },

    /// The resource was retrieved but could not be written
    Persistence {
        /// Error description
        error: String,
    },

    /// The next index is outside the representable range (below zero or overflow)
    Exhausted,
}

impl StopReason {
    /// Returns true if the direction ended on a resource the server reported absent
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Returns true if the direction ended on an error rather than a clean miss
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Persistence { .. })
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { status: Some(code) } => write!(f, "Status {}", code),
            Self::Missing { status: None } => write!(f, "not found"),
            Self::Transport { error } => write!(f, "{}", error),
            Self::Persistence { error } => write!(f, "write failed: {}", error),
            Self::Exhausted => write!(f, "index range exhausted"),
        }
    }
}

/// State of one crawl direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlState {
    /// Probing or fetching the current index
    Scanning,

    /// Terminal: no further index will be tried
    Stopped(StopReason),
}

impl CrawlState {
    /// Returns true once the direction has stopped
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped(_))
    }

    /// The stop reason, if stopped
    pub fn stop_reason(&self) -> Option<&StopReason> {
        match self {
            Self::Stopped(reason) => Some(reason),
            Self::Scanning => None,
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scanning => write!(f, "Scanning"),
            Self::Stopped(reason) => write!(f, "Stopped ({})", reason),
        }
    }
}
