//! Crawl coordination
//!
//! This module contains the directional crawl loop and the logic that runs
//! both directions:
//! - Building each candidate URL from the pattern and index format
//! - Probing or fetching it and persisting the body
//! - Stopping a direction at its first miss or failure
//! - Running the descending and ascending crawls as two concurrent tasks

use crate::config::{Config, CrawlMode};
use crate::crawler::padding::verify_padding;
use crate::crawler::{describe_error, Direction, FetchResult, HttpTransport, Transport};
use crate::index::{resolve, IndexFormat, ResolvedIndex};
use crate::output::{CrawlResult, CrawlSummary};
use crate::state::{CrawlState, StopReason};
use crate::storage::{file_name_for, DirectoryStore, ResourceStore};
use crate::url::{find_pattern, Pattern};
use crate::PgetError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// What a crawler does with each candidate URL
#[derive(Clone)]
pub enum CrawlAction {
    /// HEAD only; nothing is written
    Probe,
    /// GET and write each non-empty body to the store
    Download(Arc<dyn ResourceStore>),
}

/// Walks one pattern in one direction at a time
///
/// A crawler holds only read-only data, so one instance is shared by both
/// directional tasks.
pub struct Crawler {
    transport: Arc<dyn Transport>,
    action: CrawlAction,
    pattern: Pattern,
    format: IndexFormat,
}

/// Counters for one directional run
struct Progress {
    current: i64,
    retrieved: u64,
    bytes: u64,
}

impl Crawler {
    /// Creates a crawler for `pattern`, printing indices with `format`
    pub fn new(
        transport: Arc<dyn Transport>,
        action: CrawlAction,
        pattern: Pattern,
        format: IndexFormat,
    ) -> Self {
        Self {
            transport,
            action,
            pattern,
            format,
        }
    }

    /// The URL for `index`
    pub fn url_for(&self, index: i64) -> String {
        self.pattern.url_for(&self.format.render(index))
    }

    /// Crawls from `start` in `direction` until the first miss
    ///
    /// The reported `stopped_at` is the first index found absent, i.e. the
    /// index the loop would have consumed next. A descending crawl never
    /// requests a negative index; it stops at `-1` with `StopReason::Exhausted`.
    pub async fn run(&self, start: i64, direction: Direction) -> CrawlResult {
        let started = Instant::now();
        let mut progress = Progress {
            current: start,
            retrieved: 0,
            bytes: 0,
        };

        let reason = loop {
            match self.advance(&mut progress, direction).await {
                CrawlState::Scanning => continue,
                CrawlState::Stopped(reason) => break reason,
            }
        };

        tracing::debug!(
            "{} crawl stopped at {}: {}",
            direction,
            progress.current,
            reason
        );

        CrawlResult {
            direction,
            start,
            stopped_at: progress.current,
            reason,
            retrieved: progress.retrieved,
            bytes: progress.bytes,
            elapsed: started.elapsed(),
        }
    }

    /// Handles the current index and returns the next state
    async fn advance(&self, progress: &mut Progress, direction: Direction) -> CrawlState {
        if progress.current < 0 {
            return CrawlState::Stopped(StopReason::Exhausted);
        }

        match self.visit(progress.current).await {
            Ok(bytes) => {
                progress.retrieved += 1;
                progress.bytes += bytes;
            }
            Err(reason) => return CrawlState::Stopped(reason),
        }

        match direction.step(progress.current) {
            Some(next) => {
                progress.current = next;
                CrawlState::Scanning
            }
            None => CrawlState::Stopped(StopReason::Exhausted),
        }
    }

    /// Probes or fetches one index, returning the number of body bytes kept
    async fn visit(&self, index: i64) -> Result<u64, StopReason> {
        let url_str = self.url_for(index);
        let url = Url::parse(&url_str).map_err(|e| StopReason::Transport {
            error: format!("invalid URL {}: {}", url_str, e),
        })?;

        match &self.action {
            CrawlAction::Probe => self.probe(&url).await,
            CrawlAction::Download(store) => self.download(&url, store.as_ref()).await,
        }
    }

    async fn probe(&self, url: &Url) -> Result<u64, StopReason> {
        match self.transport.probe(url).await {
            Ok(FetchResult::Found { .. }) => {
                tracing::info!("HEAD {} -> found", url);
                Ok(0)
            }
            Ok(FetchResult::Missing { status_code }) => {
                let reason = StopReason::Missing {
                    status: Some(status_code),
                };
                tracing::info!("HEAD {} -> [{}]", url, reason);
                Err(reason)
            }
            Err(e) => Err(log_failure("HEAD", url, stop_reason_for(&e))),
        }
    }

    async fn download(&self, url: &Url, store: &dyn ResourceStore) -> Result<u64, StopReason> {
        let body = match self.transport.fetch(url).await {
            Ok(FetchResult::Found { body, .. }) => body,
            Ok(FetchResult::Missing { status_code }) => {
                let reason = StopReason::Missing {
                    status: Some(status_code),
                };
                tracing::info!("GET {} -> [{}]", url, reason);
                return Err(reason);
            }
            Err(e) => return Err(log_failure("GET", url, stop_reason_for(&e))),
        };

        let filename = file_name_for(url);
        if body.is_empty() {
            tracing::info!("GET {} -> (empty, {} not written)", url, filename);
            return Ok(0);
        }

        match store.write(&filename, &body) {
            Ok(_) => {
                tracing::info!("GET {} -> {}", url, filename);
                Ok(body.len() as u64)
            }
            Err(e) => Err(log_failure(
                "GET",
                url,
                StopReason::Persistence {
                    error: e.to_string(),
                },
            )),
        }
    }
}

fn stop_reason_for(error: &PgetError) -> StopReason {
    let error = match error {
        PgetError::Transport { source, .. } => describe_error(source),
        other => other.to_string(),
    };
    StopReason::Transport { error }
}

fn log_failure(method: &str, url: &Url, reason: StopReason) -> StopReason {
    tracing::warn!("{} {} -> [{}]", method, url, reason);
    reason
}

/// Runs the descending and ascending crawls concurrently
///
/// The descending task starts at `number`, the ascending one at `number + 1`.
/// Neither is cancelled when the other stops; both are awaited.
///
/// # Errors
///
/// * `PgetError::Task` - A crawler task panicked
pub async fn dual_crawl(crawler: Arc<Crawler>, number: i64) -> Result<CrawlSummary, PgetError> {
    let descending = spawn_direction(crawler.clone(), number, Direction::Descending);
    let ascending = spawn_direction(crawler, number, Direction::Ascending);

    let (descending, ascending) = tokio::try_join!(descending, ascending)?;

    tracing::debug!(
        "Crawler 1 stopped at {}, crawler 2 stopped at {}",
        descending.stopped_at,
        ascending.stopped_at
    );

    Ok(CrawlSummary {
        descending,
        ascending,
    })
}

fn spawn_direction(
    crawler: Arc<Crawler>,
    seed: i64,
    direction: Direction,
) -> tokio::task::JoinHandle<CrawlResult> {
    tokio::spawn(async move {
        match direction.first_index(seed) {
            Some(start) => crawler.run(start, direction).await,
            None => CrawlResult {
                direction,
                start: seed,
                stopped_at: seed,
                reason: StopReason::Exhausted,
                retrieved: 0,
                bytes: 0,
                elapsed: Duration::ZERO,
            },
        }
    })
}

/// Verifies the seed resource exists, then runs both directions
///
/// # Errors
///
/// * `PgetError::NotFound` - The seed resource is absent; no task is started
/// * `PgetError::Transport` - The seed probe failed
/// * `PgetError::Task` - A crawler task panicked
pub async fn start_crawl(
    crawler: Arc<Crawler>,
    resolved: ResolvedIndex,
) -> Result<CrawlSummary, PgetError> {
    let seed = crawler.pattern.seed_url();
    let url = Url::parse(&seed)?;

    match crawler.transport.probe(&url).await? {
        FetchResult::Found { .. } => dual_crawl(crawler, resolved.number).await,
        FetchResult::Missing { status_code } => Err(PgetError::NotFound {
            url: seed,
            status: Some(status_code),
        }),
    }
}

/// Main crawler coordinator structure
///
/// Owns everything resolved from the seed URL and configuration before any
/// crawling starts.
pub struct Coordinator {
    config: Config,
    transport: Arc<dyn Transport>,
    pattern: Pattern,
    resolved: ResolvedIndex,
}

impl Coordinator {
    /// Creates a coordinator using the configured HTTP transport
    ///
    /// # Errors
    ///
    /// * `PgetError::UrlError` - The seed URL is malformed or has no index
    /// * `PgetError::Parse` - The index does not fit an `i64`
    /// * `PgetError::Reqwest` - The HTTP client could not be built
    pub fn new(config: Config, seed_url: &str) -> Result<Self, PgetError> {
        let transport = Arc::new(HttpTransport::new(&config.http)?);
        Self::with_transport(config, seed_url, transport)
    }

    /// Creates a coordinator with a caller-supplied transport
    pub fn with_transport(
        config: Config,
        seed_url: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, PgetError> {
        let pattern = find_pattern(seed_url)?;
        let resolved = resolve(&pattern)?;

        tracing::info!(
            "Detected pattern {} starting from index {}",
            resolved.format,
            resolved.number
        );

        Ok(Self {
            config,
            transport,
            pattern,
            resolved,
        })
    }

    /// The pattern extracted from the seed URL
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The seed index and its format
    pub fn resolved(&self) -> ResolvedIndex {
        self.resolved
    }

    /// Runs the crawl in both directions
    ///
    /// # Errors
    ///
    /// * `PgetError::Persistence` - The output directory could not be created
    /// * `PgetError::NotFound` / `PgetError::Transport` - The seed check failed
    /// * `PgetError::Task` - A crawler task panicked
    pub async fn run(self) -> Result<CrawlSummary, PgetError> {
        let resolved = if self.config.crawl.check_padding {
            verify_padding(self.transport.as_ref(), &self.pattern, self.resolved).await
        } else {
            self.resolved
        };

        let action = match self.config.output.mode {
            CrawlMode::Probe => CrawlAction::Probe,
            CrawlMode::Download => {
                let store = DirectoryStore::new(&self.config.output.directory)?;
                CrawlAction::Download(Arc::new(store))
            }
        };

        let crawler = Arc::new(Crawler::new(
            self.transport,
            action,
            self.pattern,
            resolved.format,
        ));

        if self.config.crawl.verify_start {
            start_crawl(crawler, resolved).await
        } else {
            dual_crawl(crawler, resolved.number).await
        }
    }
}

/// Runs a complete crawl for one seed URL
///
/// # Example
///
/// ```no_run
/// use pget::config::Config;
/// use pget::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_crawl(Config::default(), "http://example.com/pics/pic_05.jpg").await?;
/// println!("{} files", summary.total_retrieved());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config, seed_url: &str) -> Result<CrawlSummary, PgetError> {
    Coordinator::new(config, seed_url)?.run().await
}
