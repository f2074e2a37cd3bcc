//! HTTP transport
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client with the configured user agent and timeouts
//! - HEAD requests to check that a resource exists
//! - GET requests to retrieve resource bodies
//! - Error classification for log lines
//!
//! Requests are never retried. A timeout bounds a hung request; the crawl
//! itself has no cancellation.

use crate::config::HttpConfig;
use crate::PgetError;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// Result of a probe or fetch that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Success status; `body` is empty for probes
    Found {
        /// HTTP status code
        status_code: u16,
        /// Response body
        body: Vec<u8>,
    },

    /// Any non-success status
    Missing {
        /// HTTP status code
        status_code: u16,
    },
}

impl FetchResult {
    /// Returns true if the resource exists
    pub fn exists(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// Network capability used by the crawler
///
/// `Err` means the request did not complete (connection, timeout, body
/// read). A completed request with an error status is `Ok(FetchResult::Missing)`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Checks existence without retrieving the body (HEAD)
    async fn probe(&self, url: &Url) -> Result<FetchResult, PgetError>;

    /// Retrieves the resource body (GET)
    async fn fetch(&self, url: &Url) -> Result<FetchResult, PgetError>;
}

/// Reports whether `url` exists
pub async fn probe_existence(transport: &dyn Transport, url: &Url) -> Result<bool, PgetError> {
    Ok(transport.probe(url).await?.exists())
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - User agent and timeout configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use pget::config::HttpConfig;
/// use pget::crawler::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Describes a transport failure the way it is shown in crawl log lines
pub fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else if error.is_redirect() {
        "Too many redirects".to_string()
    } else {
        error.to_string()
    }
}

/// `Transport` backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the transport from HTTP configuration
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn transport_error(url: &Url, source: reqwest::Error) -> PgetError {
    PgetError::Transport {
        url: url.to_string(),
        source,
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn probe(&self, url: &Url) -> Result<FetchResult, PgetError> {
        let response = self
            .client
            .head(url.clone())
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        tracing::debug!("HEAD {} -> {}", url, status);

        if status.is_success() {
            Ok(FetchResult::Found {
                status_code: status.as_u16(),
                body: Vec::new(),
            })
        } else {
            Ok(FetchResult::Missing {
                status_code: status.as_u16(),
            })
        }
    }

    async fn fetch(&self, url: &Url) -> Result<FetchResult, PgetError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            return Ok(FetchResult::Missing {
                status_code: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(url, e))?;

        Ok(FetchResult::Found {
            status_code: status.as_u16(),
            body: body.to_vec(),
        })
    }
}
