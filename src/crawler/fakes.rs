//! In-memory transport and store for crawl tests

use crate::crawler::{FetchResult, Transport};
use crate::storage::{ResourceStore, StorageError, StorageResult};
use crate::PgetError;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;
use url::Url;

/// Serves a fixed set of URLs; everything else is a 404
#[derive(Default)]
pub struct FakeTransport {
    bodies: HashMap<String, Vec<u8>>,
    broken: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    /// Serves `url` with `body`
    pub fn with(mut self, url: impl Into<String>, body: &[u8]) -> Self {
        self.bodies.insert(url.into(), body.to_vec());
        self
    }

    /// Serves `prefix{i}suffix` for every index in `range`
    pub fn with_range(
        mut self,
        prefix: &str,
        suffix: &str,
        range: std::ops::RangeInclusive<i64>,
    ) -> Self {
        for i in range {
            let url = format!("{}{}{}", prefix, i, suffix);
            self.bodies.insert(url, format!("body {}", i).into_bytes());
        }
        self
    }

    /// Makes requests to `url` fail at the network level
    pub fn with_broken(mut self, url: impl Into<String>) -> Self {
        self.broken.insert(url.into());
        self
    }

    /// Every URL requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn respond(&self, url: &Url, with_body: bool) -> Result<FetchResult, PgetError> {
        let key = url.to_string();
        self.requests.lock().unwrap().push(key.clone());

        if self.broken.contains(&key) {
            return Err(PgetError::Transport {
                url: key,
                source: request_error(),
            });
        }

        Ok(match self.bodies.get(&key) {
            Some(body) => FetchResult::Found {
                status_code: 200,
                body: if with_body { body.clone() } else { Vec::new() },
            },
            None => FetchResult::Missing { status_code: 404 },
        })
    }
}

/// A genuine `reqwest::Error`, produced without touching the network
fn request_error() -> reqwest::Error {
    match reqwest::Client::new().get("http://").build() {
        Err(e) => e,
        Ok(_) => panic!("a URL without a host should not build"),
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn probe(&self, url: &Url) -> Result<FetchResult, PgetError> {
        self.respond(url, false)
    }

    async fn fetch(&self, url: &Url) -> Result<FetchResult, PgetError> {
        self.respond(url, true)
    }
}

/// Keeps written files in memory
#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<String, Vec<u8>>>,
    read_only: HashSet<String>,
}

impl MemoryStore {
    /// Makes writes of `name` fail
    pub fn with_read_only(mut self, name: impl Into<String>) -> Self {
        self.read_only.insert(name.into());
        self
    }

    /// Contents written under `name`
    pub fn get(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(name).cloned()
    }

    /// Number of distinct names written
    pub fn len(&self) -> usize {
        self.files.lock().unwrap().len()
    }
}

impl ResourceStore for MemoryStore {
    fn write(&self, name: &str, bytes: &[u8]) -> StorageResult<PathBuf> {
        if self.read_only.contains(name) {
            return Err(StorageError::Io {
                path: PathBuf::from(name),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), bytes.to_vec());
        Ok(PathBuf::from(name))
    }
}
