use serde::Deserialize;

/// Main configuration structure for pget
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(
        rename = "connect-timeout-secs",
        default = "default_connect_timeout_secs"
    )]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// What a crawl does with each index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrawlMode {
    /// GET each resource and write it to the output directory
    #[default]
    Download,
    /// HEAD each resource, write nothing
    Probe,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory downloaded files are written to
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Download or probe only
    #[serde(default)]
    pub mode: CrawlMode,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            mode: CrawlMode::default(),
        }
    }
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Probe the seed URL before starting either direction
    #[serde(rename = "verify-start", default = "default_true")]
    pub verify_start: bool,

    /// Probe the nearest shorter boundary to detect unannounced zero padding
    #[serde(rename = "check-padding", default)]
    pub check_padding: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            verify_start: true,
            check_padding: false,
        }
    }
}

fn default_user_agent() -> String {
    format!("pget/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_directory() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}
