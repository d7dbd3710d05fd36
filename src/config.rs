// config.rs
use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Which listings source the search page runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBackend {
    /// Filtered IDX query with mock fallback.
    Idx,
    /// RESO property pages plus per-listing photo lookups.
    Treb,
}

/// Bearer token for the listings API. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_token: Option<ApiToken>,
    pub api_base_url: String,
    pub use_mock_data: bool,
    pub public_base_url: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub media_concurrency: usize,
    pub upstream_timeout: Duration,
    pub search_backend: SearchBackend,
    pub public_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            api_base_url: "https://query.ampre.ca/odata".to_string(),
            use_mock_data: false,
            public_base_url: "http://localhost:3000".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            media_concurrency: 4,
            upstream_timeout: Duration::from_secs(30),
            search_backend: SearchBackend::Idx,
            public_dir: PathBuf::from("public"),
        }
    }
}

impl AppConfig {
    /// Load from the process environment (and `.env` when present).
    pub fn from_env() -> Result<Self> {
        let _ = dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = AppConfig::default();

        let use_mock_data = get("USE_MOCK_DATA").is_some_and(|v| v.eq_ignore_ascii_case("true"))
            || get("APP_ENV").is_some_and(|v| v.eq_ignore_ascii_case("development"));

        let search_backend = match get("SEARCH_BACKEND").as_deref() {
            None => defaults.search_backend,
            Some(v) if v.eq_ignore_ascii_case("idx") => SearchBackend::Idx,
            Some(v) if v.eq_ignore_ascii_case("treb") => SearchBackend::Treb,
            Some(other) => anyhow::bail!("SEARCH_BACKEND must be `idx` or `treb`, got `{other}`"),
        };

        let max_workers = match get("MAX_WORKERS") {
            Some(v) => v.parse::<usize>().context("MAX_WORKERS must be a valid number")?,
            None => defaults.max_workers,
        };
        // `/api/debug` calls back into this server and holds its own worker meanwhile.
        anyhow::ensure!(
            max_workers >= 2,
            "MAX_WORKERS must be at least 2, got {max_workers}"
        );

        Ok(Self {
            api_token: get("TREB_API_TOKEN").map(ApiToken::new),
            api_base_url: get("TREB_API_BASE_URL").unwrap_or(defaults.api_base_url),
            use_mock_data,
            public_base_url: get("PUBLIC_BASE_URL").unwrap_or(defaults.public_base_url),
            bind_addr: match get("BIND_ADDR") {
                Some(v) => v.parse::<SocketAddr>().context("BIND_ADDR must be a socket address")?,
                None => defaults.bind_addr,
            },
            max_workers,
            media_concurrency: match get("MEDIA_CONCURRENCY") {
                Some(v) => v.parse::<usize>().context("MEDIA_CONCURRENCY must be a valid number")?,
                None => defaults.media_concurrency,
            },
            upstream_timeout: match get("UPSTREAM_TIMEOUT_SECS") {
                Some(v) => Duration::from_secs(
                    v.parse::<u64>()
                        .context("UPSTREAM_TIMEOUT_SECS must be a valid number")?,
                ),
                None => defaults.upstream_timeout,
            },
            search_backend,
            public_dir: get("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
        })
    }
}
