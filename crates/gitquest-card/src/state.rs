//! Application state shared across all request handlers.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use crate::cache::UserCache;
use crate::config::Config;

/// Identifying client header, required by the GitHub API usage policy.
const USER_AGENT: &str = concat!("gitquest-card/", env!("CARGO_PKG_VERSION"));

/// Transport-level bound on the single upstream call per request.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared application state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Preconfigured HTTP client for upstream calls.
    pub http: reqwest::Client,

    /// Application configuration.
    pub config: Arc<Config>,

    /// Freshness cache of fetched user records.
    pub cache: UserCache,
}

impl AppState {
    /// Create a new application state from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        if let Some(token) = &config.github_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .context("GITHUB_TOKEN is not a valid header value")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        let cache = UserCache::new(config.cache_capacity, config.cache_ttl);

        tracing::info!(
            cache_capacity = config.cache_capacity,
            cache_ttl_secs = config.cache_ttl.as_secs(),
            "application state initialized"
        );

        Ok(Self {
            http,
            config: Arc::new(config),
            cache,
        })
    }
}
