//! Application configuration loaded from environment variables.

use std::time::Duration;

/// Default server-side freshness TTL for cached user records.
///
/// Minutes-scale: long enough to keep a README full of cards from burning
/// through the unauthenticated GitHub rate limit, short enough that profile
/// edits show up promptly.
const DEFAULT_CACHE_TTL_SECS: u64 = 600;

/// Default cache capacity (number of user records).
const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// Base URL for this service (used on the preview and landing pages).
    /// e.g., "https://card.gitquest.dev"
    pub base_url: String,

    /// Site name shown in page titles.
    pub site_name: String,

    /// GitHub API base URL. Overridable so tests can point the upstream
    /// client at a local stub.
    pub github_api_url: String,

    /// Optional GitHub token. Raises the upstream rate limit; clients of
    /// this service stay unauthenticated either way.
    pub github_token: Option<String>,

    /// Freshness TTL for cached user records.
    pub cache_ttl: Duration,

    /// Maximum number of cached user records.
    pub cache_capacity: u64,

    /// Optional analytics sink. When set, a best-effort JSON event is
    /// POSTed here after each card response is composed.
    pub analytics_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - None (all have defaults for local development)
    ///
    /// Optional:
    /// - `CARD_BIND_ADDR`: Server bind address (default: "0.0.0.0:8080")
    /// - `CARD_BASE_URL`: Base URL for links (default: "http://localhost:8080")
    /// - `CARD_SITE_NAME`: Site name (default: "GitQuest")
    /// - `GITHUB_API_URL`: GitHub API base (default: "https://api.github.com")
    /// - `GITHUB_TOKEN`: Token for authenticated upstream requests
    /// - `CARD_CACHE_TTL_SECS`: Freshness TTL in seconds (default: 600)
    /// - `CARD_CACHE_CAPACITY`: Max cached records (default: 10000)
    /// - `CARD_ANALYTICS_URL`: Best-effort analytics sink endpoint
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr =
            std::env::var("CARD_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let base_url = std::env::var("CARD_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string())
            .trim_end_matches('/')
            .to_string();

        let site_name = std::env::var("CARD_SITE_NAME").unwrap_or_else(|_| "GitQuest".to_string());

        let github_api_url = std::env::var("GITHUB_API_URL")
            .unwrap_or_else(|_| "https://api.github.com".to_string())
            .trim_end_matches('/')
            .to_string();

        let github_token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        let cache_ttl_secs = std::env::var("CARD_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        let cache_capacity = std::env::var("CARD_CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_CACHE_CAPACITY);

        let analytics_url = std::env::var("CARD_ANALYTICS_URL")
            .ok()
            .filter(|u| !u.trim().is_empty());

        tracing::info!(
            bind_addr = %bind_addr,
            base_url = %base_url,
            github_api_url = %github_api_url,
            authenticated = github_token.is_some(),
            cache_ttl_secs,
            cache_capacity,
            analytics = analytics_url.is_some(),
            "card configuration loaded"
        );

        Ok(Self {
            bind_addr,
            base_url,
            site_name,
            github_api_url,
            github_token,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_capacity,
            analytics_url,
        })
    }
}
