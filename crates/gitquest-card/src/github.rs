//! GitHub user API client.
//!
//! Validates usernames locally, issues a single profile lookup per call,
//! and classifies every outcome into [`FetchError`]. No retries: a failed
//! call surfaces as a typed error and the client may simply re-request.
//! The cache is the orchestrator's concern, not this module's.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// GitHub caps usernames at 39 characters.
const MAX_USERNAME_LEN: usize = 39;

/// Username grammar: alphanumerics and single embedded hyphens, no leading
/// or trailing hyphen. Length is bounded separately.
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9](?:-?[A-Za-z0-9])*$").unwrap());

/// Normalized snapshot of a public GitHub profile.
///
/// Immutable once cached; replaced wholesale on refresh. `avatar_url` is
/// referenced but never fetched or embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Canonical login, unique per account. Cache key.
    pub login: String,
    /// Display name, if set on the profile.
    #[serde(default)]
    pub name: Option<String>,
    /// Profile bio. May contain markup-special characters.
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    #[serde(default)]
    pub avatar_url: String,
    /// Link to the profile page.
    #[serde(default)]
    pub html_url: String,
    /// Account creation time, RFC 3339.
    #[serde(default)]
    pub created_at: String,
}

impl UserRecord {
    /// Display name, falling back to the login when unset or blank.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }

    /// Whole years since account creation. Unparseable timestamps count
    /// as a brand-new account.
    pub fn account_age_years(&self) -> u32 {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|created| {
                let days = (chrono::Utc::now() - created.with_timezone(&chrono::Utc)).num_days();
                (days.max(0) / 365) as u32
            })
            .unwrap_or(0)
    }

    /// Derived RPG level: account age plus activity counters, in [1, 99].
    pub fn level(&self) -> u32 {
        (self.account_age_years() * 2 + self.public_repos / 10 + self.followers / 20).clamp(1, 99)
    }
}

/// Check a username against the GitHub grammar.
///
/// Violations are rejected locally as [`FetchError::InvalidUsername`],
/// without a network call.
pub fn validate_username(username: &str) -> Result<(), FetchError> {
    if username.is_empty() || username.len() > MAX_USERNAME_LEN || !USERNAME_RE.is_match(username) {
        return Err(FetchError::InvalidUsername(username.to_string()));
    }
    Ok(())
}

/// Fetch a user's public profile, classifying the outcome.
///
/// Issues at most one GET to `{api_base}/users/{username}`. The client
/// carries the identifying `User-Agent` and optional authorization as
/// default headers (see [`crate::state::AppState`]).
pub async fn fetch_user(
    http: &reqwest::Client,
    api_base: &str,
    username: &str,
) -> Result<UserRecord, FetchError> {
    validate_username(username)?;

    let url = format!("{api_base}/users/{username}");

    let response = match http.get(&url).send().await {
        Ok(response) => response,
        Err(err) => {
            tracing::warn!(username = %username, error = %err, "github request failed");
            return Err(FetchError::Upstream { status: None });
        }
    };

    let status = response.status();
    if status.is_success() {
        return response.json::<UserRecord>().await.map_err(|err| {
            tracing::warn!(username = %username, error = %err, "github response malformed");
            FetchError::Upstream {
                status: Some(status.as_u16()),
            }
        });
    }

    let err = classify_failure(status.as_u16(), username);
    tracing::warn!(username = %username, status = status.as_u16(), error = %err, "github lookup failed");
    Err(err)
}

/// Map a non-2xx upstream status to a typed failure.
///
/// GitHub signals rate limiting as 403 with exhausted quota headers as well
/// as plain 429; both collapse to `RateLimited`.
fn classify_failure(status: u16, username: &str) -> FetchError {
    match status {
        404 => FetchError::NotFound(username.to_string()),
        403 | 429 => FetchError::RateLimited,
        other => FetchError::Upstream {
            status: Some(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- validate_username() tests --

    #[test]
    fn username_plain_alphanumeric_ok() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("a").is_ok());
        assert!(validate_username("0x9").is_ok());
    }

    #[test]
    fn username_embedded_hyphens_ok() {
        assert!(validate_username("octo-cat").is_ok());
        assert!(validate_username("a-b-c-d").is_ok());
    }

    #[test]
    fn username_max_length_ok() {
        let name = "a".repeat(39);
        assert!(validate_username(&name).is_ok());
    }

    #[test]
    fn username_too_long_rejected() {
        let name = "a".repeat(40);
        assert!(matches!(
            validate_username(&name),
            Err(FetchError::InvalidUsername(_))
        ));
    }

    #[test]
    fn username_empty_rejected() {
        assert!(validate_username("").is_err());
    }

    #[test]
    fn username_leading_hyphen_rejected() {
        assert!(validate_username("-alice").is_err());
    }

    #[test]
    fn username_trailing_hyphen_rejected() {
        assert!(validate_username("alice-").is_err());
    }

    #[test]
    fn username_double_hyphen_rejected() {
        assert!(validate_username("octo--cat").is_err());
    }

    #[test]
    fn username_special_characters_rejected() {
        assert!(validate_username("bad_user!").is_err());
        assert!(validate_username("a.b").is_err());
        assert!(validate_username("user name").is_err());
        assert!(validate_username("日本語").is_err());
    }

    // -- UserRecord deserialization --

    #[test]
    fn record_parses_github_payload() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "bio": null,
            "public_repos": 8,
            "followers": 3938,
            "following": 9,
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat",
            "created_at": "2011-01-25T18:44:36Z",
            "company": "@github",
            "hireable": null
        }"#;

        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.login, "octocat");
        assert_eq!(record.name.as_deref(), Some("The Octocat"));
        assert_eq!(record.bio, None);
        assert_eq!(record.public_repos, 8);
        assert_eq!(record.followers, 3938);
        assert_eq!(record.following, 9);
        assert_eq!(record.html_url, "https://github.com/octocat");
    }

    #[test]
    fn record_parses_minimal_payload() {
        let record: UserRecord = serde_json::from_str(r#"{"login":"ghost"}"#).unwrap();
        assert_eq!(record.login, "ghost");
        assert_eq!(record.name, None);
        assert_eq!(record.public_repos, 0);
        assert_eq!(record.followers, 0);
        assert_eq!(record.created_at, "");
    }

    // -- derived stats --

    fn record_with(created_at: &str, repos: u32, followers: u32) -> UserRecord {
        UserRecord {
            login: "alice".to_string(),
            name: None,
            bio: None,
            public_repos: repos,
            followers,
            following: 0,
            avatar_url: String::new(),
            html_url: String::new(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn display_name_falls_back_to_login() {
        let mut record = record_with("", 0, 0);
        assert_eq!(record.display_name(), "alice");

        record.name = Some("  ".to_string());
        assert_eq!(record.display_name(), "alice");

        record.name = Some("Alice A.".to_string());
        assert_eq!(record.display_name(), "Alice A.");
    }

    #[test]
    fn account_age_counts_whole_years() {
        let record = record_with("2020-01-01T00:00:00Z", 0, 0);
        assert!(record.account_age_years() >= 5);
    }

    #[test]
    fn account_age_unparseable_timestamp_is_zero() {
        assert_eq!(record_with("", 0, 0).account_age_years(), 0);
        assert_eq!(record_with("yesterday", 0, 0).account_age_years(), 0);
    }

    #[test]
    fn account_age_future_timestamp_is_zero() {
        assert_eq!(record_with("2999-01-01T00:00:00Z", 0, 0).account_age_years(), 0);
    }

    #[test]
    fn level_floors_at_one() {
        assert_eq!(record_with("", 0, 0).level(), 1);
    }

    #[test]
    fn level_caps_at_ninety_nine() {
        assert_eq!(record_with("", 5000, 100_000).level(), 99);
    }

    #[test]
    fn level_grows_with_activity() {
        let quiet = record_with("2020-01-01T00:00:00Z", 3, 10);
        let busy = record_with("2020-01-01T00:00:00Z", 300, 1000);
        assert!(busy.level() > quiet.level());
    }

    // -- classify_failure() --

    #[test]
    fn classify_404_as_not_found() {
        assert_eq!(
            classify_failure(404, "ghost"),
            FetchError::NotFound("ghost".to_string())
        );
    }

    #[test]
    fn classify_throttling_as_rate_limited() {
        assert_eq!(classify_failure(403, "alice"), FetchError::RateLimited);
        assert_eq!(classify_failure(429, "alice"), FetchError::RateLimited);
    }

    #[test]
    fn classify_other_statuses_as_upstream() {
        assert_eq!(
            classify_failure(500, "alice"),
            FetchError::Upstream { status: Some(500) }
        );
        assert_eq!(
            classify_failure(301, "alice"),
            FetchError::Upstream { status: Some(301) }
        );
    }

    // -- fetch_user() --

    #[tokio::test]
    async fn fetch_rejects_invalid_username_before_any_call() {
        let http = reqwest::Client::new();
        // The api_base is unroutable; reaching it would fail as Upstream,
        // so an InvalidUsername result proves no call was attempted.
        let result = fetch_user(&http, "http://127.0.0.1:9", "bad_user!").await;
        assert!(matches!(result, Err(FetchError::InvalidUsername(_))));
    }

    #[tokio::test]
    async fn fetch_transport_failure_is_upstream_error() {
        let http = reqwest::Client::new();
        let result = fetch_user(&http, "http://127.0.0.1:9", "alice").await;
        assert_eq!(result.unwrap_err(), FetchError::Upstream { status: None });
    }
}
