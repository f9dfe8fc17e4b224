//! Best-effort analytics side channel.
//!
//! When a sink is configured, a small JSON event is POSTed after each card
//! response has been composed. The send runs on a detached task with a
//! short timeout; every failure is logged at debug and swallowed, since
//! the response it describes has already been returned.

use std::time::Duration;

use axum::http::StatusCode;

use crate::options::RenderOptions;
use crate::state::AppState;

/// Bound on the sink call so stuck sinks never pile up tasks.
const SINK_TIMEOUT: Duration = Duration::from_secs(2);

/// Dispatch one card-served event. No-op unless a sink is configured.
pub fn dispatch(state: &AppState, username: &str, options: &RenderOptions, status: StatusCode) {
    let Some(url) = state.config.analytics_url.clone() else {
        return;
    };

    let event = serde_json::json!({
        "login": username,
        "theme": options.theme.as_str(),
        "lang": options.lang.as_str(),
        "font": options.font.key,
        "status": status.as_u16(),
        "outcome": if status.is_success() { "ok" } else { "error" },
    });

    let http = state.http.clone();
    tokio::spawn(async move {
        let result = http
            .post(&url)
            .timeout(SINK_TIMEOUT)
            .json(&event)
            .send()
            .await;
        match result {
            Ok(response) if !response.status().is_success() => {
                tracing::debug!(status = response.status().as_u16(), "analytics sink refused event");
            }
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(error = %err, "analytics dispatch failed");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_state(analytics_url: Option<&str>) -> AppState {
        let config = Config {
            bind_addr: "127.0.0.1:0".to_string(),
            base_url: "http://localhost:8080".to_string(),
            site_name: "GitQuest".to_string(),
            github_api_url: "http://127.0.0.1:9".to_string(),
            github_token: None,
            cache_ttl: Duration::from_secs(60),
            cache_capacity: 16,
            analytics_url: analytics_url.map(String::from),
        };
        AppState::new(config).unwrap()
    }

    #[tokio::test]
    async fn dispatch_without_sink_is_noop() {
        let state = test_state(None);
        dispatch(
            &state,
            "alice",
            &RenderOptions::default(),
            StatusCode::OK,
        );
    }

    #[tokio::test]
    async fn dispatch_to_unreachable_sink_is_swallowed() {
        let state = test_state(Some("http://127.0.0.1:9/events"));
        dispatch(
            &state,
            "alice",
            &RenderOptions::default(),
            StatusCode::NOT_FOUND,
        );
        // The spawned task fails quietly on its own; nothing to assert
        // beyond not panicking here.
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
