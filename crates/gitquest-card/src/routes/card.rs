//! Main card route handler.
//!
//! Handles `GET /rpg/{username}`: validate → cache lookup → (miss) fetch →
//! (success) populate cache on a detached task → render → respond. The body
//! is always a valid SVG document, even on failure, so an embedding client
//! degrades to an error card instead of a broken image.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::analytics;
use crate::error::FetchError;
use crate::github;
use crate::options::{CardQuery, RenderOptions};
use crate::render;
use crate::state::AppState;

/// Downstream cache lifetime for successful cards, deliberately shorter
/// than the server-side freshness TTL so edge caches revalidate first.
const CLIENT_CACHE_SECS: u32 = 240;

/// Handle a card request.
pub async fn card_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<CardQuery>,
) -> Response {
    let username = username.trim().to_string();
    let options = query.into_options();

    let (status, svg) = build_card(&state, &username, &options).await;

    analytics::dispatch(&state, &username, &options, status);

    build_response(status, &svg)
}

/// Run the card pipeline for one request, returning the response status
/// and the SVG body.
pub async fn build_card(
    state: &AppState,
    username: &str,
    options: &RenderOptions,
) -> (StatusCode, String) {
    // Grammar violations are rejected before the cache is touched:
    // no read, no write, no upstream call.
    if let Err(err) = github::validate_username(username) {
        return (err.status(), render::render_error_card(&err, options.theme));
    }

    if let Some(record) = state.cache.get(username).await {
        return (StatusCode::OK, render::render_card(&record, options));
    }

    match github::fetch_user(&state.http, &state.config.github_api_url, username).await {
        Ok(record) => {
            // Populate the cache without delaying the response.
            let cache = state.cache.clone();
            let stored = record.clone();
            tokio::spawn(async move {
                cache.set(stored).await;
            });

            (StatusCode::OK, render::render_card(&record, options))
        }
        Err(err) => render_failure(&err, options),
    }
}

/// Map a typed fetch failure to its error card and status.
fn render_failure(err: &FetchError, options: &RenderOptions) -> (StatusCode, String) {
    (err.status(), render::render_error_card(err, options.theme))
}

/// Build the HTTP response around a rendered SVG document.
fn build_response(status: StatusCode, svg: &str) -> Response {
    let mut headers = HeaderMap::new();

    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("image/svg+xml; charset=utf-8"),
    );

    // Successful cards are edge-cacheable for a short window; error cards
    // must not be, or a transient rate limit would outlive its cause.
    let cache_control = if status.is_success() {
        format!("public, max-age={CLIENT_CACHE_SECS}, s-maxage={CLIENT_CACHE_SECS}")
    } else {
        "no-store".to_string()
    };
    if let Ok(val) = HeaderValue::from_str(&cache_control) {
        headers.insert(header::CACHE_CONTROL, val);
    }

    // ETag (xxHash of content)
    let hash = xxhash_rust::xxh3::xxh3_64(svg.as_bytes());
    let etag = format!("\"{}\"", hex_fmt::HexFmt(&hash.to_be_bytes()));
    if let Ok(val) = HeaderValue::from_str(&etag) {
        headers.insert(header::ETAG, val);
    }

    (status, headers, svg.to_string()).into_response()
}
