//! Failure taxonomy for the card pipeline.
//!
//! The upstream client never raises outside [`FetchError`]; the orchestrator
//! turns every variant into a themed error card with a matching HTTP status,
//! so failures stay visible as a rendered image rather than a broken one.
//! HTML pages (the preview route) use [`PageError`] instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Typed outcome of an upstream profile lookup.
///
/// Modeled as data rather than panics so every call site is forced to
/// handle each case, preserving the always-return-a-valid-image guarantee.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The username violates the GitHub username grammar. Rejected locally,
    /// before any network call.
    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// Upstream confirms no such account exists.
    #[error("no such user: {0}")]
    NotFound(String),

    /// Upstream is throttling us (HTTP 403/429).
    #[error("upstream rate limit exceeded")]
    RateLimited,

    /// Any other upstream or transport failure. `status` is the upstream
    /// HTTP status when one was received.
    #[error("upstream error")]
    Upstream { status: Option<u16> },
}

impl FetchError {
    /// HTTP status for the card response carrying this failure.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidUsername(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Human-readable message rendered on the error card.
    pub fn card_message(&self) -> &'static str {
        match self {
            Self::InvalidUsername(_) => "invalid username",
            Self::NotFound(_) => "user not found",
            Self::RateLimited => "rate limited, try again later",
            Self::Upstream { .. } => "github is unreachable",
        }
    }
}

/// Errors for the HTML surface (preview pages).
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The requested username fails the GitHub grammar; rejected before
    /// any rendering occurs.
    #[error("invalid username: {0}")]
    InvalidUsername(String),
}

/// Inline CSS for HTML error pages.
const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;display:flex;justify-content:center;align-items:center;min-height:100vh;background:#fafafa;color:#1a1c2c;padding:1rem}
.error-page{text-align:center;max-width:400px}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#666;margin-bottom:1rem;line-height:1.5}
.error-page a{color:#b45309}
@media(prefers-color-scheme:dark){
body{background:#1a1c2c;color:#f4f4f4}
.error-page p{color:#94a1b2}
.error-page a{color:#ffd803}
}
"#;

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::InvalidUsername(name) => (
                StatusCode::BAD_REQUEST,
                "Invalid Username",
                format!("'{name}' is not a valid GitHub username."),
            ),
        };

        let markup = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Back to GitQuest" }
                    }
                }
            }
        };

        (status, markup).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_display_invalid_username() {
        let err = FetchError::InvalidUsername("bad!user".to_string());
        assert_eq!(err.to_string(), "invalid username: bad!user");
    }

    #[test]
    fn fetch_error_display_not_found() {
        let err = FetchError::NotFound("ghost".to_string());
        assert_eq!(err.to_string(), "no such user: ghost");
    }

    #[test]
    fn fetch_error_status_mapping() {
        assert_eq!(
            FetchError::InvalidUsername(String::new()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            FetchError::NotFound(String::new()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(FetchError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            FetchError::Upstream { status: Some(500) }.status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            FetchError::Upstream { status: None }.status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn fetch_error_card_messages_stable() {
        assert_eq!(
            FetchError::NotFound(String::new()).card_message(),
            "user not found"
        );
        assert_eq!(
            FetchError::RateLimited.card_message(),
            "rate limited, try again later"
        );
        assert_eq!(
            FetchError::Upstream { status: None }.card_message(),
            "github is unreachable"
        );
    }

    #[test]
    fn page_error_into_response_invalid_username() {
        let err = PageError::InvalidUsername("bad!user".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
