//! Route definitions for the card service.
//!
//! ## Routes
//!
//! - `GET /` - Landing page (doubles as the liveness probe)
//! - `GET /health` - Health check (JSON)
//! - `GET /rpg/{username}` - SVG status card
//! - `GET /preview/{username}` - HTML preview page with rendering controls

mod card;
mod health;
mod home;
mod preview;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Build the complete card service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_page))
        .route("/health", get(health::health_check))
        .route("/rpg/{username}", get(card::card_handler))
        .route("/preview/{username}", get(preview::preview_handler))
        .with_state(state)
}
