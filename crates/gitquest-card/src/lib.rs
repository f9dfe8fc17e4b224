//! GitQuest Card - retro RPG status cards for GitHub profiles.
//!
//! This crate provides a lightweight HTTP server that renders a public
//! GitHub user's profile as a retro role-playing-game "status screen" SVG,
//! suitable for embedding in README files and other documents.
//!
//! # Architecture
//!
//! - **Fetch**: Validates the username and looks the profile up against the
//!   public GitHub user API, classifying every failure into a typed outcome
//! - **Cache**: In-process moka cache with a storage-level TTL bounds the
//!   upstream call volume; population is fire-and-forget
//! - **Render**: Maps (user record, rendering options) to a deterministic
//!   SVG document; failures render as a themed error card instead
//!
//! # URL Pattern
//!
//! ```text
//! GET /rpg/{username}?theme=dark&lang=en&font=dotgothic&sz_bio=1.2
//! GET /preview/{username}
//! ```
//!
//! # Security
//!
//! - Card responses are always valid SVG, even on upstream failure, so an
//!   embedding `<img>` degrades gracefully instead of breaking
//! - All profile text (name, bio) is XML-escaped before embedding
//! - Preview pages are rendered by maud (auto-escaping) under a strict
//!   Content-Security-Policy

pub mod analytics;
pub mod cache;
pub mod config;
pub mod error;
pub mod github;
pub mod options;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
