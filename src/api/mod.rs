//! # API Module
//!
//! HTTP endpoints served by `playlist-finder serve`.
//!
//! ## Endpoints
//!
//! - [`search`] - `GET /api/spotify?token=..&songName=..` returns the names of
//!   the caller's playlists holding a track whose name contains `songName`.
//!   Missing parameters answer 400 `{"error":"Invalid request parameters"}`;
//!   upstream failures answer 500 `{"error":"Error fetching playlists"}` and
//!   the cause is only logged.
//! - [`health`] - `GET /health` reports the crate version and whether the
//!   playlist cache is empty, fresh or stale.
//!
//! Both handlers share one [`crate::management::SearchService`] through axum
//! state.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use playlist_finder::api::{health, search};
//!
//! let app = Router::new()
//!     .route("/api/spotify", get(search))
//!     .route("/health", get(health))
//!     .with_state(service);
//! ```

mod health;
mod search;

pub use health::health;
pub use search::search;
