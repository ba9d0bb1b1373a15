//! # Spotify Integration Module
//!
//! Read-only access to the parts of the Spotify Web API that describe a
//! user's library: their playlists, their saved ("liked") tracks and the
//! track listing of each playlist.
//!
//! ## Architecture
//!
//! ```text
//! Management Layer (Aggregator, Search Service)
//!          ↓
//! Spotify Integration Layer
//!     ├── SpotifyClient (HTTP, cursor pagination)
//!     └── Library endpoints (playlists, saved tracks, playlist tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Pagination
//!
//! All three endpoints use the same contract: a page holds `items` and a
//! `next` URL which is `null` on the last page. [`SpotifyClient::drain`]
//! implements that contract once; the endpoint functions in [`library`] only
//! supply the first URL and the per-item extraction.
//!
//! ## API Coverage
//!
//! - `GET /me/playlists` - playlists owned or followed by the user
//! - `GET /me/tracks` - the user's saved tracks
//! - `GET /playlists/{playlist_id}/tracks` - one playlist's tracks
//!
//! ## Error Handling
//!
//! Every function returns `reqwest::Error` unchanged: transport failures,
//! non-success statuses (an expired token shows up as 401) and malformed
//! bodies. Nothing is retried here.
//!
//! ## Authentication
//!
//! Every request carries the caller's bearer token. How the token was
//! obtained is not this module's concern.

mod client;
pub mod library;

pub use client::SpotifyClient;
