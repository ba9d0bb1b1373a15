//! # CLI Module
//!
//! User-facing commands of the `playlist-finder` binary.
//!
//! - [`serve`] - runs the HTTP search API (see [`crate::api`])
//! - [`search`] - runs one search from the terminal and prints the matching
//!   playlists as a table
//!
//! Both build a [`crate::management::SearchService`] from the environment
//! (`SPOTIFY_API_URL`, `CACHE_TTL_SECONDS`). Fatal problems are reported with
//! the `error!` macro, which exits the process.
//!
//! ## Usage
//!
//! ```bash
//! playlist-finder serve
//! playlist-finder search "bohemian" --token BQC...
//! SPOTIFY_ACCESS_TOKEN=BQC... playlist-finder search rhapsody
//! ```

mod search;
mod serve;

pub use search::search;
pub use serve::serve;
