//! Spotify Playlist Finder Library
//!
//! Answers one question: which of my Spotify playlists contain a given song?
//! The library drains a user's playlists, liked songs and every playlist's
//! tracks from the Spotify Web API into an in-memory snapshot, caches that
//! snapshot for a freshness window and serves case-insensitive substring
//! searches over it, either through an HTTP API or from the command line.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for search and health
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Search error type and its HTTP mapping
//! - `management` - Snapshot aggregation, caching and search
//! - `server` - Router construction and the HTTP server loop
//! - `spotify` - Spotify Web API client and pagination
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use playlist_finder::management::SearchService;
//!
//! #[tokio::main]
//! async fn main() -> playlist_finder::Res<()> {
//!     let service = SearchService::from_env();
//!     let playlists = service.search("BQC...", "bohemian").await?;
//!     println!("{:?}", playlists);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used for startup and CLI plumbing where any error is fatal. Search
/// operations use [`error::SearchError`] instead.
///
/// # Example
///
/// ```
/// use playlist_finder::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Formats one log line: local time, a colored level marker, the message.
///
/// Used by the [`info!`], [`success!`], [`warning!`] and [`error!`] macros so
/// server output can be correlated with request times.
pub fn log_line(marker: colored::ColoredString, args: std::fmt::Arguments<'_>) -> String {
    use colored::Colorize;
    let time = chrono::Local::now().format("%H:%M:%S").to_string();
    format!("{} [{}] {}", time.as_str().dimmed(), marker, args)
}

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Playlist cache is empty or stale, rebuilding");
/// info!("Collected {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("{}", $crate::log_line("o".blue().bold(), std::format_args!($($arg)*)));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("{}", $crate::log_line("✓".green().bold(), std::format_args!($($arg)*)));
  })
}

/// Prints a warning to stderr with a yellow exclamation mark.
///
/// Recoverable problems only, e.g. a failed search whose cause must not be
/// returned to the HTTP caller.
///
/// # Example
///
/// ```
/// warning!("Search for '{}' failed: {}", song, detail);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("{}", $crate::log_line("!".yellow().bold(), std::format_args!($($arg)*)));
  })
}

/// Prints an error to stderr with a red exclamation mark and exits with code 1.
///
/// Only for startup and CLI failures; request handlers never call it.
///
/// # Example
///
/// ```
/// error!("Failed to bind server address");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("{}", $crate::log_line("!".red().bold(), std::format_args!($($arg)*)));
    std::process::exit(1);
  })
}
