//! Configuration management for playlist-finder.
//!
//! Configuration values come from environment variables, optionally seeded
//! from a `.env` file in the local data directory. Every accessor falls back
//! to a sensible default so the server starts without any configuration.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_CACHE_TTL_SECONDS: u64 = 3600;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the `playlist-finder` directory if it doesn't exist and loads the
/// `.env` file inside it. Variables already present in the process
/// environment are not overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/playlist-finder/.env`
/// - macOS: `~/Library/Application Support/playlist-finder/.env`
/// - Windows: `%LOCALAPPDATA%/playlist-finder/.env`
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed. A missing file is not an error.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("playlist-finder/.env");
    path
}

/// Returns the address the HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, e.g. `127.0.0.1:3000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify Web API base URL without a trailing slash.
///
/// Reads `SPOTIFY_API_URL`, e.g. `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns how long a snapshot may answer searches before it is rebuilt.
///
/// Reads `CACHE_TTL_SECONDS`; unparsable values fall back to one hour.
pub fn cache_ttl() -> Duration {
    let secs = env::var("CACHE_TTL_SECONDS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_CACHE_TTL_SECONDS);
    Duration::from_secs(secs)
}
