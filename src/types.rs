use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

pub const LIKED_SONGS_ID: &str = "liked-songs";
pub const LIKED_SONGS_NAME: &str = "Liked Songs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub tracks: Vec<String>,
}

impl Playlist {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    pub fn liked_songs(tracks: Vec<String>) -> Self {
        Self {
            id: LIKED_SONGS_ID.to_string(),
            name: LIKED_SONGS_NAME.to_string(),
            tracks,
        }
    }

    pub fn is_liked_songs(&self) -> bool {
        self.id == LIKED_SONGS_ID
    }

    /// True if any track name contains `query`, ignoring case.
    pub fn contains_track(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.tracks
            .iter()
            .any(|track| utils::contains_lowercase(track, &needle))
    }
}

/// One complete capture of a user's playlists and their tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub playlists: Vec<Playlist>,
    pub timestamp: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(playlists: Vec<Playlist>, timestamp: DateTime<Utc>) -> Self {
        Self {
            playlists,
            timestamp,
        }
    }

    /// Names of the playlists holding at least one matching track, in
    /// snapshot order.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.playlists
            .iter()
            .filter(|p| p.contains_track(query))
            .map(|p| p.name.clone())
            .collect()
    }

    pub fn count_tracks(&self) -> usize {
        self.playlists.iter().map(|p| p.tracks.len()).sum()
    }
}

pub type SharedSnapshot = Arc<Snapshot>;

#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackItem {
    #[serde(default)]
    pub track: Option<TrackRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackRef {
    #[serde(default)]
    pub name: Option<String>,
}

impl TrackItem {
    /// The track's display name, or `None` for removed/unavailable tracks.
    pub fn into_name(self) -> Option<String> {
        self.track
            .and_then(|t| t.name)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub token: Option<String>,
    #[serde(rename = "songName")]
    pub song_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub playlist: String,
}
