use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::SearchError,
    info,
    spotify::{SpotifyClient, library},
    types::{Playlist, Snapshot},
};

use super::{Clock, SystemClock};

/// Anything that can produce a complete snapshot for a bearer token.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn build(&self, token: &str) -> Result<Snapshot, SearchError>;
}

/// Builds snapshots by draining the user's library from the Spotify API.
pub struct Aggregator {
    client: SpotifyClient,
    clock: Arc<dyn Clock>,
}

impl Aggregator {
    pub fn new(client: SpotifyClient) -> Self {
        Self {
            client,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Retrieves the full library behind `token` as one snapshot.
    ///
    /// 1. Drains the user's playlists (tracks still empty).
    /// 2. Drains the liked tracks and appends them as the "Liked Songs"
    ///    playlist at the end.
    /// 3. Drains each remaining playlist's tracks, one playlist at a time.
    /// 4. Stamps the result with the current instant.
    ///
    /// # Errors
    ///
    /// Any failing request aborts the build with
    /// [`SearchError::FetchFailure`]; nothing fetched so far is returned.
    pub async fn build(&self, token: &str) -> Result<Snapshot, SearchError> {
        let mut playlists = library::get_playlists(&self.client, token).await?;

        let liked = library::get_liked_tracks(&self.client, token).await?;
        playlists.push(Playlist::liked_songs(liked));

        for playlist in playlists.iter_mut().filter(|p| !p.is_liked_songs()) {
            playlist.tracks =
                library::get_playlist_tracks(&self.client, token, &playlist.id).await?;
        }

        let snapshot = Snapshot::new(playlists, self.clock.now());
        info!(
            "Collected {} playlists with {} tracks",
            snapshot.playlists.len(),
            snapshot.count_tracks()
        );

        Ok(snapshot)
    }
}

#[async_trait]
impl SnapshotSource for Aggregator {
    async fn build(&self, token: &str) -> Result<Snapshot, SearchError> {
        Aggregator::build(self, token).await
    }
}
