use std::{sync::Arc, time::Duration};

use tokio::sync::Mutex;

use crate::{
    config,
    error::SearchError,
    info,
    spotify::SpotifyClient,
    types::SharedSnapshot,
    utils,
};

use super::{Aggregator, CacheState, Clock, SnapshotCache, SnapshotSource, SystemClock};

/// Answers "which playlists contain this song?" over a cached snapshot.
///
/// On a fresh cache hit the snapshot is searched directly. On a miss the
/// snapshot is rebuilt through the [`SnapshotSource`], stored, then searched.
///
/// Builds are single-flight: a missing request takes `build_lock` and checks
/// the cache again before building, so concurrent misses share one build.
///
/// The cache has one slot for all callers. Searches with different tokens
/// within the freshness window are answered from whichever library was
/// built last.
pub struct SearchService {
    source: Arc<dyn SnapshotSource>,
    cache: SnapshotCache,
    clock: Arc<dyn Clock>,
    build_lock: Mutex<()>,
}

impl SearchService {
    pub fn new(source: Arc<dyn SnapshotSource>, cache: SnapshotCache) -> Self {
        Self {
            source,
            cache,
            clock: Arc::new(SystemClock),
            build_lock: Mutex::new(()),
        }
    }

    /// Service backed by the Spotify API at `SPOTIFY_API_URL` with the
    /// configured cache ttl.
    pub fn from_env() -> Self {
        Self::with_client(
            SpotifyClient::from_env(),
            config::cache_ttl(),
            Arc::new(SystemClock),
        )
    }

    /// Service whose aggregator stamps snapshots with the same `clock` that
    /// decides their freshness.
    pub fn with_client(client: SpotifyClient, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let aggregator = Aggregator::new(client).with_clock(Arc::clone(&clock));
        Self::new(Arc::new(aggregator), SnapshotCache::new(ttl)).with_clock(clock)
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn cache(&self) -> &SnapshotCache {
        &self.cache
    }

    /// Whether the cache is empty, fresh or stale right now.
    pub async fn cache_state(&self) -> CacheState {
        self.cache.state(self.clock.now()).await
    }

    /// Names of the playlists with a track containing `query`, ignoring case.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidRequest`] if `token` or `query` is empty.
    ///   Whitespace is not trimmed; `query` is matched as given.
    /// - [`SearchError::FetchFailure`] if a needed rebuild fails; the cache
    ///   keeps whatever it held before.
    pub async fn search(&self, token: &str, query: &str) -> Result<Vec<String>, SearchError> {
        let (token, query) = utils::validate_params(Some(token), Some(query))?;
        let snapshot = self.snapshot(token).await?;
        Ok(snapshot.search(query))
    }

    async fn snapshot(&self, token: &str) -> Result<SharedSnapshot, SearchError> {
        if let Some(snapshot) = self.cache.fresh(self.clock.now()).await {
            return Ok(snapshot);
        }

        let _guard = self.build_lock.lock().await;

        // another request may have rebuilt while we waited
        if let Some(snapshot) = self.cache.fresh(self.clock.now()).await {
            return Ok(snapshot);
        }

        info!("Playlist cache is empty or stale, rebuilding");
        let snapshot = self.source.build(token).await?;
        Ok(self.cache.replace(snapshot).await)
    }
}
