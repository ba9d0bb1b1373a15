use std::{sync::Arc, time::Duration};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::types::{SharedSnapshot, Snapshot};

/// What the slot holds at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Fresh(DateTime<Utc>),
    Stale(DateTime<Utc>),
}

impl CacheState {
    pub fn label(&self) -> &'static str {
        match self {
            CacheState::Empty => "empty",
            CacheState::Fresh(_) => "fresh",
            CacheState::Stale(_) => "stale",
        }
    }

    /// Timestamp of the held snapshot, if any.
    pub fn built_at(&self) -> Option<DateTime<Utc>> {
        match self {
            CacheState::Empty => None,
            CacheState::Fresh(at) | CacheState::Stale(at) => Some(*at),
        }
    }
}

/// Single-slot holder for the most recent snapshot.
///
/// The slot starts empty, is overwritten on every successful build and is
/// never cleared. Freshness is decided at read time: a snapshot older than
/// `ttl` stays in the slot but [`SnapshotCache::fresh`] no longer returns it.
pub struct SnapshotCache {
    slot: RwLock<Option<SharedSnapshot>>,
    ttl: Duration,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The held snapshot if its age at `now` is at most the ttl.
    pub async fn fresh(&self, now: DateTime<Utc>) -> Option<SharedSnapshot> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|snapshot| self.is_fresh(snapshot, now))
            .cloned()
    }

    pub async fn state(&self, now: DateTime<Utc>) -> CacheState {
        match self.slot.read().await.as_ref() {
            None => CacheState::Empty,
            Some(snapshot) if self.is_fresh(snapshot, now) => {
                CacheState::Fresh(snapshot.timestamp)
            }
            Some(snapshot) => CacheState::Stale(snapshot.timestamp),
        }
    }

    /// The held snapshot regardless of age.
    pub async fn current(&self) -> Option<SharedSnapshot> {
        self.slot.read().await.clone()
    }

    /// Replaces whatever the slot holds and returns the stored snapshot.
    pub async fn replace(&self, snapshot: Snapshot) -> SharedSnapshot {
        let snapshot = Arc::new(snapshot);
        *self.slot.write().await = Some(Arc::clone(&snapshot));
        snapshot
    }

    fn is_fresh(&self, snapshot: &Snapshot, now: DateTime<Utc>) -> bool {
        // a timestamp in the future counts as age zero
        let age = (now - snapshot.timestamp).to_std().unwrap_or_default();
        age <= self.ttl
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(crate::config::DEFAULT_CACHE_TTL_SECONDS))
    }
}
