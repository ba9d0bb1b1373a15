mod aggregator;
mod cache;
mod clock;
mod search;

pub use aggregator::Aggregator;
pub use aggregator::SnapshotSource;
pub use cache::CacheState;
pub use cache::SnapshotCache;
pub use clock::Clock;
pub use clock::SystemClock;
pub use search::SearchService;
