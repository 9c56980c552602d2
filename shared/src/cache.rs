use serde::{Serialize, Deserialize};
use time::{Duration, OffsetDateTime};

pub const ELECTIONS_LIST_KEY: &str = "elections_list_cache";
pub const NOMINATION_ELECTIONS_KEY: &str = "nomination_elections_cache";
pub const NOMINATION_CANDIDATES_KEY: &str = "nomination_candidates_cache";

/// How long a cached payload is served without triggering a refetch.
pub const STALE_AFTER: Duration = Duration::minutes(5);

/// Data/timestamp wrapper stored under a fixed localStorage key. Stale data
/// is still rendered immediately; staleness only means a background refresh
/// should run. There is no versioning field, so a shape change in `data`
/// requires renaming the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    #[serde(with = "time::serde::timestamp")]
    pub timestamp: OffsetDateTime,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, now: OffsetDateTime) -> Self {
        Self { data, timestamp: now }
    }

    pub fn age(&self, now: OffsetDateTime) -> Duration {
        now - self.timestamp
    }

    /// Fresh strictly below the threshold; stale at exactly the threshold
    /// and beyond.
    pub fn is_stale(&self, now: OffsetDateTime) -> bool {
        self.age(now) >= STALE_AFTER
    }
}
