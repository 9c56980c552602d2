//! localStorage wrapper around [`shared::CacheEntry`]. The cache is purely
//! an optimization: read and write failures are logged on the debug channel
//! and treated as a miss, never surfaced to the member.

use gloo_console::debug;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::CacheEntry;
use time::OffsetDateTime;

pub fn load<T: DeserializeOwned>(key: &str) -> Option<CacheEntry<T>> {
    match LocalStorage::get::<CacheEntry<T>>(key) {
        Ok(entry) => Some(entry),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            // Corrupt or stale-shaped entries count as a miss.
            debug!("cache read failed for", key, err.to_string());
            None
        }
    }
}

pub fn store<T: Serialize>(key: &str, data: &T) {
    let entry = CacheEntry::new(data, OffsetDateTime::now_utc());
    if let Err(err) = LocalStorage::set(key, &entry) {
        debug!("cache write failed for", key, err.to_string());
    }
}

pub fn is_stale<T>(entry: &CacheEntry<T>) -> bool {
    entry.is_stale(OffsetDateTime::now_utc())
}
