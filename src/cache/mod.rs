mod key;

use std::time::Duration;

use dashmap::DashMap;
use log::trace;
use tokio::time::Instant;

pub use key::CacheKey;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry<T> {
    value: T,
    captured_at: Instant,
}

/// In-memory cache whose entries expire a fixed time after they were set.
///
/// Expiry is only checked on access: a stale entry is dropped by the `get`
/// that finds it. Concurrent misses on the same key are not coalesced, the
/// last `set` wins.
pub struct TtlCache<T> {
    entries: DashMap<String, CacheEntry<T>>,
    ttl: Duration,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        TtlCache {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, key: &str) -> Option<T> {
        {
            let entry = self.entries.get(key)?;
            if entry.captured_at.elapsed() < self.ttl {
                trace!("Cache hit for {}", key);
                return Some(entry.value.clone());
            }
        }

        trace!("Cache entry {} expired", key);
        // Another task may have refreshed the key in the meantime.
        self.entries
            .remove_if(key, |_, entry| entry.captured_at.elapsed() >= self.ttl);
        None
    }

    pub fn set(&self, key: impl Into<String>, value: T) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                captured_at: Instant::now(),
            },
        );
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        TtlCache::new(DEFAULT_TTL)
    }
}
