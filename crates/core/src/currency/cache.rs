//! Shared cache for the rate table and default currency.
//!
//! The converter talks to the cache through [`RateCache`] so tests and
//! alternative backends can be swapped in. [`MokaRateCache`] is the
//! in-process implementation used by the server.

use moka::Expiry;
use moka::sync::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::types::{Currency, RateTable};

/// Cache key for the code → factor table.
pub const RATES_KEY: &str = "__currencies__";

/// Cache key for the active default currency.
pub const DEFAULT_CURRENCY_KEY: &str = "__default_currency__";

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 16;

/// A value held in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    /// Factors of all active currencies.
    Rates(RateTable),
    /// The active default currency.
    DefaultCurrency(Currency),
}

/// Key-value cache with per-entry time-to-live.
pub trait RateCache: Send + Sync {
    /// Returns the live entry stored under `key`.
    fn get(&self, key: &str) -> Option<Arc<CacheEntry>>;

    /// Stores `entry` under `key`, expiring after `ttl`.
    fn set(&self, key: &str, entry: CacheEntry, ttl: Duration);

    /// Removes the entry stored under `key`.
    fn delete(&self, key: &str);
}

#[derive(Clone)]
struct Slot {
    entry: Arc<CacheEntry>,
    ttl: Duration,
}

/// Expires each slot after the ttl it was written with.
struct SlotExpiry;

impl Expiry<String, Slot> for SlotExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        slot: &Slot,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(slot.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        slot: &Slot,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(slot.ttl)
    }
}

/// In-process [`RateCache`] backed by Moka.
///
/// Thread-safe and cheap to clone; clones share the same storage.
#[derive(Clone)]
pub struct MokaRateCache {
    cache: Cache<String, Slot>,
}

impl MokaRateCache {
    /// Creates a cache with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a cache holding at most `max_capacity` entries.
    #[must_use]
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(SlotExpiry)
            .build();

        Self { cache }
    }
}

impl Default for MokaRateCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RateCache for MokaRateCache {
    fn get(&self, key: &str) -> Option<Arc<CacheEntry>> {
        self.cache.get(key).map(|slot| slot.entry)
    }

    fn set(&self, key: &str, entry: CacheEntry, ttl: Duration) {
        self.cache.insert(
            key.to_string(),
            Slot {
                entry: Arc::new(entry),
                ttl,
            },
        );
    }

    fn delete(&self, key: &str) {
        self.cache.invalidate(key);
    }
}
