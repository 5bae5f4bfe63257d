//! LRU result cache with TTL expiry
//!
//! - Entries are immutable once inserted; a put replaces the whole entry
//! - An entry is never returned once its TTL has elapsed
//! - At capacity, the least-recently-used entry is evicted before insert
//! - Every operation runs under one mutex

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use serde::Serialize;

use super::config::CacheConfig;

/// Cache statistics for observability.
///
/// Passive only: they never influence caching decisions.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses (expired lookups included).
    pub misses: u64,
    /// Number of entries evicted due to capacity.
    pub evictions: u64,
    /// Number of entries dropped because their TTL elapsed.
    pub expirations: u64,
    /// Number of `invalidate_all` calls.
    pub invalidations: u64,
}

#[derive(Debug)]
struct CacheEntry<V> {
    value: Arc<V>,
    inserted_at: Instant,
    /// Position in the recency order
    tick: u64,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.inserted_at) >= ttl
    }
}

#[derive(Debug)]
struct CacheState<V> {
    entries: HashMap<String, CacheEntry<V>>,
    /// tick -> key, oldest first
    recency: BTreeMap<u64, String>,
    next_tick: u64,
    stats: CacheStats,
}

impl<V> CacheState<V> {
    fn new() -> Self {
        Self {
            entries: HashMap::new(),
            recency: BTreeMap::new(),
            next_tick: 0,
            stats: CacheStats::default(),
        }
    }

    fn take_tick(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }

    fn remove(&mut self, key: &str) -> Option<CacheEntry<V>> {
        let entry = self.entries.remove(key)?;
        self.recency.remove(&entry.tick);
        Some(entry)
    }
}

/// Bounded, time-evicting cache of computed results
#[derive(Debug)]
pub struct ResultCache<V> {
    config: CacheConfig,
    state: Mutex<CacheState<V>>,
}

impl<V> ResultCache<V> {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            config,
            state: Mutex::new(CacheState::new()),
        }
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Every critical section leaves the state consistent, so a poisoned
    /// lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, CacheState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the cached value if present and not expired.
    ///
    /// A hit makes the entry the most recently used. An expired entry is
    /// removed and reported as a miss.
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        let now = Instant::now();
        let ttl = self.config.ttl();
        let mut state = self.lock();

        let expired = match state.entries.get(key) {
            None => {
                state.stats.misses += 1;
                return None;
            }
            Some(entry) => entry.is_expired(now, ttl),
        };

        if expired {
            state.remove(key);
            state.stats.expirations += 1;
            state.stats.misses += 1;
            return None;
        }

        let tick = state.take_tick();
        let CacheState {
            entries,
            recency,
            stats,
            ..
        } = &mut *state;

        let entry = entries.get_mut(key)?;
        recency.remove(&entry.tick);
        recency.insert(tick, key.to_string());
        entry.tick = tick;
        stats.hits += 1;

        Some(Arc::clone(&entry.value))
    }

    /// Inserts or replaces `key`.
    ///
    /// When a new key would exceed `max_entries`, the least-recently-used
    /// entry is evicted first.
    pub fn put(&self, key: impl Into<String>, value: Arc<V>) {
        if self.config.max_entries == 0 {
            return;
        }

        let key = key.into();
        let now = Instant::now();
        let mut state = self.lock();

        if state.remove(&key).is_none() {
            while state.entries.len() >= self.config.max_entries {
                let Some((_, oldest)) = state.recency.pop_first() else {
                    break;
                };
                state.entries.remove(&oldest);
                state.stats.evictions += 1;
            }
        }

        let tick = state.take_tick();
        state.recency.insert(tick, key.clone());
        state.entries.insert(
            key,
            CacheEntry {
                value,
                inserted_at: now,
                tick,
            },
        );
    }

    /// Drops every entry
    pub fn invalidate_all(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.recency.clear();
        state.stats.invalidations += 1;
    }

    /// Number of stored entries, expired ones not yet collected included
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats.clone()
    }

    /// Keys from least to most recently used
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.lock().recency.values().cloned().collect()
    }
}
