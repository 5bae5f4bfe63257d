//! Result Cache Behavior Tests
//!
//! Tests for cache invariants:
//! - Size never exceeds max_entries; the LRU key is the one evicted
//! - Entries are never returned after their TTL
//! - invalidate_all empties the cache

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use aerolookup::cache::{CacheConfig, ResultCache};
use proptest::prelude::*;

// =============================================================================
// Helper Functions
// =============================================================================

fn cache(max_entries: usize) -> ResultCache<usize> {
    ResultCache::new(CacheConfig::new(max_entries, Duration::from_secs(3600)))
}

#[derive(Debug, Clone)]
enum Op {
    Get(u8),
    Put(u8),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![(0u8..24).prop_map(Op::Get), (0u8..24).prop_map(Op::Put)]
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// After any operation sequence the cache holds at most max_entries keys
    /// and agrees with a simple recency-list model.
    #[test]
    fn prop_eviction_bound_and_lru_order(
        max_entries in 1usize..8,
        ops in prop::collection::vec(arb_op(), 0..200),
    ) {
        let cache = cache(max_entries);
        // least recently used first
        let mut model: Vec<u8> = Vec::new();

        for op in ops {
            match op {
                Op::Get(k) => {
                    let hit = cache.get(&k.to_string()).is_some();
                    prop_assert_eq!(hit, model.contains(&k));
                    if hit {
                        model.retain(|m| *m != k);
                        model.push(k);
                    }
                }
                Op::Put(k) => {
                    cache.put(k.to_string(), Arc::new(k as usize));
                    if model.contains(&k) {
                        model.retain(|m| *m != k);
                    } else if model.len() == max_entries {
                        model.remove(0);
                    }
                    model.push(k);
                }
            }
            prop_assert!(cache.len() <= max_entries);
        }

        let expected: Vec<String> = model.iter().map(u8::to_string).collect();
        prop_assert_eq!(cache.keys_by_recency(), expected);
    }
}

// =============================================================================
// Eviction
// =============================================================================

/// Inserting one more key than capacity evicts the least recently used one.
#[test]
fn test_lru_key_is_evicted() {
    let cache = cache(3);
    cache.put("a", Arc::new(1));
    cache.put("b", Arc::new(2));
    cache.put("c", Arc::new(3));

    assert!(cache.get("a").is_some());
    cache.put("d", Arc::new(4));

    assert_eq!(cache.len(), 3);
    assert!(cache.get("b").is_none());
    assert_eq!(cache.keys_by_recency(), vec!["c", "a", "d"]);
    assert_eq!(cache.stats().evictions, 1);
}

// =============================================================================
// TTL
// =============================================================================

/// An entry with a 1ms TTL is gone after 2ms, without any LRU eviction.
#[test]
fn test_ttl_expiry() {
    let cache: ResultCache<usize> =
        ResultCache::new(CacheConfig::new(10, Duration::from_millis(1)));
    cache.put("key", Arc::new(7));

    thread::sleep(Duration::from_millis(2));

    assert!(cache.get("key").is_none());
    let stats = cache.stats();
    assert_eq!(stats.expirations, 1);
    assert_eq!(stats.evictions, 0);
    assert_eq!(stats.misses, 1);
}

/// A hit refreshes recency but not the TTL clock.
#[test]
fn test_hit_does_not_extend_ttl() {
    let cache: ResultCache<usize> =
        ResultCache::new(CacheConfig::new(10, Duration::from_millis(30)));
    cache.put("key", Arc::new(7));

    thread::sleep(Duration::from_millis(10));
    assert!(cache.get("key").is_some());

    thread::sleep(Duration::from_millis(40));
    assert!(cache.get("key").is_none());
}

// =============================================================================
// Invalidation
// =============================================================================

#[test]
fn test_invalidate_all() {
    let cache = cache(10);
    for i in 0..5 {
        cache.put(format!("k{}", i), Arc::new(i));
    }

    cache.invalidate_all();

    assert!(cache.is_empty());
    assert!((0..5).all(|i| cache.get(&format!("k{}", i)).is_none()));
    assert_eq!(cache.stats().invalidations, 1);
}
