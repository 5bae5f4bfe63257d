//! Metrics registry for aerolookup
//!
//! - Counters only, monotonic
//! - Reset only when the engine is created
//! - Thread-safe, lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for one engine
///
/// All counters use Relaxed ordering; readers only need eventually exact values.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Search calls, rejected ones included
    searches: AtomicU64,
    /// Searches answered from the result cache
    cache_hits: AtomicU64,
    /// Searches that had to run the pipeline
    cache_misses: AtomicU64,
    /// Pipeline executions
    pipeline_runs: AtomicU64,
    /// Candidate sets taken from a prefix index bucket
    index_lookups: AtomicU64,
    /// Candidate sets taken from a full store scan
    full_scans: AtomicU64,
    /// Searches without any predicate
    unconstrained_searches: AtomicU64,
    /// Searches or reloads naming an unknown dataset
    unknown_dataset_rejections: AtomicU64,
    /// Successful dataset loads (reloads included)
    dataset_loads: AtomicU64,
    /// Rejected dataset loads
    dataset_load_failures: AtomicU64,
    /// Loads that replaced an already published snapshot
    reloads: AtomicU64,
}

macro_rules! counter {
    ($incr:ident, $field:ident) => {
        pub fn $incr(&self) {
            self.$field.fetch_add(1, Ordering::Relaxed);
        }
    };
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    counter!(increment_searches, searches);
    counter!(increment_cache_hits, cache_hits);
    counter!(increment_cache_misses, cache_misses);
    counter!(increment_pipeline_runs, pipeline_runs);
    counter!(increment_index_lookups, index_lookups);
    counter!(increment_full_scans, full_scans);
    counter!(increment_unconstrained_searches, unconstrained_searches);
    counter!(increment_unknown_dataset_rejections, unknown_dataset_rejections);
    counter!(increment_dataset_loads, dataset_loads);
    counter!(increment_dataset_load_failures, dataset_load_failures);
    counter!(increment_reloads, reloads);

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            searches: self.searches.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            pipeline_runs: self.pipeline_runs.load(Ordering::Relaxed),
            index_lookups: self.index_lookups.load(Ordering::Relaxed),
            full_scans: self.full_scans.load(Ordering::Relaxed),
            unconstrained_searches: self.unconstrained_searches.load(Ordering::Relaxed),
            unknown_dataset_rejections: self.unknown_dataset_rejections.load(Ordering::Relaxed),
            dataset_loads: self.dataset_loads.load(Ordering::Relaxed),
            dataset_load_failures: self.dataset_load_failures.load(Ordering::Relaxed),
            reloads: self.reloads.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub searches: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub pipeline_runs: u64,
    pub index_lookups: u64,
    pub full_scans: u64,
    pub unconstrained_searches: u64,
    pub unknown_dataset_rejections: u64,
    pub dataset_loads: u64,
    pub dataset_load_failures: u64,
    pub reloads: u64,
}
