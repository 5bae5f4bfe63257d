//! Search orchestrator
//!
//! Per search:
//! 1. Resolve the dataset
//! 2. Canonicalize the filter specification into a cache key
//! 3. Serve a cached page, or narrow candidates (index or full scan),
//!    run the pipeline and cache the page
//!
//! Loads build the store and index completely, publish them with one pointer
//! swap, then invalidate the dataset's cache.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use serde::Serialize;
use serde_json::Value;

use crate::cache::{CacheConfig, CacheStats, ResultCache};
use crate::config::EngineConfig;
use crate::dataset::{DatasetKind, RecordStore};
use crate::executor::{PaginatedResult, Pipeline};
use crate::observability::{
    log_event, log_event_with_fields, Event, Logger, MetricsRegistry, MetricsSnapshot,
    ObservationScope, Severity,
};
use crate::query::{unrecognized_keys, CacheKey, FilterSpec, RawQuery};

use super::errors::{EngineError, EngineResult};
use super::snapshot::{CandidateSource, DatasetSnapshot, SnapshotSummary};

/// The published snapshot and result cache of one dataset
#[derive(Debug)]
struct DatasetSlot {
    snapshot: RwLock<Arc<DatasetSnapshot>>,
    cache: ResultCache<PaginatedResult>,
}

impl DatasetSlot {
    fn new(kind: DatasetKind, cache: CacheConfig) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(DatasetSnapshot::empty(kind))),
            cache: ResultCache::new(cache),
        }
    }

    /// The guarded value is a single `Arc`, always valid, so poisoning is ignored.
    fn current(&self) -> Arc<DatasetSnapshot> {
        let guard = self.snapshot.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    fn publish(&self, snapshot: Arc<DatasetSnapshot>) -> Arc<DatasetSnapshot> {
        let mut guard = self.snapshot.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, snapshot)
    }
}

/// Indexed prefix-search engine over the airports, airlines and aircraft
/// datasets.
///
/// Safe to share across threads. Every dataset starts empty until loaded.
#[derive(Debug)]
pub struct SearchEngine {
    airports: DatasetSlot,
    airlines: DatasetSlot,
    aircraft: DatasetSlot,
    generation: AtomicU64,
    metrics: MetricsRegistry,
}

impl SearchEngine {
    /// Engine with per-dataset cache settings taken from `config`
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_caches(|kind| config.cache_for(kind))
    }

    /// Engine where every dataset uses the same cache settings
    pub fn with_cache_config(cache: CacheConfig) -> Self {
        Self::with_caches(|_| cache)
    }

    fn with_caches(cache_for: impl Fn(DatasetKind) -> CacheConfig) -> Self {
        log_event(Event::EngineStart);
        Self {
            airports: DatasetSlot::new(DatasetKind::Airports, cache_for(DatasetKind::Airports)),
            airlines: DatasetSlot::new(DatasetKind::Airlines, cache_for(DatasetKind::Airlines)),
            aircraft: DatasetSlot::new(DatasetKind::Aircraft, cache_for(DatasetKind::Aircraft)),
            generation: AtomicU64::new(0),
            metrics: MetricsRegistry::new(),
        }
    }

    fn slot(&self, kind: DatasetKind) -> &DatasetSlot {
        match kind {
            DatasetKind::Airports => &self.airports,
            DatasetKind::Airlines => &self.airlines,
            DatasetKind::Aircraft => &self.aircraft,
        }
    }

    /// Maps a caller-supplied name to a dataset, rejecting unknown names
    pub fn resolve(&self, name: &str) -> EngineResult<DatasetKind> {
        DatasetKind::from_name(name).ok_or_else(|| {
            self.metrics.increment_unknown_dataset_rejections();
            log_event_with_fields(Event::UnknownDataset, &[("dataset", name)]);
            EngineError::UnknownDataset(name.to_string())
        })
    }

    /// Builds and publishes a dataset from already-normalized records.
    pub fn load_dataset(&self, name: &str, raw_records: Vec<Value>) -> EngineResult<SnapshotSummary> {
        let kind = self.resolve(name)?;
        self.publish(kind, raw_records, "DATASET_LOAD")
    }

    /// Atomically replaces a dataset and drops its cached pages.
    ///
    /// A rejected reload leaves the previous snapshot and its cache untouched.
    pub fn reload(&self, name: &str, raw_records: Vec<Value>) -> EngineResult<SnapshotSummary> {
        let kind = self.resolve(name)?;
        self.publish(kind, raw_records, "DATASET_RELOAD")
    }

    fn publish(
        &self,
        kind: DatasetKind,
        raw_records: Vec<Value>,
        scope_name: &'static str,
    ) -> EngineResult<SnapshotSummary> {
        let scope = ObservationScope::with_fields(scope_name, &[("dataset", kind.name())]);

        let store = match RecordStore::load(kind, raw_records) {
            Ok(store) => store,
            Err(err) => {
                self.metrics.increment_dataset_load_failures();
                scope.fail(&err.to_string());
                return Err(err.into());
            }
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = Arc::new(DatasetSnapshot::new(generation, store));
        let summary = snapshot.summary();

        let slot = self.slot(kind);
        let previous = slot.publish(snapshot);
        slot.cache.invalidate_all();

        self.metrics.increment_dataset_loads();
        if previous.is_loaded() {
            self.metrics.increment_reloads();
            let previous_generation = previous.generation().to_string();
            log_event_with_fields(
                Event::CacheInvalidated,
                &[
                    ("dataset", kind.name()),
                    ("previous_generation", previous_generation.as_str()),
                ],
            );
        }

        let generation = generation.to_string();
        let records = summary.records.to_string();
        let indexed = summary.indexed_records.to_string();
        scope.complete_with_fields(&[
            ("generation", generation.as_str()),
            ("indexed_records", indexed.as_str()),
            ("records", records.as_str()),
        ]);

        Ok(summary)
    }

    /// Searches a dataset with transport-level parameters.
    ///
    /// Unknown keys and unparsable values are ignored. Only an unknown
    /// dataset name fails.
    pub fn search(&self, name: &str, params: &RawQuery) -> EngineResult<Arc<PaginatedResult>> {
        self.metrics.increment_searches();
        let kind = self.resolve(name)?;

        if Logger::enabled(Severity::Trace) {
            let ignored = unrecognized_keys(kind, params);
            if !ignored.is_empty() {
                let keys = ignored.join(",");
                log_event_with_fields(
                    Event::UnrecognizedParams,
                    &[("dataset", kind.name()), ("keys", keys.as_str())],
                );
            }
        }

        let spec = FilterSpec::parse(kind, params);
        Ok(self.execute(kind, &spec))
    }

    /// Searches a dataset with an already-built filter specification
    pub fn search_spec(&self, name: &str, spec: &FilterSpec) -> EngineResult<Arc<PaginatedResult>> {
        self.metrics.increment_searches();
        let kind = self.resolve(name)?;
        Ok(self.execute(kind, spec))
    }

    fn execute(&self, kind: DatasetKind, spec: &FilterSpec) -> Arc<PaginatedResult> {
        if !spec.is_constrained() {
            self.metrics.increment_unconstrained_searches();
            log_event_with_fields(Event::SearchUnconstrained, &[("dataset", kind.name())]);
            return Arc::new(PaginatedResult::empty(spec.page));
        }

        let slot = self.slot(kind);
        let snapshot = slot.current();
        let key = CacheKey::new(snapshot.generation(), spec).to_string();

        if let Some(hit) = slot.cache.get(&key) {
            self.metrics.increment_cache_hits();
            log_event_with_fields(
                Event::SearchCacheHit,
                &[("dataset", kind.name()), ("key", key.as_str())],
            );
            return hit;
        }
        self.metrics.increment_cache_misses();

        let (candidates, source) = snapshot.candidates(spec);
        match source {
            CandidateSource::Index => self.metrics.increment_index_lookups(),
            CandidateSource::FullScan => self.metrics.increment_full_scans(),
        }

        let result = Arc::new(Pipeline::run(candidates, spec));
        self.metrics.increment_pipeline_runs();

        if Logger::enabled(Severity::Trace) {
            let candidate_count = candidates.len().to_string();
            let total = result.total.to_string();
            log_event_with_fields(
                Event::SearchExecuted,
                &[
                    ("candidates", candidate_count.as_str()),
                    ("dataset", kind.name()),
                    ("key", key.as_str()),
                    ("source", source.as_str()),
                    ("total", total.as_str()),
                ],
            );
        }

        slot.cache.put(key, Arc::clone(&result));
        result
    }

    /// The currently published snapshot of a dataset
    pub fn snapshot(&self, name: &str) -> EngineResult<Arc<DatasetSnapshot>> {
        let kind = self.resolve(name)?;
        Ok(self.slot(kind).current())
    }

    pub fn cache_stats(&self, name: &str) -> EngineResult<CacheStats> {
        let kind = self.resolve(name)?;
        Ok(self.slot(kind).cache.stats())
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Engine-wide status: counters plus every dataset's snapshot and cache
    pub fn stats(&self) -> EngineStats {
        let datasets = DatasetKind::ALL
            .into_iter()
            .map(|kind| {
                let slot = self.slot(kind);
                let status = DatasetStatus {
                    snapshot: slot.current().summary(),
                    cache_entries: slot.cache.len(),
                    cache: slot.cache.stats(),
                };
                (kind.name().to_string(), status)
            })
            .collect();

        EngineStats {
            metrics: self.metrics.snapshot(),
            datasets,
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::with_cache_config(CacheConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetStatus {
    #[serde(flatten)]
    pub snapshot: SnapshotSummary,
    pub cache_entries: usize,
    pub cache: CacheStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub metrics: MetricsSnapshot,
    pub datasets: BTreeMap<String, DatasetStatus>,
}
