//! Published dataset snapshots

use std::sync::Arc;

use serde::Serialize;

use crate::dataset::{DatasetKind, Record, RecordStore};
use crate::index::PrefixIndex;
use crate::query::FilterSpec;

/// Where a search took its candidate records from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateSource {
    /// A prefix index bucket
    Index,
    /// Every record in the store
    FullScan,
}

impl CandidateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateSource::Index => "index",
            CandidateSource::FullScan => "full_scan",
        }
    }
}

/// A record store and the prefix index built from it.
///
/// Immutable once published. Generation 0 is the empty placeholder every
/// dataset starts with; loads are numbered from 1.
#[derive(Debug)]
pub struct DatasetSnapshot {
    generation: u64,
    store: RecordStore,
    index: PrefixIndex,
}

impl DatasetSnapshot {
    pub fn new(generation: u64, store: RecordStore) -> Self {
        let index = PrefixIndex::build(&store);
        Self {
            generation,
            store,
            index,
        }
    }

    pub fn empty(kind: DatasetKind) -> Self {
        Self::new(0, RecordStore::empty(kind))
    }

    pub fn kind(&self) -> DatasetKind {
        self.store.kind()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loaded(&self) -> bool {
        self.generation > 0
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    /// Narrows the scan for `spec`.
    ///
    /// A code prefix within the dataset's code length uses the index;
    /// anything else scans the store and leaves the pipeline to re-check.
    pub fn candidates(&self, spec: &FilterSpec) -> (&[Arc<Record>], CandidateSource) {
        match &spec.code {
            Some(code) if code.chars().count() <= self.kind().max_code_length() => {
                (self.index.lookup(code), CandidateSource::Index)
            }
            _ => (self.store.all(), CandidateSource::FullScan),
        }
    }

    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            dataset: self.kind(),
            generation: self.generation,
            records: self.store.len(),
            indexed_records: self.index.indexed_records(),
            prefix_buckets: self.index.bucket_count(),
        }
    }
}

/// Serializable shape of a snapshot, for status output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotSummary {
    pub dataset: DatasetKind,
    pub generation: u64,
    pub records: usize,
    pub indexed_records: usize,
    pub prefix_buckets: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> DatasetSnapshot {
        let store = RecordStore::load(
            DatasetKind::Airlines,
            vec![
                json!({"iataCode": "BA", "name": "British Airways"}),
                json!({"iataCode": "B6", "name": "JetBlue"}),
                json!({"name": "Codeless Air"}),
            ],
        )
        .unwrap();
        DatasetSnapshot::new(3, store)
    }

    #[test]
    fn test_empty_placeholder() {
        let snapshot = DatasetSnapshot::empty(DatasetKind::Aircraft);
        assert!(!snapshot.is_loaded());
        assert_eq!(snapshot.store().len(), 0);
        assert_eq!(snapshot.index().bucket_count(), 0);
    }

    #[test]
    fn test_short_code_uses_index() {
        let snapshot = snapshot();
        let (candidates, source) = snapshot.candidates(&FilterSpec::new().with_code("b"));
        assert_eq!(source, CandidateSource::Index);
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_long_code_scans() {
        let snapshot = snapshot();
        let (candidates, source) = snapshot.candidates(&FilterSpec::new().with_code("BAW"));
        assert_eq!(source, CandidateSource::FullScan);
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_no_code_scans() {
        let snapshot = snapshot();
        let (_, source) = snapshot.candidates(&FilterSpec::new().with_query("jet"));
        assert_eq!(source, CandidateSource::FullScan);
    }

    #[test]
    fn test_summary() {
        let summary = snapshot().summary();
        assert_eq!(summary.generation, 3);
        assert_eq!(summary.records, 3);
        assert_eq!(summary.indexed_records, 2);
        // b, ba, b6
        assert_eq!(summary.prefix_buckets, 3);
    }
}
