//! Record store
//!
//! Holds one dataset in load order. Immutable once built.

use std::sync::Arc;

use serde_json::Value;

use super::errors::DatasetResult;
use super::kind::DatasetKind;
use super::record::Record;

/// Immutable, ordered collection of one dataset's records
#[derive(Debug, Clone)]
pub struct RecordStore {
    kind: DatasetKind,
    records: Vec<Arc<Record>>,
    indexable: usize,
}

impl RecordStore {
    /// Builds a store from already-normalized records.
    ///
    /// The first invalid record rejects the whole load.
    pub fn load(kind: DatasetKind, raw_records: Vec<Value>) -> DatasetResult<Self> {
        let mut records = Vec::with_capacity(raw_records.len());
        let mut indexable = 0;

        for (position, raw) in raw_records.into_iter().enumerate() {
            let record = Record::from_raw(kind, position, raw)?;
            if record.is_indexable() {
                indexable += 1;
            }
            records.push(Arc::new(record));
        }

        Ok(Self {
            kind,
            records,
            indexable,
        })
    }

    /// Empty store, used before a dataset has been loaded
    pub fn empty(kind: DatasetKind) -> Self {
        Self {
            kind,
            records: Vec::new(),
            indexable: 0,
        }
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// All records in load order
    pub fn all(&self) -> &[Arc<Record>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records carrying a usable code
    pub fn indexable_count(&self) -> usize {
        self.indexable
    }
}
