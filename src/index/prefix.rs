//! Prefix index for aerolookup
//!
//! Maps every prefix of each lowercased code to the records sharing it, in
//! store order. Lowercasing may lengthen a code (`İ` becomes `i̇`), so buckets
//! follow the lowercased code's char boundaries rather than the original's.
//!
//! # API
//!
//! - `build(store)` - Single pass over the store
//! - `lookup(prefix)` - O(1) expected bucket fetch

use std::collections::HashMap;
use std::sync::Arc;

use crate::dataset::{DatasetKind, Record, RecordStore};

/// Immutable prefix index derived from one record store
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    kind: DatasetKind,
    max_code_length: usize,
    entries: HashMap<String, Vec<Arc<Record>>>,
    indexed_records: usize,
    /// Char count of the longest lowercased code
    longest_key: usize,
}

impl PrefixIndex {
    /// Builds the index from a record store.
    ///
    /// Each indexable record is appended to the bucket of every prefix of its
    /// lowercased code. Appending in store order keeps every bucket ordered by
    /// load position.
    pub fn build(store: &RecordStore) -> Self {
        let kind = store.kind();
        let max_code_length = kind.max_code_length();
        let mut entries: HashMap<String, Vec<Arc<Record>>> =
            HashMap::with_capacity(store.indexable_count() * max_code_length);
        let mut indexed_records = 0;
        let mut longest_key = 0;

        for record in store.all() {
            let Some(code) = record.code_lower() else {
                continue;
            };

            indexed_records += 1;
            longest_key = longest_key.max(code.chars().count());

            for (end, _) in code
                .char_indices()
                .skip(1)
                .chain(std::iter::once((code.len(), ' ')))
            {
                entries
                    .entry(code[..end].to_string())
                    .or_default()
                    .push(Arc::clone(record));
            }
        }

        Self {
            kind,
            max_code_length,
            entries,
            indexed_records,
            longest_key,
        }
    }

    /// Returns every record whose code starts with `prefix`, case-insensitively.
    ///
    /// An empty prefix or one longer than the dataset's maximum code length
    /// yields an empty slice. Length is counted before lowercasing, the same
    /// way codes are bounded at load.
    pub fn lookup(&self, prefix: &str) -> &[Arc<Record>] {
        let length = prefix.chars().count();
        if length == 0 || length > self.max_code_length {
            return &[];
        }

        let key = prefix.to_lowercase();
        if key.chars().count() > self.longest_key {
            return &[];
        }

        self.entries
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn kind(&self) -> DatasetKind {
        self.kind
    }

    /// Number of distinct prefixes
    pub fn bucket_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of records that entered the index
    pub fn indexed_records(&self) -> usize {
        self.indexed_records
    }
}
