//! Result sorting for query execution
//!
//! Stable sort on one field. Records whose sort field is missing or null go
//! last in both directions.

use std::cmp::Ordering;
use std::sync::Arc;

use serde_json::Value;

use crate::dataset::Record;
use crate::query::{SortDirection, SortSpec};

/// Precomputed sort key
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Bool(bool),
    Number(f64),
    Text { folded: String, raw: String },
    Other,
}

impl SortKey {
    fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Bool(b) => Some(SortKey::Bool(*b)),
            Value::Number(n) => n.as_f64().map(SortKey::Number),
            Value::String(s) => Some(SortKey::Text {
                folded: s.to_lowercase(),
                raw: s.clone(),
            }),
            Value::Array(_) | Value::Object(_) => Some(SortKey::Other),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Bool(_) => 0,
            SortKey::Number(_) => 1,
            SortKey::Text { .. } => 2,
            SortKey::Other => 3,
        }
    }

    /// Ordering rules:
    /// - bool < number < string < array/object
    /// - strings compare case-insensitively, then by raw bytes
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (
                SortKey::Text { folded: fa, raw: ra },
                SortKey::Text { folded: fb, raw: rb },
            ) => fa.cmp(fb).then_with(|| ra.cmp(rb)),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

/// Sorts result records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records according to the sort specification.
    ///
    /// Sort is stable: ties keep their incoming order.
    pub fn sort(records: &mut Vec<Arc<Record>>, sort_spec: &SortSpec) {
        let mut keyed: Vec<(Option<SortKey>, Arc<Record>)> = records
            .drain(..)
            .map(|record| {
                let key = record.get(&sort_spec.field).and_then(SortKey::of);
                (key, record)
            })
            .collect();

        keyed.sort_by(|(a, _), (b, _)| Self::compare(a.as_ref(), b.as_ref(), sort_spec.direction));

        records.extend(keyed.into_iter().map(|(_, record)| record));
    }

    fn compare(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                let ordering = a.compare(b);
                match direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            }
        }
    }
}
