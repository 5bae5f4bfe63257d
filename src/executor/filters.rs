//! Predicate filtering for query execution
//!
//! Filters records strictly according to the filter specification.
//! All predicates combine with AND. Missing and null fields never satisfy a
//! text or range predicate.

use serde_json::Value;

use crate::dataset::Record;
use crate::query::{FilterSpec, PresencePredicate, RangePredicate, TextPredicate};

/// Evaluates a filter specification against records
pub struct RecordFilter;

impl RecordFilter {
    /// Checks if a record matches every predicate of the specification
    pub fn matches(record: &Record, spec: &FilterSpec) -> bool {
        if let Some(code) = &spec.code {
            if !Self::code_match(record, code) {
                return false;
            }
        }

        if let Some(query) = &spec.query {
            if !Self::full_text_match(record, query) {
                return false;
            }
        }

        spec.text.iter().all(|pred| Self::text_match(record, pred))
            && spec.ranges.iter().all(|pred| Self::range_match(record, pred))
            && spec.presence.iter().all(|pred| Self::presence_match(record, pred))
    }

    /// Lowercased code starts with the lowercased prefix
    fn code_match(record: &Record, prefix: &str) -> bool {
        record
            .code_lower()
            .is_some_and(|code| code.starts_with(prefix))
    }

    /// Substring match over every string value, nested objects included
    fn full_text_match(record: &Record, needle: &str) -> bool {
        record
            .body()
            .values()
            .any(|value| Self::value_contains(value, needle))
    }

    fn value_contains(value: &Value, needle: &str) -> bool {
        match value {
            Value::String(s) => s.to_lowercase().contains(needle),
            Value::Object(map) => map.values().any(|v| Self::value_contains(v, needle)),
            Value::Array(items) => items.iter().any(|v| Self::value_contains(v, needle)),
            _ => false,
        }
    }

    fn text_match(record: &Record, pred: &TextPredicate) -> bool {
        match record.get(&pred.field) {
            Some(Value::String(s)) => s.to_lowercase().contains(&pred.needle),
            _ => false,
        }
    }

    /// Inclusive on both bounds; an absent bound is unbounded
    fn range_match(record: &Record, pred: &RangePredicate) -> bool {
        let Some(value) = record.get(&pred.field).and_then(Value::as_f64) else {
            return false;
        };

        pred.min.map_or(true, |min| value >= min) && pred.max.map_or(true, |max| value <= max)
    }

    fn presence_match(record: &Record, pred: &PresencePredicate) -> bool {
        record.has(&pred.field) == pred.present
    }
}
