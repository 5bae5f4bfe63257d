//! Canonical cache keys
//!
//! Two filter specifications that select the same page produce the same key.
//! The signature is a JSON object with sorted keys so that values can never
//! bleed into one another.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{json, Value};

use super::spec::FilterSpec;

/// Cache key for one (snapshot generation, filter specification) pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    generation: u64,
    signature: String,
}

impl CacheKey {
    pub fn new(generation: u64, spec: &FilterSpec) -> Self {
        Self {
            generation,
            signature: signature(spec),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}:{}", self.generation, self.signature)
    }
}

/// Deterministic signature of a filter specification.
///
/// Predicate order does not matter; pagination does.
pub fn signature(spec: &FilterSpec) -> String {
    let mut parts: BTreeMap<String, Value> = BTreeMap::new();

    if let Some(code) = &spec.code {
        parts.insert("code".into(), json!(code));
    }
    if let Some(query) = &spec.query {
        parts.insert("query".into(), json!(query));
    }
    if spec.match_all {
        parts.insert("all".into(), json!(true));
    }

    let mut text: BTreeMap<String, Vec<&str>> = BTreeMap::new();
    for pred in &spec.text {
        text.entry(format!("text.{}", pred.field))
            .or_default()
            .push(&pred.needle);
    }
    for (key, mut needles) in text {
        needles.sort_unstable();
        needles.dedup();
        parts.insert(key, json!(needles));
    }

    for range in &spec.ranges {
        parts.insert(
            format!("range.{}", range.field),
            json!([range.min, range.max]),
        );
    }

    let mut presence: BTreeMap<String, Vec<bool>> = BTreeMap::new();
    for pred in &spec.presence {
        presence
            .entry(format!("has.{}", pred.field))
            .or_default()
            .push(pred.present);
    }
    for (key, mut flags) in presence {
        flags.sort_unstable();
        flags.dedup();
        parts.insert(key, json!(flags));
    }

    if let Some(sort) = &spec.sort {
        parts.insert("sort".into(), json!([sort.field, sort.direction.as_str()]));
    }
    parts.insert("limit".into(), json!(spec.page.limit()));
    parts.insert("offset".into(), json!(spec.page.offset()));

    Value::Object(parts.into_iter().collect()).to_string()
}
