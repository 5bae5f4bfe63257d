//! Index subsystem for aerolookup
//!
//! Indexes are derived, in-memory-only state built from a record store.
//!
//! # Design Principles
//!
//! - Derived state: the record store stays the source of truth
//! - Built once per snapshot, never updated in place
//! - Deterministic: bucket order equals store order
//!
//! # Invariants
//!
//! - `lookup(p)` equals a brute-force starts-with scan for 1 <= len(p) <= max
//! - Prefixes longer than the dataset's code length match nothing

mod prefix;

pub use prefix::PrefixIndex;
