//! Query representation for aerolookup
//!
//! A search is described by a closed `FilterSpec`. Raw parameters are parsed
//! against the dataset's filter catalog; unrecognized keys are ignored so that
//! client query strings stay stable as the catalog evolves.

mod canonical;
mod parser;
mod spec;

pub use canonical::{signature, CacheKey};
pub use parser::{unrecognized_keys, RawQuery};
pub use spec::{
    normalize_text, FilterSpec, Page, PresencePredicate, RangePredicate, SortDirection, SortSpec,
    TextPredicate, DEFAULT_LIMIT, MAX_LIMIT,
};
