//! Query executor subsystem for aerolookup
//!
//! The executor turns a candidate sequence and a filter specification into a
//! deterministic page of results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Filter candidates strictly according to predicates
//! 2. Apply sort (if specified)
//! 3. Apply offset and limit
//! 4. Return ordered results with the pre-pagination total
//!
//! # Invariants
//!
//! - Deterministic execution: same candidates + same spec = same page
//! - Sort is stable; missing/null sort values go last in either direction

mod filters;
mod pipeline;
mod result;
mod sorter;

pub use filters::RecordFilter;
pub use pipeline::Pipeline;
pub use result::PaginatedResult;
pub use sorter::ResultSorter;
