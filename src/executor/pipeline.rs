//! Filter / sort / paginate pipeline
//!
//! Execution flow (strict order):
//! 1. Refine candidates with every predicate (AND)
//! 2. Apply sort (if specified)
//! 3. Paginate and count
//!
//! Pure function of (candidates, spec): no caching, no logging.

use std::sync::Arc;

use crate::dataset::Record;
use crate::query::FilterSpec;

use super::filters::RecordFilter;
use super::result::PaginatedResult;
use super::sorter::ResultSorter;

/// Runs the pipeline over a candidate sequence
pub struct Pipeline;

impl Pipeline {
    /// Produces the final page for `spec` from `candidates`.
    ///
    /// Candidates may come from a prefix index bucket or a full store scan;
    /// the code predicate is re-checked either way.
    pub fn run(candidates: &[Arc<Record>], spec: &FilterSpec) -> PaginatedResult {
        // Step 1: refine
        let mut refined: Vec<Arc<Record>> = candidates
            .iter()
            .filter(|record| RecordFilter::matches(record, spec))
            .cloned()
            .collect();

        // Step 2: sort
        if let Some(sort_spec) = &spec.sort {
            ResultSorter::sort(&mut refined, sort_spec);
        }

        // Step 3: paginate
        PaginatedResult::paginate(refined, spec.page)
    }
}
