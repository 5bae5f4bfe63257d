//! Query orchestration for aerolookup
//!
//! `SearchEngine` is the single entry point: it owns one published snapshot
//! (record store + prefix index) and one result cache per dataset.

mod errors;
mod orchestrator;
mod snapshot;

pub use errors::{EngineError, EngineResult};
pub use orchestrator::{DatasetStatus, EngineStats, SearchEngine};
pub use snapshot::{CandidateSource, DatasetSnapshot, SnapshotSummary};
