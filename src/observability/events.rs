//! Observable events emitted by aerolookup
//!
//! Events are explicit and typed. Each carries its default severity.

use std::fmt;

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Engine constructed
    EngineStart,
    /// Configuration file read and validated
    ConfigLoaded,
    /// Serve loop ready for requests
    ServeStart,
    /// Serve loop reached end of input
    ServeStop,

    // Datasets
    /// Result cache dropped after a reload
    CacheInvalidated,

    // Searches
    /// Page served from the result cache
    SearchCacheHit,
    /// Pipeline ran for a search
    SearchExecuted,
    /// Search carried no predicate and no `all` flag
    SearchUnconstrained,
    /// Search named a dataset the engine does not know
    UnknownDataset,
    /// Query parameters the dataset does not recognize
    UnrecognizedParams,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::EngineStart => "ENGINE_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ServeStart => "SERVE_START",
            Event::ServeStop => "SERVE_STOP",
            Event::CacheInvalidated => "CACHE_INVALIDATED",
            Event::SearchCacheHit => "SEARCH_CACHE_HIT",
            Event::SearchExecuted => "SEARCH_EXECUTED",
            Event::SearchUnconstrained => "SEARCH_UNCONSTRAINED",
            Event::UnknownDataset => "UNKNOWN_DATASET",
            Event::UnrecognizedParams => "UNRECOGNIZED_PARAMS",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::SearchCacheHit | Event::SearchExecuted | Event::UnrecognizedParams => {
                Severity::Trace
            }
            Event::SearchUnconstrained | Event::UnknownDataset => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
