//! aerolookup - indexed prefix search and result caching over airport,
//! airline and aircraft reference data
//!
//! ```ignore
//! use aerolookup::engine::SearchEngine;
//! use aerolookup::query::RawQuery;
//!
//! let engine = SearchEngine::default();
//! engine.load_dataset("airports", records)?;
//!
//! let mut params = RawQuery::new();
//! params.insert("iataCode".into(), "LHR".into());
//! let page = engine.search("airports", &params)?;
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod executor;
pub mod index;
pub mod observability;
pub mod query;
