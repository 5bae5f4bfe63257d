//! Result cache subsystem for aerolookup
//!
//! One cache instance per dataset, so keys never collide across datasets and
//! each can be sized independently. Caching is an optimization only: a hit
//! returns exactly what the pipeline produced for the same key.

mod config;
mod lru;

pub use config::CacheConfig;
pub use lru::{CacheStats, ResultCache};
