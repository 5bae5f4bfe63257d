//! Result cache configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Sizing and staleness bounds for one dataset's result cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum cached pages (default: 500)
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Entry lifetime in milliseconds (default: one hour)
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,
}

fn default_max_entries() -> usize {
    500
}

fn default_ttl_ms() -> u64 {
    3_600_000
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            ttl_ms: default_ttl_ms(),
        }
    }
}

impl CacheConfig {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            max_entries,
            ttl_ms: ttl.as_millis().min(u64::MAX as u128) as u64,
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}
