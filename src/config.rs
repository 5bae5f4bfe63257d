//! Engine configuration
//!
//! A JSON file where every key is optional:
//!
//! ```json
//! {
//!   "log_level": "info",
//!   "cache": { "max_entries": 500, "ttl_ms": 3600000 },
//!   "datasets": {
//!     "airports": { "path": "data/airports.json" },
//!     "airlines": { "path": "data/airlines.json", "cache": { "max_entries": 100 } }
//!   }
//! }
//! ```
//!
//! Relative dataset paths resolve against the directory holding the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::CacheConfig;
use crate::dataset::DatasetKind;
use crate::observability::Severity;

/// Configuration errors are fatal at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("invalid config JSON: {0}")]
    Malformed(String),

    #[error("{0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn code(&self) -> &'static str {
        "LOOKUP_CONFIG_ERROR"
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Per-dataset settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// JSON array file holding the dataset's records
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Overrides the engine-wide cache settings for this dataset
    #[serde(default)]
    pub cache: Option<CacheConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine-wide result cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Keyed by dataset name
    #[serde(default)]
    pub datasets: BTreeMap<String, DatasetConfig>,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            datasets: BTreeMap::new(),
            log_level: default_log_level(),
            base_dir: None,
        }
    }
}

impl EngineConfig {
    /// Load and validate configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut config = Self::from_json_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: EngineConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        validate_cache("cache", &self.cache)?;

        for (name, dataset) in &self.datasets {
            if DatasetKind::from_name(name).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "unknown dataset '{}' (expected airports, airlines or aircraft)",
                    name
                )));
            }
            if let Some(cache) = &dataset.cache {
                validate_cache(&format!("datasets.{}.cache", name), cache)?;
            }
        }

        self.severity()?;
        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> ConfigResult<Severity> {
        self.log_level.parse().map_err(ConfigError::Invalid)
    }

    /// Effective cache settings for one dataset
    pub fn cache_for(&self, kind: DatasetKind) -> CacheConfig {
        self.dataset(kind)
            .and_then(|dataset| dataset.cache)
            .unwrap_or(self.cache)
    }

    fn dataset(&self, kind: DatasetKind) -> Option<&DatasetConfig> {
        self.datasets
            .iter()
            .find(|(name, _)| DatasetKind::from_name(name) == Some(kind))
            .map(|(_, dataset)| dataset)
    }

    /// Resolved file path for one dataset, if configured
    pub fn dataset_path(&self, kind: DatasetKind) -> Option<PathBuf> {
        let path = self.dataset(kind)?.path.as_ref()?;
        match &self.base_dir {
            Some(base) if path.is_relative() => Some(base.join(path)),
            _ => Some(path.clone()),
        }
    }

    /// Every dataset with a configured file, in fixed dataset order
    pub fn dataset_paths(&self) -> Vec<(DatasetKind, PathBuf)> {
        DatasetKind::ALL
            .into_iter()
            .filter_map(|kind| self.dataset_path(kind).map(|path| (kind, path)))
            .collect()
    }
}

fn validate_cache(label: &str, cache: &CacheConfig) -> ConfigResult<()> {
    if cache.max_entries == 0 {
        return Err(ConfigError::Invalid(format!(
            "{}.max_entries must be > 0",
            label
        )));
    }
    if cache.ttl_ms == 0 {
        return Err(ConfigError::Invalid(format!("{}.ttl_ms must be > 0", label)));
    }
    Ok(())
}
