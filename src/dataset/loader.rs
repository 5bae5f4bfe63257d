//! Dataset file loader
//!
//! Reads a JSON array of already-normalized records. No field renaming or
//! cleanup happens here.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::errors::{DatasetError, DatasetResult};

/// Reads the raw records of one dataset from a JSON array file.
pub fn read_records(path: &Path) -> DatasetResult<Vec<Value>> {
    let content = fs::read_to_string(path).map_err(|e| DatasetError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| DatasetError::Malformed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
