//! Engine errors
//!
//! Only two conditions surface to callers. Query irregularities are
//! normalized away before they reach the engine.

use thiserror::Error;

use crate::dataset::DatasetError;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Dataset name is empty or not one the engine serves. Never retried.
    #[error("unknown dataset '{0}'")]
    UnknownDataset(String),

    /// Load or reload rejected; the previous snapshot stays published.
    #[error(transparent)]
    InvalidDataset(#[from] DatasetError),
}

impl EngineError {
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UnknownDataset(_) => "LOOKUP_UNKNOWN_DATASET",
            EngineError::InvalidDataset(err) => err.code(),
        }
    }
}
