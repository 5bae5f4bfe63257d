//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::engine::EngineError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    /// stdin/stdout failure
    #[error("I/O error: {0}")]
    Io(String),
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Config(err) => err.code(),
            CliError::Dataset(err) => err.code(),
            CliError::Engine(err) => err.code(),
            CliError::Io(_) => "LOOKUP_CLI_IO_ERROR",
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Io(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
