//! Dataset load errors
//!
//! Every variant rejects the whole load. The previously published snapshot,
//! if any, stays in service.

use thiserror::Error;

use super::kind::DatasetKind;

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// A dataset could not be turned into a record store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("record {position} of {dataset} is not a JSON object")]
    NotAnObject { dataset: DatasetKind, position: usize },

    #[error("record {position} of {dataset} has a non-string {field}")]
    NonStringCode {
        dataset: DatasetKind,
        position: usize,
        field: &'static str,
    },

    #[error("record {position} of {dataset} has code '{code}' longer than {max} characters")]
    CodeTooLong {
        dataset: DatasetKind,
        position: usize,
        code: String,
        max: usize,
    },

    #[error("failed to read dataset file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("dataset file {path} is not a JSON array: {reason}")]
    Malformed { path: String, reason: String },
}

impl DatasetError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        "LOOKUP_INVALID_DATASET"
    }

    /// Position of the offending record, when the error is about one record
    pub fn position(&self) -> Option<usize> {
        match self {
            DatasetError::NotAnObject { position, .. }
            | DatasetError::NonStringCode { position, .. }
            | DatasetError::CodeTooLong { position, .. } => Some(*position),
            DatasetError::Unreadable { .. } | DatasetError::Malformed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_dataset_and_position() {
        let err = DatasetError::CodeTooLong {
            dataset: DatasetKind::Airlines,
            position: 7,
            code: "BAW".into(),
            max: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("airlines"));
        assert!(msg.contains("7"));
        assert!(msg.contains("BAW"));
        assert_eq!(err.code(), "LOOKUP_INVALID_DATASET");
        assert_eq!(err.position(), Some(7));
    }

    #[test]
    fn test_file_errors_have_no_position() {
        let err = DatasetError::Unreadable {
            path: "/nope.json".into(),
            reason: "not found".into(),
        };
        assert_eq!(err.position(), None);
    }
}
