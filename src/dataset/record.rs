//! Record type
//!
//! A record is an immutable JSON object plus its precomputed short code.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use super::errors::{DatasetError, DatasetResult};
use super::kind::DatasetKind;

/// One airport, airline or aircraft type
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Position in the record store (load order)
    position: usize,
    /// Trimmed code as supplied, `None` when missing, null or blank
    code: Option<String>,
    /// Lowercased code used for prefix matching
    code_lower: Option<String>,
    /// Record fields as loaded
    body: Map<String, Value>,
}

impl Record {
    /// Builds a record from an already-normalized JSON object.
    ///
    /// Fails when the value is not an object, when the code field is not a
    /// string, or when the code is longer than the dataset allows.
    pub fn from_raw(kind: DatasetKind, position: usize, raw: Value) -> DatasetResult<Self> {
        let body = match raw {
            Value::Object(map) => map,
            _ => {
                return Err(DatasetError::NotAnObject {
                    dataset: kind,
                    position,
                })
            }
        };

        let code = match body.get(kind.code_field()) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Some(_) => {
                return Err(DatasetError::NonStringCode {
                    dataset: kind,
                    position,
                    field: kind.code_field(),
                })
            }
        };

        if let Some(code) = &code {
            if code.chars().count() > kind.max_code_length() {
                return Err(DatasetError::CodeTooLong {
                    dataset: kind,
                    position,
                    code: code.clone(),
                    max: kind.max_code_length(),
                });
            }
        }

        let code_lower = code.as_ref().map(|c| c.to_lowercase());

        Ok(Self {
            position,
            code,
            code_lower,
            body,
        })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn code_lower(&self) -> Option<&str> {
        self.code_lower.as_deref()
    }

    /// Records without a usable code never enter the prefix index.
    pub fn is_indexable(&self) -> bool {
        self.code_lower.is_some()
    }

    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Resolves a dotted field path (`city.name`).
    ///
    /// Returns `None` when any segment is missing or a parent is not an object.
    /// A present JSON null is returned as `Some(Value::Null)`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.body.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// True when the field exists and is not null
    pub fn has(&self, path: &str) -> bool {
        matches!(self.get(path), Some(v) if !v.is_null())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.body.serialize(serializer)
    }
}
