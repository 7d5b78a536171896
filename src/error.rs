//! Error types for query compilation, record loading and aggregation.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for matchquery operations.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A query key named a comparator outside `lt`, `le`, `eq`, `ne`, `ge`, `gt`,
    /// or the key itself could not be split into a field and a comparator.
    #[error("Invalid operator '{token}' in query key '{key}'")]
    InvalidOperator { key: String, token: String },

    /// The reserved `mode` key held something other than `all`/`and`/`any`/`or`.
    #[error("Invalid mode '{0}' (expected all, and, any or or)")]
    InvalidMode(String),

    /// A `key=value` filter argument had no `=`.
    #[error("Invalid filter '{0}' (expected key=value)")]
    InvalidPair(String),

    /// A record could not be aggregated.
    #[error("Malformed record: field '{field}' = '{value}': {reason}")]
    MalformedRecord {
        field: String,
        value: String,
        reason: String,
    },

    /// The goal total does not fit in an `i64`.
    #[error("Goal total for '{team}' overflowed")]
    Overflow { team: String },

    /// The input file could not be read.
    #[error("Error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl QueryError {
    pub(crate) fn invalid_operator(key: &str, token: &str) -> Self {
        Self::InvalidOperator {
            key: key.to_string(),
            token: token.to_string(),
        }
    }

    /// Attach the full compound key to an `InvalidOperator` error.
    pub(crate) fn in_key(self, key: &str) -> Self {
        match self {
            Self::InvalidOperator { token, .. } => Self::InvalidOperator {
                key: key.to_string(),
                token,
            },
            other => other,
        }
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        Self::MalformedRecord {
            field: field.to_string(),
            value: String::new(),
            reason: "field is missing".to_string(),
        }
    }

    pub(crate) fn bad_score(field: &str, value: &str, err: ParseIntError) -> Self {
        Self::MalformedRecord {
            field: field.to_string(),
            value: value.to_string(),
            reason: err.to_string(),
        }
    }
}

/// A specialized Result type for matchquery operations.
pub type Result<T> = std::result::Result<T, QueryError>;
