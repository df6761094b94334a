use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One failed schema constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer into the shaped element, e.g. `/node/id`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{path}: {}", self.message)
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("failed to read schema {path}: {source}")]
    SchemaRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema {path} is not valid JSON: {source}")]
    SchemaJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid schema: {message}")]
    InvalidSchema { message: String },

    #[error("failed to serialize {element}: {source}")]
    Serialize {
        element: String,
        #[source]
        source: serde_json::Error,
    },

    /// A shaped element does not conform; fatal for the whole run.
    #[error("{element} violates the element schema: {}", join_violations(.violations))]
    SchemaViolation {
        element: String,
        violations: Vec<Violation>,
        shaped: Box<serde_json::Value>,
    },
}

pub type Result<T> = std::result::Result<T, ValidationError>;

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
