//! Structural schema checks over the JSON form of a shaped element.

use std::fs;
use std::path::Path;

use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{Result, ValidationError, Violation};

/// Built-in schema for shaped nodes and ways.
pub const DEFAULT_SCHEMA: &str = include_str!("../schemas/element.schema.json");

/// An engine that checks one JSON instance against a structural contract.
///
/// Returns every violated constraint; an empty list means the instance
/// conforms.
pub trait SchemaValidator {
    fn violations(&self, instance: &Value) -> Vec<Violation>;
}

/// [`SchemaValidator`] backed by a compiled JSON Schema.
pub struct JsonSchemaValidator {
    compiled: JSONSchema,
}

impl std::fmt::Debug for JsonSchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonSchemaValidator").finish_non_exhaustive()
    }
}

impl JsonSchemaValidator {
    /// Compiles the built-in element schema.
    pub fn builtin() -> Result<Self> {
        Self::compile(&default_schema()?)
    }

    pub fn compile(schema: &Value) -> Result<Self> {
        let compiled = JSONSchema::options().compile(schema).map_err(|error| {
            ValidationError::InvalidSchema {
                message: error.to_string(),
            }
        })?;
        Ok(Self { compiled })
    }

    /// Loads and compiles a schema file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ValidationError::SchemaRead {
            path: path.to_path_buf(),
            source,
        })?;
        let schema: Value =
            serde_json::from_str(&text).map_err(|source| ValidationError::SchemaJson {
                path: path.to_path_buf(),
                source,
            })?;
        Self::compile(&schema)
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn violations(&self, instance: &Value) -> Vec<Violation> {
        match self.compiled.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|error| Violation {
                    path: error.instance_path.to_string(),
                    message: error.to_string(),
                })
                .collect(),
        }
    }
}

/// Parses [`DEFAULT_SCHEMA`].
pub fn default_schema() -> Result<Value> {
    serde_json::from_str(DEFAULT_SCHEMA).map_err(|source| ValidationError::SchemaJson {
        path: "<builtin>".into(),
        source,
    })
}
