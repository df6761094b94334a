//! Validation gate for shaped OSM elements.
//!
//! The gate owns the policy (whether and how often to check, and that any
//! violation stops the run); the actual structural check is delegated to a
//! [`SchemaValidator`], by default a JSON Schema engine loaded with
//! [`DEFAULT_SCHEMA`].

mod error;
mod gate;
mod validator;

pub use error::{Result, ValidationError, Violation};
pub use gate::ValidationGate;
pub use validator::{DEFAULT_SCHEMA, JsonSchemaValidator, SchemaValidator, default_schema};
