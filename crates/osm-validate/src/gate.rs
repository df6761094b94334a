//! Pass/fail policy applied to shaped elements before they are written.

use std::num::NonZeroUsize;

use tracing::{error, trace};

use osm_model::ShapedElement;

use crate::error::{Result, ValidationError};
use crate::validator::SchemaValidator;

/// Validates shaped elements and fails on the first violation.
///
/// With `sample_every(n)` only every n-th element offered to the gate is
/// checked, starting with the first; the rest pass unchecked.
#[derive(Debug)]
pub struct ValidationGate<V> {
    validator: V,
    every: NonZeroUsize,
    offered: usize,
    validated: usize,
}

impl<V: SchemaValidator> ValidationGate<V> {
    pub fn new(validator: V) -> Self {
        Self {
            validator,
            every: NonZeroUsize::MIN,
            offered: 0,
            validated: 0,
        }
    }

    #[must_use]
    pub fn sample_every(mut self, every: NonZeroUsize) -> Self {
        self.every = every;
        self
    }

    /// Number of elements actually checked so far.
    pub fn validated(&self) -> usize {
        self.validated
    }

    /// Checks `shaped` if it falls in the sample.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::SchemaViolation`] carrying the element's
    /// shaped form and every violated constraint.
    pub fn check(&mut self, shaped: &ShapedElement) -> Result<()> {
        let index = self.offered;
        self.offered += 1;
        if index % self.every.get() != 0 {
            return Ok(());
        }

        let instance =
            serde_json::to_value(shaped).map_err(|source| ValidationError::Serialize {
                element: shaped.label(),
                source,
            })?;
        self.validated += 1;
        let violations = self.validator.violations(&instance);
        if violations.is_empty() {
            trace!(element = %shaped.label(), "element conforms to schema");
            return Ok(());
        }

        error!(
            element = %shaped.label(),
            violation_count = violations.len(),
            "schema violation"
        );
        Err(ValidationError::SchemaViolation {
            element: shaped.label(),
            violations,
            shaped: Box::new(instance),
        })
    }
}
