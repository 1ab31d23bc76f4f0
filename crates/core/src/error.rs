//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). Transport and provider failures belong to the crates that own
/// the I/O.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more input fields were missing, malformed or out of their domain.
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInput),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    /// Shorthand for a single offending field.
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        let mut input = InvalidInput::new();
        input.push(field, reason);
        Self::InvalidInput(input)
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Offending field names, if this is an input error.
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            DomainError::InvalidInput(input) => input.fields().collect(),
            DomainError::InvariantViolation(_) => Vec::new(),
        }
    }
}

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
}

/// Accumulates every offending field of an input record.
///
/// Validation collects all violations instead of stopping at the first one, so
/// callers can report the whole form back to the user at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvalidInput {
    violations: Vec<FieldViolation>,
}

impl InvalidInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.violations.push(FieldViolation {
            field: field.into(),
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.field.as_str())
    }

    /// `Ok(())` when nothing was recorded, otherwise `DomainError::InvalidInput`.
    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidInput(self))
        }
    }
}

impl core::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", v.field, v.reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_ok() {
        assert!(InvalidInput::new().into_result().is_ok());
    }

    #[test]
    fn display_lists_every_field() {
        let mut input = InvalidInput::new();
        input.push("area", "must be positive");
        input.push("rainfall_mm", "must not be negative");

        let err = input.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: area: must be positive; rainfall_mm: must not be negative"
        );
        assert_eq!(err.invalid_fields(), vec!["area", "rainfall_mm"]);
    }

    #[test]
    fn invalid_field_shorthand_records_one_violation() {
        let err = DomainError::invalid_field("planting_date", "out of range");
        match &err {
            DomainError::InvalidInput(input) => {
                assert_eq!(input.violations().len(), 1);
                assert_eq!(input.violations()[0].reason, "out of range");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn invariant_errors_have_no_fields() {
        let err = DomainError::invariant("band out of order");
        assert!(err.invalid_fields().is_empty());
        assert_eq!(err.to_string(), "invariant violated: band out of order");
    }
}
