//! Validation error types
//!
//! A payload is checked in full before it is rejected, so a single
//! `ValidationError` carries every violated field.

use std::fmt;

use serde::Serialize;

/// Validation failure details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetails {
    /// Field path (e.g., "areas_of_interest[2]")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl ValidationDetails {
    pub fn new(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: "field to be present".into(),
            actual: "missing".into(),
        }
    }

    pub fn type_mismatch(field: impl Into<String>, expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for ValidationDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': expected {}, got {}", self.field, self.expected, self.actual)
    }
}

/// Rejected payload for one record kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Record kind that rejected the payload
    record: String,
    /// Every violation found, in field declaration order
    details: Vec<ValidationDetails>,
}

impl ValidationError {
    /// Create an error from a non-empty list of violations
    pub fn new(record: impl Into<String>, details: Vec<ValidationDetails>) -> Self {
        Self {
            record: record.into(),
            details,
        }
    }

    /// Create an error with a single violation
    pub fn single(record: impl Into<String>, details: ValidationDetails) -> Self {
        Self::new(record, vec![details])
    }

    /// Returns every violation
    pub fn details(&self) -> &[ValidationDetails] {
        &self.details
    }

    /// Returns whether a violation was reported for `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.details.iter().any(|d| d.field == field)
    }

    /// Consumes the error, returning the violations
    pub fn into_details(self) -> Vec<ValidationDetails> {
        self.details
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} validation failed", self.record)?;
        for (i, detail) in self.details.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
