// Core validation interfaces

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Aggregate outcome of applying a set of rules to one candidate
///
/// Validity is derived from the failure list, so `is_valid()` is true exactly
/// when no reasons were recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Failure reasons in rule evaluation order
    errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result
    pub fn pass() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create a failing result with a single error
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            errors: vec![error.into()],
        }
    }

    /// Create a result from a list of failure reasons
    pub fn fail_with_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// Add an error to this result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Merge another result into this one, keeping its reasons after ours
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failure reasons in the order the rules were declared
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Pretty-printed JSON report, `{"errors": [...]}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Valid")
        } else {
            write!(f, "Invalid: {}", self.errors.join(", "))
        }
    }
}

/// A single named predicate over a candidate
///
/// Returns `None` when the candidate is accepted and `Some(reason)` when it is
/// rejected. Rules hold no mutable state.
pub trait Rule<T: ?Sized> {
    /// Short identifier used in listings and logs
    fn name(&self) -> &str;

    fn check(&self, candidate: &T) -> Option<String>;
}

/// Trait for validators that report every rule a candidate violates
pub trait Validator<T: ?Sized> {
    /// Validate a candidate
    ///
    /// Rule failures are returned inside the `ValidationResult`. An `Err` means
    /// the candidate could not be validated at all (e.g. a mandatory field was
    /// absent).
    fn validate(&self, candidate: &T) -> Result<ValidationResult>;

    /// Get a description of what this validator checks
    fn description(&self) -> &str {
        "validator"
    }

    /// Names of the rules this validator applies, in evaluation order
    fn rule_names(&self) -> Vec<&str> {
        Vec::new()
    }
}
