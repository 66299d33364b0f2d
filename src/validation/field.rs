// Field validator
// Applies a rule set to one field of a record candidate

use crate::error::{Result, VerdictError};
use crate::validation::rule_set::RuleSet;
use crate::validation::traits::{ValidationResult, Validator};

/// Validates one field of a record `T` with a [`RuleSet`] over the field type.
///
/// An absent field is a contract violation and surfaces as
/// `VerdictError::MissingField`, not as a rule failure.
pub struct FieldValidator<T: ?Sized, U: ?Sized> {
    field: String,
    extract: fn(&T) -> Option<&U>,
    rules: RuleSet<U>,
}

impl<T: ?Sized, U: ?Sized> FieldValidator<T, U> {
    pub fn new(field: impl Into<String>, extract: fn(&T) -> Option<&U>, rules: RuleSet<U>) -> Self {
        Self {
            field: field.into(),
            extract,
            rules,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rules(&self) -> &RuleSet<U> {
        &self.rules
    }
}

impl<T: ?Sized, U: ?Sized> Validator<T> for FieldValidator<T, U> {
    fn validate(&self, candidate: &T) -> Result<ValidationResult> {
        let value = (self.extract)(candidate).ok_or_else(|| VerdictError::MissingField(self.field.clone()))?;
        Ok(self.rules.evaluate(value))
    }

    fn description(&self) -> &str {
        &self.field
    }

    fn rule_names(&self) -> Vec<&str> {
        self.rules.rule_names()
    }
}
