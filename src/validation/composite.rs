// Composite Validator
// Chains multiple validators over the same candidate

use crate::error::Result;
use crate::validation::traits::{ValidationResult, Validator};

/// A composite validator that chains multiple validators together.
/// All validators must pass for the overall validation to pass; each one runs
/// even when an earlier one failed.
pub struct CompositeValidator<T: ?Sized> {
    /// The validators to run in sequence
    validators: Vec<Box<dyn Validator<T>>>,
    /// Description of what this composite validates
    description: String,
}

impl<T: ?Sized> CompositeValidator<T> {
    /// Create a new empty composite validator
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
            description: "composite validator".to_string(),
        }
    }

    /// Create a new composite validator with a custom description
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            validators: Vec::new(),
            description: description.into(),
        }
    }

    /// Add a validator to the chain (builder pattern)
    pub fn with_validator(mut self, validator: impl Validator<T> + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Add a boxed validator to the chain
    pub fn add_boxed(mut self, validator: Box<dyn Validator<T>>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Get the number of validators in the chain
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if the composite has no validators
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Get descriptions of all validators in the chain
    pub fn validator_descriptions(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.description()).collect()
    }

    /// Each validator's description paired with its rule names
    pub fn validator_rule_names(&self) -> Vec<(&str, Vec<&str>)> {
        self.validators.iter().map(|v| (v.description(), v.rule_names())).collect()
    }
}

impl<T: ?Sized> Default for CompositeValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Validator<T> for CompositeValidator<T> {
    fn validate(&self, candidate: &T) -> Result<ValidationResult> {
        let mut combined = ValidationResult::pass();

        for validator in &self.validators {
            let result = validator.validate(candidate)?;
            combined.merge(result);
        }

        Ok(combined)
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn rule_names(&self) -> Vec<&str> {
        self.validators.iter().flat_map(|v| v.rule_names()).collect()
    }
}
