// Ordered rule evaluation over a single candidate

use crate::error::Result;
use crate::validation::traits::{Rule, ValidationResult, Validator};
use log::debug;

/// An ordered set of rules applied to one candidate.
/// Every rule runs even after an earlier one fails, so the result lists all
/// violations in declaration order.
pub struct RuleSet<T: ?Sized> {
    rules: Vec<Box<dyn Rule<T>>>,
    description: String,
}

impl<T: ?Sized> RuleSet<T> {
    /// Create a new empty rule set
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            description: "rule set".to_string(),
        }
    }

    /// Create a new rule set with a custom description
    pub fn with_description(description: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            description: description.into(),
        }
    }

    /// Append a rule (builder pattern)
    pub fn with_rule(mut self, rule: impl Rule<T> + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append a boxed rule
    pub fn add_boxed(mut self, rule: Box<dyn Rule<T>>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate every rule and collect the failures
    pub fn evaluate(&self, candidate: &T) -> ValidationResult {
        let mut result = ValidationResult::pass();

        for rule in &self.rules {
            if let Some(reason) = rule.check(candidate) {
                debug!("{}: rule '{}' rejected candidate: {}", self.description, rule.name(), reason);
                result.add_error(reason);
            }
        }

        result
    }
}

impl<T: ?Sized> Default for RuleSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Validator<T> for RuleSet<T> {
    fn validate(&self, candidate: &T) -> Result<ValidationResult> {
        Ok(self.evaluate(candidate))
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }
}
