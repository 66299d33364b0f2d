//! Password strength validation.
//!
//! The policy is plain configuration; [`PasswordValidator::new`] turns it into
//! an ordered rule set: length, uppercase, lowercase, digit, special, denylist.

use crate::error::Result;
use crate::validation::rule_set::RuleSet;
use crate::validation::rules::{CharClass, DEFAULT_SPECIAL_CHARACTERS, Denylist, MinLength, RequiresChar};
use crate::validation::traits::{ValidationResult, Validator};
use log::debug;
use serde::{Deserialize, Serialize};

/// Reason reported when a password is on the common-password list
pub const TOO_COMMON_REASON: &str = "Password is too common. Please choose a more secure password";

/// Configuration for password validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    /// Characters that satisfy the special-character requirement
    pub special_characters: String,
    /// Compared case-insensitively
    pub common_passwords: Vec<String>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            special_characters: DEFAULT_SPECIAL_CHARACTERS.to_string(),
            common_passwords: ["password", "password123", "123456", "qwerty", "abc123", "letmein"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Validator that reports every weakness of a password at once
pub struct PasswordValidator {
    rules: RuleSet<str>,
}

impl PasswordValidator {
    pub fn new(policy: &PasswordPolicy) -> Self {
        let subject = "Password";
        let rules = RuleSet::with_description("password validator")
            .with_rule(MinLength::new(subject, policy.min_length))
            .with_rule(RequiresChar::new(subject, CharClass::Uppercase))
            .with_rule(RequiresChar::new(subject, CharClass::Lowercase))
            .with_rule(RequiresChar::new(subject, CharClass::Digit))
            .with_rule(RequiresChar::new(
                subject,
                CharClass::Special(policy.special_characters.clone()),
            ))
            .with_rule(Denylist::new(&policy.common_passwords, TOO_COMMON_REASON));
        Self { rules }
    }
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new(&PasswordPolicy::default())
    }
}

impl Validator<str> for PasswordValidator {
    fn validate(&self, candidate: &str) -> Result<ValidationResult> {
        let result = self.rules.evaluate(candidate);
        debug!("Password validation finished with {} failure(s)", result.error_count());
        Ok(result)
    }

    fn description(&self) -> &str {
        self.rules.description()
    }
}
