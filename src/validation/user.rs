//! User record validation.
//!
//! `UserInput` is the raw candidate (as typed on the command line or read from
//! a file). Each field is checked by its own rule set and the field reports are
//! merged in field order: name, email, age.

use crate::classify::{Classifier, UserType};
use crate::error::Result;
use crate::validation::composite::CompositeValidator;
use crate::validation::field::FieldValidator;
use crate::validation::rule_set::RuleSet;
use crate::validation::rules::{InRange, MatchesPattern, MinLength, NotBlank};
use crate::validation::traits::{Rule, ValidationResult, Validator};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for user validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPolicy {
    pub min_name_length: usize,
    pub min_age: i64,
    pub max_age: i64,
    pub email_pattern: String,
}

impl Default for UserPolicy {
    fn default() -> Self {
        Self {
            min_name_length: 2,
            min_age: 0,
            max_age: 150,
            email_pattern: r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$".to_string(),
        }
    }
}

/// Unvalidated user fields; `None` means the field was not supplied at all
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

impl UserInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            age: Some(age),
        }
    }

    /// Parse a YAML mapping; keys left out stay `None`
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        debug!("Loaded user input from {}", path.as_ref().display());
        Self::from_yaml(&content)
    }
}

/// A user whose fields passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    name: String,
    email: String,
    age: i64,
    verified: bool,
}

impl User {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed and lowercased
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    pub fn set_verified(&mut self, verified: bool) {
        self.verified = verified;
    }

    pub fn user_type(&self, classifier: &Classifier<UserType>) -> UserType {
        *classifier.classify(self.age)
    }

    /// e.g. "Adult User: Jane Doe (Unverified)"
    pub fn summary(&self, classifier: &Classifier<UserType>) -> String {
        let status = if self.verified { "Verified" } else { "Unverified" };
        format!("{} User: {} ({})", self.user_type(classifier).title(), self.name, status)
    }
}

/// Outcome of validating a candidate and building the checked value from it
#[derive(Debug, Clone, PartialEq)]
pub enum Checked<T> {
    Accepted(T),
    Rejected(ValidationResult),
}

impl<T> Checked<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Checked::Accepted(_))
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            Checked::Accepted(value) => Some(value),
            Checked::Rejected(_) => None,
        }
    }
}

/// Validator for name, email and age of a user
pub struct UserValidator {
    fields: CompositeValidator<UserInput>,
}

impl UserValidator {
    pub fn new(policy: &UserPolicy) -> Result<Self> {
        let name = RuleSet::with_description("name")
            .with_rule(NotBlank::new("Name"))
            .with_rule(TrimmedMinLength(MinLength::new("Name", policy.min_name_length)));
        let email = RuleSet::with_description("email")
            .with_rule(NotBlank::new("Email"))
            .with_rule(Normalized(MatchesPattern::new(
                &policy.email_pattern,
                "Email must be in valid format",
            )?));
        let age = RuleSet::with_description("age").with_rule(InRange::new("Age", policy.min_age, policy.max_age)?);

        let fields = CompositeValidator::with_description("user validator")
            .with_validator(FieldValidator::new("name", |u: &UserInput| u.name.as_deref(), name))
            .with_validator(FieldValidator::new("email", |u: &UserInput| u.email.as_deref(), email))
            .with_validator(FieldValidator::new("age", |u: &UserInput| u.age.as_ref(), age));

        Ok(Self { fields })
    }

    /// Field names in evaluation order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.validator_descriptions()
    }

    /// Each field with the names of the rules applied to it
    pub fn rule_names_by_field(&self) -> Vec<(&str, Vec<&str>)> {
        self.fields.validator_rule_names()
    }

    /// Validate and, when every rule passes, build a normalized [`User`]
    pub fn admit(&self, input: &UserInput) -> Result<Checked<User>> {
        let result = self.validate(input)?;
        if !result.is_valid() {
            return Ok(Checked::Rejected(result));
        }

        // validate() has already rejected absent fields
        let (Some(name), Some(email), Some(age)) = (&input.name, &input.email, input.age) else {
            return Ok(Checked::Rejected(result));
        };

        Ok(Checked::Accepted(User {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            age,
            verified: false,
        }))
    }
}

impl Validator<UserInput> for UserValidator {
    fn validate(&self, candidate: &UserInput) -> Result<ValidationResult> {
        let result = self.fields.validate(candidate)?;
        debug!("User validation finished with {} failure(s)", result.error_count());
        Ok(result)
    }

    fn description(&self) -> &str {
        self.fields.description()
    }

    fn rule_names(&self) -> Vec<&str> {
        self.fields.rule_names()
    }
}

/// Applies the length check to the trimmed name, so surrounding spaces do not count
struct TrimmedMinLength(MinLength);

impl Rule<str> for TrimmedMinLength {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn check(&self, candidate: &str) -> Option<String> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            // already reported by NotBlank
            return None;
        }
        self.0.check(trimmed)
    }
}

/// Matches the email after trimming and lowercasing
struct Normalized(MatchesPattern);

impl Rule<str> for Normalized {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn check(&self, candidate: &str) -> Option<String> {
        let normalized = candidate.trim().to_lowercase();
        if normalized.is_empty() {
            return None;
        }
        self.0.check(&normalized)
    }
}
