//! Stateless rules shared by the concrete validators.
//!
//! Each rule owns the wording of its own failure reason so that validators
//! only decide which rules apply and in what order.

use crate::error::{Result, VerdictError};
use crate::validation::traits::Rule;
use regex::Regex;
use std::fmt::Display;

/// Default punctuation accepted by [`CharClass::Special`]
pub const DEFAULT_SPECIAL_CHARACTERS: &str = "!@#$%^&*";

/// Rejects strings with fewer than `min` characters
#[derive(Debug, Clone)]
pub struct MinLength {
    min: usize,
    reason: String,
}

impl MinLength {
    /// `subject` is the noun used in the reason, e.g. "Password"
    pub fn new(subject: &str, min: usize) -> Self {
        Self {
            min,
            reason: format!("{} must be at least {} characters long", subject, min),
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }
}

impl Rule<str> for MinLength {
    fn name(&self) -> &str {
        "min_length"
    }

    fn check(&self, candidate: &str) -> Option<String> {
        (candidate.chars().count() < self.min).then(|| self.reason.clone())
    }
}

/// Character classes a candidate may be required to contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    /// Any character from the given set
    Special(String),
}

impl CharClass {
    fn matches(&self, c: char) -> bool {
        match self {
            CharClass::Uppercase => c.is_uppercase(),
            CharClass::Lowercase => c.is_lowercase(),
            CharClass::Digit => c.is_numeric(),
            CharClass::Special(set) => set.contains(c),
        }
    }

    fn label(&self) -> String {
        match self {
            CharClass::Uppercase => "one uppercase letter".to_string(),
            CharClass::Lowercase => "one lowercase letter".to_string(),
            CharClass::Digit => "one digit".to_string(),
            CharClass::Special(set) => format!("one special character ({})", set),
        }
    }
}

/// Requires at least one character of a [`CharClass`]
#[derive(Debug, Clone)]
pub struct RequiresChar {
    class: CharClass,
    name: String,
    reason: String,
}

impl RequiresChar {
    pub fn new(subject: &str, class: CharClass) -> Self {
        let name = match &class {
            CharClass::Uppercase => "has_uppercase",
            CharClass::Lowercase => "has_lowercase",
            CharClass::Digit => "has_digit",
            CharClass::Special(_) => "has_special",
        };
        Self {
            reason: format!("{} must contain at least {}", subject, class.label()),
            name: name.to_string(),
            class,
        }
    }
}

impl Rule<str> for RequiresChar {
    fn name(&self) -> &str {
        &self.name
    }

    fn check(&self, candidate: &str) -> Option<String> {
        if candidate.chars().any(|c| self.class.matches(c)) {
            None
        } else {
            Some(self.reason.clone())
        }
    }
}

/// Rejects values found in a denylist, compared case-insensitively
#[derive(Debug, Clone)]
pub struct Denylist {
    entries: Vec<String>,
    reason: String,
}

impl Denylist {
    pub fn new<I, S>(entries: I, reason: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries.into_iter().map(|e| e.as_ref().to_lowercase()).collect(),
            reason: reason.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Rule<str> for Denylist {
    fn name(&self) -> &str {
        "denylist"
    }

    fn check(&self, candidate: &str) -> Option<String> {
        let lowered = candidate.to_lowercase();
        self.entries.iter().any(|e| *e == lowered).then(|| self.reason.clone())
    }
}

/// Inclusive numeric range
#[derive(Debug, Clone)]
pub struct InRange<N> {
    min: N,
    max: N,
    reason: String,
}

impl<N: PartialOrd + Display + Copy> InRange<N> {
    /// Fails with `InvalidConfig` when `min > max`
    pub fn new(subject: &str, min: N, max: N) -> Result<Self> {
        if min > max {
            return Err(VerdictError::InvalidConfig(format!(
                "{} range has min {} greater than max {}",
                subject, min, max
            )));
        }
        Ok(Self {
            min,
            max,
            reason: format!("{} must be between {} and {}", subject, min, max),
        })
    }

    pub fn bounds(&self) -> (N, N) {
        (self.min, self.max)
    }
}

impl<N: PartialOrd + Copy> Rule<N> for InRange<N> {
    fn name(&self) -> &str {
        "in_range"
    }

    fn check(&self, candidate: &N) -> Option<String> {
        if *candidate < self.min || *candidate > self.max {
            Some(self.reason.clone())
        } else {
            None
        }
    }
}

/// Requires the whole candidate to match a regular expression
#[derive(Debug, Clone)]
pub struct MatchesPattern {
    pattern: Regex,
    reason: String,
}

impl MatchesPattern {
    pub fn new(pattern: &str, reason: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| VerdictError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            pattern,
            reason: reason.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Rule<str> for MatchesPattern {
    fn name(&self) -> &str {
        "matches_pattern"
    }

    fn check(&self, candidate: &str) -> Option<String> {
        if self.pattern.is_match(candidate) {
            None
        } else {
            Some(self.reason.clone())
        }
    }
}

/// Rejects empty or whitespace-only strings
#[derive(Debug, Clone)]
pub struct NotBlank {
    reason: String,
}

impl NotBlank {
    pub fn new(subject: &str) -> Self {
        Self {
            reason: format!("{} cannot be empty", subject),
        }
    }
}

impl Rule<str> for NotBlank {
    fn name(&self) -> &str {
        "not_blank"
    }

    fn check(&self, candidate: &str) -> Option<String> {
        candidate.trim().is_empty().then(|| self.reason.clone())
    }
}
