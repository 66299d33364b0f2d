//! Threshold classification.
//!
//! Maps an already-validated number to a label using an explicit table of
//! `(threshold, label)` pairs. The table is kept sorted with the highest
//! threshold first; the first threshold the value reaches wins, and values
//! below every threshold get the default label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Age category of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Minor,
    Adult,
    Senior,
}

impl UserType {
    /// Title-cased name used in summaries
    pub fn title(&self) -> &'static str {
        match self {
            UserType::Minor => "Minor",
            UserType::Adult => "Adult",
            UserType::Senior => "Senior",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserType::Minor => "minor",
            UserType::Adult => "adult",
            UserType::Senior => "senior",
        };
        write!(f, "{}", s)
    }
}

/// One row of a classification table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier<L> {
    pub threshold: i64,
    pub label: L,
}

/// Serializable form of a classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    pub tiers: Vec<Tier<UserType>>,
    pub default: UserType,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                Tier {
                    threshold: 65,
                    label: UserType::Senior,
                },
                Tier {
                    threshold: 18,
                    label: UserType::Adult,
                },
            ],
            default: UserType::Minor,
        }
    }
}

/// Ordered threshold table
#[derive(Debug, Clone)]
pub struct Classifier<L> {
    tiers: Vec<Tier<L>>,
    default: L,
}

impl<L> Classifier<L> {
    /// Create a classifier with no thresholds; everything maps to `default`
    pub fn new(default: L) -> Self {
        Self {
            tiers: Vec::new(),
            default,
        }
    }

    /// Add a tier (builder pattern). Insertion order does not matter.
    pub fn with_tier(mut self, threshold: i64, label: L) -> Self {
        let pos = self
            .tiers
            .iter()
            .position(|t| t.threshold < threshold)
            .unwrap_or(self.tiers.len());
        self.tiers.insert(pos, Tier { threshold, label });
        self
    }

    /// Label for `value`: highest threshold checked first, first match wins
    pub fn classify(&self, value: i64) -> &L {
        self.tiers
            .iter()
            .find(|t| value >= t.threshold)
            .map(|t| &t.label)
            .unwrap_or(&self.default)
    }

    /// Thresholds from highest to lowest
    pub fn thresholds(&self) -> Vec<i64> {
        self.tiers.iter().map(|t| t.threshold).collect()
    }
}

impl Classifier<UserType> {
    /// 65+ senior, 18+ adult, otherwise minor
    pub fn age_groups() -> Self {
        Self::from_config(&ClassificationConfig::default())
    }

    pub fn from_config(config: &ClassificationConfig) -> Self {
        config
            .tiers
            .iter()
            .fold(Self::new(config.default), |c, t| c.with_tier(t.threshold, t.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_groups() {
        let classifier = Classifier::age_groups();
        assert_eq!(*classifier.classify(64), UserType::Adult);
        assert_eq!(*classifier.classify(65), UserType::Senior);
        assert_eq!(*classifier.classify(17), UserType::Minor);
        assert_eq!(*classifier.classify(18), UserType::Adult);
        assert_eq!(*classifier.classify(0), UserType::Minor);
    }

    #[test]
    fn test_tiers_sorted_regardless_of_insertion_order() {
        let classifier = Classifier::new("low").with_tier(10, "mid").with_tier(50, "high").with_tier(30, "upper");
        assert_eq!(classifier.thresholds(), vec![50, 30, 10]);
        assert_eq!(*classifier.classify(40), "upper");
        assert_eq!(*classifier.classify(50), "high");
        assert_eq!(*classifier.classify(9), "low");
    }

    #[test]
    fn test_no_tiers_uses_default() {
        let classifier = Classifier::new(UserType::Adult);
        assert_eq!(*classifier.classify(i64::MIN), UserType::Adult);
    }

    #[test]
    fn test_equal_thresholds_keep_first_inserted() {
        let classifier = Classifier::new("none").with_tier(5, "first").with_tier(5, "second");
        assert_eq!(*classifier.classify(5), "first");
    }

    #[test]
    fn test_from_config() {
        let config = ClassificationConfig {
            tiers: vec![Tier {
                threshold: 21,
                label: UserType::Adult,
            }],
            default: UserType::Minor,
        };
        let classifier = Classifier::from_config(&config);
        assert_eq!(*classifier.classify(20), UserType::Minor);
        assert_eq!(*classifier.classify(70), UserType::Adult);
    }

    #[test]
    fn test_user_type_display() {
        assert_eq!(UserType::Senior.to_string(), "senior");
        assert_eq!(UserType::Adult.title(), "Adult");
    }

    #[test]
    fn test_config_yaml() {
        let yaml = "tiers:\n  - threshold: 60\n    label: senior\ndefault: adult\n";
        let config: ClassificationConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default, UserType::Adult);
        assert_eq!(config.tiers[0].label, UserType::Senior);
    }
}
