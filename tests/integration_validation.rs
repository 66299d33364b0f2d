//! Validation integration tests
//!
//! Exercises the public API end to end: rule sets, the concrete validators,
//! classification and order pricing.

use verdict::classify::{Classifier, UserType};
use verdict::error::{Result, VerdictError};
use verdict::pricing::OrderCalculator;
use verdict::validation::rules::{CharClass, DEFAULT_SPECIAL_CHARACTERS, Denylist, InRange, MinLength, RequiresChar};
use verdict::validation::{
    Checked, OrderItem, PasswordValidator, Rule, RuleSet, UserInput, UserPolicy, UserValidator, Validator,
    parse_order,
};

fn strength_rules() -> RuleSet<str> {
    RuleSet::with_description("strength")
        .with_rule(MinLength::new("Password", 8))
        .with_rule(RequiresChar::new("Password", CharClass::Uppercase))
        .with_rule(RequiresChar::new("Password", CharClass::Lowercase))
        .with_rule(RequiresChar::new("Password", CharClass::Digit))
        .with_rule(RequiresChar::new(
            "Password",
            CharClass::Special(DEFAULT_SPECIAL_CHARACTERS.to_string()),
        ))
}

/// Integration test: a short lowercase candidate fails every rule except lowercase
#[test]
fn test_short_password_reports_all_failures() -> Result<()> {
    let result = strength_rules().validate("short")?;

    assert!(!result.is_valid());
    assert_eq!(
        result.errors(),
        [
            "Password must be at least 8 characters long",
            "Password must contain at least one uppercase letter",
            "Password must contain at least one digit",
            "Password must contain at least one special character (!@#$%^&*)",
        ]
    );
    Ok(())
}

/// Integration test: a strong candidate passes the same rule set
#[test]
fn test_strong_password_passes() -> Result<()> {
    let result = strength_rules().validate("Password123!")?;
    assert!(result.is_valid());
    assert!(result.errors().is_empty());
    assert_eq!(result.to_string(), "Valid");
    Ok(())
}

/// Integration test: denylist comparison ignores case
#[test]
fn test_denylist_case_insensitive() -> Result<()> {
    let rules = RuleSet::with_description("common").with_rule(Denylist::new(["password", "123456"], "too common"));
    let result = rules.validate("PASSWORD")?;
    assert_eq!(result.errors(), ["too common"]);
    assert_eq!(result.to_string(), "Invalid: too common");
    Ok(())
}

/// Integration test: inclusive numeric range on age
#[test]
fn test_age_range_inclusive() -> Result<()> {
    let rules = RuleSet::with_description("age").with_rule(InRange::new("Age", 0i64, 150)?);
    assert!(!rules.validate(&-5)?.is_valid());
    assert!(rules.validate(&150)?.is_valid());
    assert!(!rules.validate(&151)?.is_valid());
    Ok(())
}

/// Integration test: age classification thresholds
#[test]
fn test_age_classification() {
    let classifier = Classifier::age_groups();
    assert_eq!(*classifier.classify(64), UserType::Adult);
    assert_eq!(*classifier.classify(65), UserType::Senior);
    assert_eq!(*classifier.classify(17), UserType::Minor);
}

/// Integration test: the failure count equals the number of rejecting rules
#[test]
fn test_error_count_matches_rejecting_rules() -> Result<()> {
    let rules = strength_rules();
    for candidate in ["", "short", "SHORT", "Sh0rt!", "LongEnough", "LongEnough1", "LongEnough1!"] {
        let result = rules.validate(candidate)?;
        let rejecting = [
            MinLength::new("Password", 8).check(candidate),
            RequiresChar::new("Password", CharClass::Uppercase).check(candidate),
            RequiresChar::new("Password", CharClass::Lowercase).check(candidate),
            RequiresChar::new("Password", CharClass::Digit).check(candidate),
            RequiresChar::new("Password", CharClass::Special(DEFAULT_SPECIAL_CHARACTERS.to_string())).check(candidate),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();
        assert_eq!(result.errors(), rejecting.as_slice(), "candidate {:?}", candidate);
    }
    Ok(())
}

/// Integration test: repeated validation yields identical results
#[test]
fn test_validation_is_idempotent() -> Result<()> {
    let validator = PasswordValidator::default();
    for candidate in ["short", "Password123!", "PASSWORD", ""] {
        assert_eq!(validator.validate(candidate)?, validator.validate(candidate)?);
    }
    Ok(())
}

/// Integration test: a candidate exactly at every threshold is accepted
#[test]
fn test_boundary_candidate_accepted() -> Result<()> {
    let validator = UserValidator::new(&UserPolicy::default())?;
    assert!(validator.validate(&UserInput::new("Al", "a@b.co", 0))?.is_valid());
    assert!(validator.validate(&UserInput::new("Al", "a@b.co", 150))?.is_valid());
    assert!(PasswordValidator::default().validate("Abcdef1!")?.is_valid());
    Ok(())
}

/// Integration test: validated users classify through the configured table
#[test]
fn test_admitted_user_summary() -> Result<()> {
    let validator = UserValidator::new(&UserPolicy::default())?;
    let classifier = Classifier::age_groups();

    match validator.admit(&UserInput::new("Jane Doe", "Jane@Example.com", 30))? {
        Checked::Accepted(user) => {
            assert_eq!(user.email(), "jane@example.com");
            assert_eq!(user.summary(&classifier), "Adult User: Jane Doe (Unverified)");
        }
        Checked::Rejected(result) => panic!("Expected acceptance, got {}", result),
    }
    Ok(())
}

/// Integration test: an absent mandatory field is a contract error
#[test]
fn test_missing_user_field_is_error() -> Result<()> {
    let validator = UserValidator::new(&UserPolicy::default())?;
    let input = UserInput {
        name: None,
        email: Some("jane@example.com".to_string()),
        age: Some(30),
    };
    assert!(matches!(validator.validate(&input), Err(VerdictError::MissingField(_))));
    Ok(())
}

/// Integration test: pricing refuses an invalid order and prices a valid one
#[test]
fn test_order_pricing() -> Result<()> {
    let calculator = OrderCalculator::default();

    let items = vec![
        OrderItem::new("Headphones", 50.0, 1, "electronics"),
        OrderItem::new("Paperback", 10.0, 5, "books"),
    ];
    // 55.0 + 47.5 = 102.5, free shipping
    assert_eq!(calculator.calculate_total(&items)?, 102.5);

    let invalid = vec![OrderItem::new("", 10.0, 0, "books")];
    match calculator.calculate_total(&invalid) {
        Err(VerdictError::Rejected(result)) => assert_eq!(
            result.errors(),
            ["Invalid quantity for item ", "Product name cannot be empty"]
        ),
        other => panic!("Expected rejection, got {:?}", other),
    }
    Ok(())
}

/// Integration test: an order read from YAML is validated item by item
#[test]
fn test_parsed_order_with_infinite_price_rejected() -> Result<()> {
    let items = parse_order("- product_name: Telescope\n  price: .inf\n  quantity: 1\n  category: electronics\n")?;
    match OrderCalculator::default().calculate_total(&items) {
        Err(VerdictError::Rejected(result)) => assert_eq!(result.errors(), ["Invalid price for item Telescope"]),
        other => panic!("Expected rejection, got {:?}", other),
    }
    Ok(())
}

/// Integration test: the digit rule counts digits from any script
#[test]
fn test_password_with_arabic_indic_digit() -> Result<()> {
    let result = PasswordValidator::default().validate("Passwor\u{0663}!x")?;
    assert!(result.is_valid());
    Ok(())
}
