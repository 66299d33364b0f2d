// Order validation
// Checks an order has items and that every item is well formed

use crate::error::Result;
use crate::validation::rule_set::RuleSet;
use crate::validation::traits::{Rule, ValidationResult, Validator};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Product category, parsed case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Electronics,
    Books,
    Other(String),
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        let key = s.trim().to_uppercase();
        match key.as_str() {
            "ELECTRONICS" => Category::Electronics,
            "BOOKS" => Category::Books,
            _ => Category::Other(s),
        }
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from(s.to_string())
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Electronics => write!(f, "electronics"),
            Category::Books => write!(f, "books"),
            Category::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default = "default_category")]
    pub category: Category,
}

fn default_category() -> Category {
    Category::Other(String::new())
}

impl OrderItem {
    pub fn new(product_name: impl Into<String>, price: f64, quantity: i64, category: impl Into<Category>) -> Self {
        Self {
            product_name: product_name.into(),
            price,
            quantity,
            category: category.into(),
        }
    }

    /// Unit price times quantity, before any category adjustment
    pub fn base_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Parse an order written as a YAML list of items
pub fn parse_order(content: &str) -> Result<Vec<OrderItem>> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn load_order<P: AsRef<Path>>(path: P) -> Result<Vec<OrderItem>> {
    let content = fs::read_to_string(&path)?;
    let items = parse_order(&content)?;
    debug!("Loaded {} order item(s) from {}", items.len(), path.as_ref().display());
    Ok(items)
}

struct PositiveQuantity;

impl Rule<OrderItem> for PositiveQuantity {
    fn name(&self) -> &str {
        "positive_quantity"
    }

    fn check(&self, item: &OrderItem) -> Option<String> {
        (item.quantity <= 0).then(|| format!("Invalid quantity for item {}", item.product_name))
    }
}

struct NonNegativePrice;

impl Rule<OrderItem> for NonNegativePrice {
    fn name(&self) -> &str {
        "non_negative_price"
    }

    fn check(&self, item: &OrderItem) -> Option<String> {
        // NaN and infinity are not prices either
        (!item.price.is_finite() || item.price < 0.0).then(|| format!("Invalid price for item {}", item.product_name))
    }
}

struct NamedProduct;

impl Rule<OrderItem> for NamedProduct {
    fn name(&self) -> &str {
        "named_product"
    }

    fn check(&self, item: &OrderItem) -> Option<String> {
        item.product_name
            .trim()
            .is_empty()
            .then(|| "Product name cannot be empty".to_string())
    }
}

/// Validator for a whole order.
/// An empty order is one failure; otherwise every item is checked in order and
/// each item's failures follow the previous item's.
pub struct OrderValidator {
    item_rules: RuleSet<OrderItem>,
}

impl OrderValidator {
    pub fn new() -> Self {
        Self {
            item_rules: RuleSet::with_description("order item")
                .with_rule(PositiveQuantity)
                .with_rule(NonNegativePrice)
                .with_rule(NamedProduct),
        }
    }
}

impl Default for OrderValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<[OrderItem]> for OrderValidator {
    fn validate(&self, items: &[OrderItem]) -> Result<ValidationResult> {
        if items.is_empty() {
            return Ok(ValidationResult::fail("Order must contain at least one item"));
        }

        let mut result = ValidationResult::pass();
        for item in items {
            result.merge(self.item_rules.evaluate(item));
        }

        debug!(
            "Order validation of {} item(s) finished with {} failure(s)",
            items.len(),
            result.error_count()
        );
        Ok(result)
    }

    fn description(&self) -> &str {
        "order validator"
    }

    fn rule_names(&self) -> Vec<&str> {
        self.item_rules.rule_names()
    }
}
