//! Order total calculation.
//!
//! Totals are only computed for orders that pass [`OrderValidator`]; an invalid
//! order is returned as `VerdictError::Rejected` with the full failure report.

use crate::error::{Result, VerdictError};
use crate::validation::order::{Category, OrderItem, OrderValidator};
use crate::validation::traits::Validator;
use log::debug;
use serde::{Deserialize, Serialize};

/// Pricing rules for orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Added on top of electronics, e.g. 0.1 for 10%
    pub electronics_tax_rate: f64,
    pub book_bulk_discount_rate: f64,
    /// Minimum quantity of one book line for the bulk discount
    pub book_bulk_quantity: i64,
    pub free_shipping_threshold: f64,
    pub standard_shipping_cost: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            electronics_tax_rate: 0.1,
            book_bulk_discount_rate: 0.05,
            book_bulk_quantity: 5,
            free_shipping_threshold: 100.0,
            standard_shipping_cost: 10.0,
        }
    }
}

/// Breakdown of an order total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderTotal {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
}

pub struct OrderCalculator {
    config: PricingConfig,
    validator: OrderValidator,
}

impl OrderCalculator {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config,
            validator: OrderValidator::new(),
        }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Total including category adjustments and shipping, rounded to cents
    pub fn calculate_total(&self, items: &[OrderItem]) -> Result<f64> {
        Ok(self.breakdown(items)?.total)
    }

    pub fn breakdown(&self, items: &[OrderItem]) -> Result<OrderTotal> {
        let result = self.validator.validate(items)?;
        if !result.is_valid() {
            return Err(VerdictError::Rejected(result));
        }

        let subtotal: f64 = items.iter().map(|item| self.item_total(item)).sum();
        let shipping = self.shipping_cost(subtotal);
        let total = round_cents(subtotal + shipping);

        debug!("Order subtotal {:.2}, shipping {:.2}, total {:.2}", subtotal, shipping, total);
        Ok(OrderTotal {
            subtotal: round_cents(subtotal),
            shipping,
            total,
        })
    }

    fn item_total(&self, item: &OrderItem) -> f64 {
        let base = item.base_total();
        match item.category {
            Category::Electronics => base * (1.0 + self.config.electronics_tax_rate),
            Category::Books if item.quantity >= self.config.book_bulk_quantity => {
                base * (1.0 - self.config.book_bulk_discount_rate)
            }
            _ => base,
        }
    }

    fn shipping_cost(&self, subtotal: f64) -> f64 {
        if subtotal >= self.config.free_shipping_threshold {
            0.0
        } else {
            self.config.standard_shipping_cost
        }
    }
}

impl Default for OrderCalculator {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_plain_item_with_shipping() {
        let items = vec![OrderItem::new("Mug", 8.0, 2, "kitchen")];
        let total = OrderCalculator::default().calculate_total(&items).unwrap();
        assert!(approx(total, 26.0));
    }

    #[test]
    fn test_electronics_taxed_and_free_shipping() {
        let items = vec![OrderItem::new("Laptop", 1000.0, 1, "Electronics")];
        let total = OrderCalculator::default().calculate_total(&items).unwrap();
        assert!(approx(total, 1100.0));
    }

    #[test]
    fn test_book_bulk_discount_at_threshold() {
        let items = vec![OrderItem::new("Novel", 20.0, 5, "books")];
        let breakdown = OrderCalculator::default().breakdown(&items).unwrap();
        assert!(approx(breakdown.subtotal, 95.0));
        assert!(approx(breakdown.shipping, 10.0));
        assert!(approx(breakdown.total, 105.0));
    }

    #[test]
    fn test_books_below_bulk_threshold_not_discounted() {
        let items = vec![OrderItem::new("Novel", 20.0, 4, "books")];
        let total = OrderCalculator::default().calculate_total(&items).unwrap();
        assert!(approx(total, 90.0));
    }

    #[test]
    fn test_free_shipping_at_exact_threshold() {
        let items = vec![OrderItem::new("Chair", 50.0, 2, "furniture")];
        let total = OrderCalculator::default().calculate_total(&items).unwrap();
        assert!(approx(total, 100.0));
    }

    #[test]
    fn test_mixed_order_rounded() {
        let items = vec![
            OrderItem::new("Cable", 9.99, 3, "electronics"),
            OrderItem::new("Pen", 1.25, 1, "office"),
        ];
        // 29.97 * 1.1 = 32.967, + 1.25 = 34.217, + 10 shipping
        let total = OrderCalculator::default().calculate_total(&items).unwrap();
        assert!(approx(total, 44.22));
    }

    #[test]
    fn test_invalid_order_rejected_with_report() {
        let items = vec![OrderItem::new("Pen", -1.0, 0, "office")];
        match OrderCalculator::default().calculate_total(&items) {
            Err(VerdictError::Rejected(result)) => assert_eq!(result.error_count(), 2),
            other => panic!("Expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_infinite_price_not_priced() {
        let items = vec![OrderItem::new("Endless", f64::INFINITY, 1, "other")];
        assert!(matches!(
            OrderCalculator::default().calculate_total(&items),
            Err(VerdictError::Rejected(_))
        ));
    }

    #[test]
    fn test_empty_order_rejected() {
        let items: Vec<OrderItem> = Vec::new();
        assert!(matches!(
            OrderCalculator::default().calculate_total(&items),
            Err(VerdictError::Rejected(_))
        ));
    }

    #[test]
    fn test_custom_config() {
        let config = PricingConfig {
            standard_shipping_cost: 4.5,
            free_shipping_threshold: 1000.0,
            ..PricingConfig::default()
        };
        let items = vec![OrderItem::new("Mug", 8.0, 1, "kitchen")];
        let total = OrderCalculator::new(config).calculate_total(&items).unwrap();
        assert!(approx(total, 12.5));
    }
}
