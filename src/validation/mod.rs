// Validation System
// Ordered, non-short-circuiting rules and the validators built from them

pub mod composite;
pub mod field;
pub mod order;
pub mod password;
pub mod rule_set;
pub mod rules;
pub mod traits;
pub mod user;

pub use composite::CompositeValidator;
pub use field::FieldValidator;
pub use order::{Category, OrderItem, OrderValidator, load_order, parse_order};
pub use password::{PasswordPolicy, PasswordValidator};
pub use rule_set::RuleSet;
pub use traits::{Rule, ValidationResult, Validator};
pub use user::{Checked, User, UserInput, UserPolicy, UserValidator};
