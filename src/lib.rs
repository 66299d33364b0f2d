//! Verdict - rule-based validation
//!
//! Validators apply an ordered set of independent rules to a candidate and
//! report every rule it violates, not just the first. Validated values can
//! then be classified with a threshold table or, for orders, priced.

pub mod classify;
pub mod error;
pub mod pricing;
pub mod validation;

pub use error::{Result, VerdictError};
