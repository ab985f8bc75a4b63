//! Validation rules
//!
//! Each rule checks one aspect of the password policy. Rules are applied in a
//! fixed order by the evaluator; the first broken rule decides the verdict.

mod charset;
mod length;
mod repetition;
mod variety;

pub use charset::charset_rule;
pub use length::length_rule;
pub use repetition::repetition_rule;
pub use variety::variety_rule;

use crate::types::Violation;

/// Result of one rule check.
/// - `Some(violation)` - rule broken
/// - `None` - rule satisfied
pub type RuleResult = Option<Violation>;
