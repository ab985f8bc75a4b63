//! Variety rule - requires a minimum mix of character classes.

use super::RuleResult;
use crate::classes::ClassCounts;
use crate::types::Violation;

const MIN_CLASSES: usize = 2;

/// Checks that at least two of the four character classes are present.
///
/// # Returns
/// - `Some(Violation::InsufficientVariety)` if fewer than two classes appear
/// - `None` otherwise
pub fn variety_rule(pwd: &str) -> RuleResult {
    if ClassCounts::scan(pwd).classes_present() < MIN_CLASSES {
        return Some(Violation::InsufficientVariety);
    }
    None
}
