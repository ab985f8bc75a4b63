//! Charset rule - every non-alphanumeric character must be an allowed symbol.

use super::RuleResult;
use crate::classes::is_special;
use crate::types::Violation;

/// Checks that the password only uses characters from the allowed alphabet.
///
/// # Returns
/// - `Some(Violation::InvalidCharacters)` with the unique offending
///   characters, space-separated in discovery order
/// - `None` if every character is allowed
pub fn charset_rule(pwd: &str) -> RuleResult {
    let mut offending: Vec<char> = Vec::new();
    for c in pwd.chars().filter(|c| !c.is_ascii_alphanumeric()) {
        if !is_special(c) && !offending.contains(&c) {
            offending.push(c);
        }
    }

    if offending.is_empty() {
        return None;
    }
    let found = offending
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Some(Violation::InvalidCharacters(found))
}
