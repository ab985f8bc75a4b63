//! Result types for password policy evaluation.

use thiserror::Error;

/// Coarse strength classification for UI feedback (e.g. a strength meter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl core::fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            StrengthTier::Weak => "weak",
            StrengthTier::Medium => "medium",
            StrengthTier::Strong => "strong",
        };
        write!(f, "{}", label)
    }
}

/// A policy rule broken by a candidate password.
///
/// Each variant maps to a stable numeric reason code via [`Violation::code`];
/// code 0 is reserved for the valid case (`Ok(())` from
/// [`validate`](crate::validate)). The `Display` messages are default-English
/// fallbacks; localization is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Characters outside the allowed alphabet. Carries the unique offending
    /// characters, space-separated.
    #[error("password contains characters that are not allowed: {0}")]
    InvalidCharacters(String),

    /// More than half of the characters are duplicates.
    #[error("password repeats too many characters")]
    ExcessiveRepetition,

    /// Outside the 6..=50 character bounds.
    #[error("password must be 6 to 50 characters long")]
    InvalidLength,

    /// Fewer than two character classes present.
    #[error("password must mix at least two character classes")]
    InsufficientVariety,
}

impl Violation {
    /// Stable reason code, 1..=4. Code 0 means valid and is never constructed
    /// here.
    pub fn code(&self) -> u8 {
        match self {
            Violation::InvalidCharacters(_) => 1,
            Violation::ExcessiveRepetition => 2,
            Violation::InvalidLength => 3,
            Violation::InsufficientVariety => 4,
        }
    }

    /// Extra detail for UI messaging, when the variant carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Violation::InvalidCharacters(found) => Some(found),
            _ => None,
        }
    }
}

/// Combined result of one evaluation pass, for one-call UI consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Tier for the strength meter.
    pub strength: StrengthTier,
    /// First broken policy rule, if any.
    pub violation: Option<Violation>,
    /// Whether the password appears on the loaded common-password blocklist.
    /// Always `false` when no blocklist has been initialized.
    pub common: bool,
}

impl Evaluation {
    /// True when no rule is broken and the password is not a known-common one.
    pub fn is_acceptable(&self) -> bool {
        self.violation.is_none() && !self.common
    }

    /// Reason code: 0 when valid, 1..=4 for the broken rule.
    pub fn code(&self) -> u8 {
        self.violation.as_ref().map(Violation::code).unwrap_or(0)
    }
}
