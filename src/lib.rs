//! Password policy evaluation library
//!
//! This library classifies a candidate password into a coarse strength tier
//! for real-time UI feedback, and checks it against a fixed validity policy
//! for submit-time validation. Both checks are pure functions of the input;
//! an optional common-password blocklist adds an advisory flag.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based delivery with cancellation,
//!   for debounced strength meters
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_POLICY_BLOCKLIST`: Custom path to the common-password file
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{calc_strength, validate, StrengthTier};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Valid#Pass99".to_string().into());
//!
//! assert_eq!(calc_strength(&password), StrengthTier::Strong);
//! assert!(validate(&password).is_ok());
//! ```

// Internal modules
mod blocklist;
mod classes;
mod evaluator;
mod rules;
mod types;

// Public API
pub use blocklist::{
    blocklist_path, init_blocklist, init_blocklist_from_path, is_common, BlocklistError,
};
pub use classes::{is_special, ClassCounts};
pub use evaluator::{calc_strength, evaluate, validate};
pub use types::{Evaluation, StrengthTier, Violation};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
