//! Password policy evaluator - strength tiering and validity checking.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::blocklist::is_common;
use crate::classes::ClassCounts;
use crate::rules::{charset_rule, length_rule, repetition_rule, variety_rule, RuleResult};
use crate::types::{Evaluation, StrengthTier, Violation};

/// Classifies a password into a strength tier for UI feedback.
///
/// The tier is a function of character-class diversity and length; the fewer
/// classes in use, the more length it takes to reach the same tier. The
/// breakpoints are fixed policy.
pub fn calc_strength(password: &SecretString) -> StrengthTier {
    let pwd = password.expose_secret();
    let len = pwd.chars().count();
    let classes = ClassCounts::scan(pwd).classes_present();

    if (classes <= 2 && len < 10) || (classes == 3 && len < 9) || (classes == 4 && len < 8) {
        return StrengthTier::Weak;
    }
    if (classes == 2 && len >= 18) || (classes == 3 && len >= 15) || (classes == 4 && len >= 12) {
        return StrengthTier::Strong;
    }
    StrengthTier::Medium
}

/// Checks a password against the policy rules.
///
/// Rules run in a fixed order and the first broken one decides the verdict:
/// allowed charset, then repetition, then length, then class variety. A
/// password breaking several rules reports only the first.
///
/// # Returns
/// `Ok(())` when the password passes, otherwise the first [`Violation`].
pub fn validate(password: &SecretString) -> Result<(), Violation> {
    let pwd = password.expose_secret();

    let rules: [(&str, fn(&str) -> RuleResult); 4] = [
        ("charset", charset_rule),
        ("repetition", repetition_rule),
        ("length", length_rule),
        ("variety", variety_rule),
    ];

    for (rule_name, rule) in rules {
        if let Some(violation) = rule(pwd) {
            #[cfg(feature = "tracing")]
            tracing::debug!("password rejected by {} rule", rule_name);
            #[cfg(not(feature = "tracing"))]
            let _ = rule_name;
            return Err(violation);
        }
    }
    Ok(())
}

/// Runs the full evaluation: strength tier, validity verdict, and the
/// common-password flag, in one call.
pub fn evaluate(password: &SecretString) -> Evaluation {
    let strength = calc_strength(password);
    let violation = validate(password).err();
    let common = is_common(password.expose_secret());

    Evaluation {
        strength,
        violation,
        common,
    }
}

/// Debounce before an async evaluation starts; a keystroke within this window
/// cancels the stale run.
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async variant that delivers the evaluation over a channel.
///
/// Sleeps the debounce window first and honors the cancellation token on both
/// sides of it, so a superseded evaluation is dropped without sending.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
) {
    if token.is_cancelled() {
        return;
    }
    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        return;
    }

    let evaluation = evaluate(password);
    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("failed to deliver password evaluation: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use serial_test::serial;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_evaluate_tx_delivers_result() {
        crate::blocklist::reset_blocklist_for_testing();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = secret("Valid#Pass99");
        evaluate_tx(&pwd, token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation, evaluate(&pwd));
    }

    #[tokio::test(start_paused = true)]
    #[serial]
    async fn test_evaluate_tx_cancelled_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        let pwd = secret("Valid#Pass99");
        evaluate_tx(&pwd, token, tx).await;

        assert!(rx.recv().await.is_none());
    }
}
