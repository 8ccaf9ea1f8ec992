//! Password strength evaluator - main evaluation logic.

use std::collections::BTreeSet;

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::crack_time::{CrackTime, crack_time};
use crate::rules::{RULES, char_count};
use crate::types::{PasswordEvaluation, PasswordStrength};

/// Length earning the first bonus point.
pub const LONG_LENGTH: usize = 12;

/// Length earning the second bonus point.
pub const VERY_LONG_LENGTH: usize = 16;

/// Passwords shorter than this score at most 1.
pub const SHORT_LENGTH: usize = 6;

/// Delay before a queued report is sent, see [`evaluate_password_report_tx`].
#[cfg(feature = "async")]
pub const REPORT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Evaluates password strength against [`RULES`].
///
/// The score is the number of passed rules, plus one point at
/// [`LONG_LENGTH`] characters and another at [`VERY_LONG_LENGTH`]. Below
/// [`SHORT_LENGTH`] characters the score is capped at 1 whatever else the
/// password has going for it.
///
/// An empty password yields a zero score and [`PasswordStrength::None`].
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return PasswordEvaluation::default();
    }

    let passed: BTreeSet<&'static str> = RULES
        .iter()
        .filter(|rule| rule.test(pwd))
        .map(|rule| rule.id)
        .collect();
    let mut score = passed.len() as u32;

    let pwd_len = char_count(pwd);
    if pwd_len >= LONG_LENGTH {
        score += 1;
    }
    if pwd_len >= VERY_LONG_LENGTH {
        score += 1;
    }

    // Applied after the bonuses
    if pwd_len < SHORT_LENGTH {
        score = score.min(1);
    }

    let strength = PasswordStrength::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated: score {}, strength {}, {} rules passed",
        score,
        strength,
        passed.len()
    );

    PasswordEvaluation {
        score,
        strength,
        passed,
    }
}

/// Rule evaluation and crack time estimate for one password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordReport {
    pub evaluation: PasswordEvaluation,
    pub crack_time: CrackTime,
}

impl PasswordReport {
    pub fn new(password: &SecretString) -> Self {
        Self {
            evaluation: evaluate_password_strength(password),
            crack_time: crack_time(password),
        }
    }
}

/// Debounced report delivery for as-you-type checking.
///
/// Waits [`REPORT_DEBOUNCE`], then sends the report on `tx`. Cancelling
/// `token` during the wait drops the report, so only the latest input of a
/// burst of keystrokes gets evaluated.
#[cfg(feature = "async")]
pub async fn evaluate_password_report_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("Password report queued");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(REPORT_DEBOUNCE) => {}
    }

    let report = PasswordReport::new(password);

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
