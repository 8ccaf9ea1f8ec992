//! Brute-force crack time estimation.
//!
//! Independent of the rule score: the estimate only looks at which
//! character classes appear and how long the password is.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::rules::char_count;

/// Assumed attacker throughput.
pub const GUESSES_PER_SECOND: f64 = 1e10;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// Crack time bucket.
///
/// Ordering is bucket first, then value, so a longer estimate never
/// compares lower than a shorter one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CrackTime {
    /// Empty input.
    NotApplicable,
    Instantly,
    Seconds(u64),
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Years(u64),
    /// Thousands of years.
    ThousandYears(u64),
    MillionsOfYears,
}

impl CrackTime {
    /// Buckets a duration in seconds, rounding to the nearest unit.
    pub fn from_seconds(seconds: f64) -> Self {
        if seconds < 1.0 {
            Self::Instantly
        } else if seconds < MINUTE {
            Self::Seconds(round(seconds))
        } else if seconds < HOUR {
            Self::Minutes(round(seconds / MINUTE))
        } else if seconds < DAY {
            Self::Hours(round(seconds / HOUR))
        } else if seconds < YEAR {
            Self::Days(round(seconds / DAY))
        } else if seconds < YEAR * 1e3 {
            Self::Years(round(seconds / YEAR))
        } else if seconds < YEAR * 1e6 {
            Self::ThousandYears(round(seconds / YEAR / 1e3))
        } else {
            Self::MillionsOfYears
        }
    }
}

fn round(value: f64) -> u64 {
    value.round() as u64
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotApplicable => Ok(()),
            Self::Instantly => f.write_str("instantly"),
            Self::Seconds(n) => write!(f, "{} seconds", n),
            Self::Minutes(n) => write!(f, "{} minutes", n),
            Self::Hours(n) => write!(f, "{} hours", n),
            Self::Days(n) => write!(f, "{} days", n),
            Self::Years(n) => write!(f, "{} years", n),
            Self::ThousandYears(n) => write!(f, "{}k years", n),
            Self::MillionsOfYears => f.write_str("millions of years"),
        }
    }
}

/// Estimated alphabet size: the sum of the sizes of the character classes
/// present anywhere in the password.
pub fn pool_size(password: &str) -> u32 {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut other = false;
    for c in password.chars() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            _ => other = true,
        }
    }

    [(lower, 26_u32), (upper, 26), (digit, 10), (other, 32)]
        .iter()
        .filter(|(present, _)| *present)
        .map(|&(_, size)| size)
        .sum()
}

/// Seconds needed to exhaust `pool_size ^ length` guesses.
///
/// Saturates to infinity for very long passwords.
pub fn crack_seconds(password: &str) -> f64 {
    let combinations = f64::from(pool_size(password)).powf(char_count(password) as f64);
    combinations / GUESSES_PER_SECOND
}

/// Estimates how long a brute-force attack would take.
pub fn crack_time(password: &SecretString) -> CrackTime {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return CrackTime::NotApplicable;
    }
    if pool_size(pwd) == 0 {
        return CrackTime::Instantly;
    }
    CrackTime::from_seconds(crack_seconds(pwd))
}

/// Human-readable crack time; empty for an empty password.
pub fn estimate_crack_time(password: &SecretString) -> String {
    crack_time(password).to_string()
}
