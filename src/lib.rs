//! Password strength checking library
//!
//! This library scores a password against a fixed rule set, estimates how
//! long a brute-force attack would take, and generates strong random
//! passwords.
//!
//! The rule score and the crack time estimate are independent measures: a
//! password can satisfy every rule and still crack in days, or fail most
//! rules and take years.
//!
//! # Features
//!
//! - `async` (default): Enables debounced report delivery over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{
//!     MAX_SCORE, PasswordStrength, RULES, estimate_crack_time, evaluate_password_strength,
//!     generate_strong_password,
//! };
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Password1".to_string().into());
//!
//! let evaluation = evaluate_password_strength(&password);
//! assert_eq!(evaluation.score, 5);
//! assert_eq!(evaluation.strength, PasswordStrength::Medium);
//! println!("{}/{} ({:.0}%)", evaluation.score, MAX_SCORE, evaluation.percentage());
//!
//! for item in evaluation.checklist() {
//!     println!("[{}] {}", if item.met { "x" } else { " " }, item.rule.label);
//! }
//! assert_eq!(RULES.len(), 6);
//!
//! println!("Est. crack time: {}", estimate_crack_time(&password));
//!
//! let generated = generate_strong_password();
//! let evaluation = evaluate_password_strength(&generated);
//! assert_eq!(evaluation.strength, PasswordStrength::Strong);
//! ```

// Internal modules
mod crack_time;
mod evaluator;
mod generator;
mod rules;
mod types;

// Public API
pub use crack_time::{CrackTime, GUESSES_PER_SECOND, crack_time, estimate_crack_time, pool_size};
pub use evaluator::{
    LONG_LENGTH, PasswordReport, SHORT_LENGTH, VERY_LONG_LENGTH, evaluate_password_strength,
};
pub use generator::{
    DEFAULT_PASSWORD_LENGTH, GeneratorError, MIN_PASSWORD_LENGTH, generate_password,
    generate_password_with_rng, generate_strong_password,
};
pub use rules::{MAX_SCORE, MIN_LENGTH, RULE_COUNT, RULES, Rule, rule};
pub use types::{ChecklistItem, MEDIUM_RATIO, PasswordEvaluation, PasswordStrength, WEAK_RATIO};

#[cfg(feature = "async")]
pub use evaluator::{REPORT_DEBOUNCE, evaluate_password_report_tx};
