//! Password rules
//!
//! The fixed, ordered rule set a password is checked against. Each rule is
//! a named predicate over the exposed password text.

use std::fmt;

mod length;
mod pattern;
mod variety;

pub use length::{MIN_LENGTH, char_count, length_rule};
pub use pattern::{no_repeat_rule, no_sequence_rule};
pub use variety::{number_rule, special_rule, upper_rule};

/// Number of rules in [`RULES`].
pub const RULE_COUNT: usize = 6;

/// Highest reachable score: one point per rule plus the two length bonuses.
pub const MAX_SCORE: u32 = RULE_COUNT as u32 + 2;

/// A named boolean check over a password.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Unique identifier, stable across releases.
    pub id: &'static str,
    /// Human-readable description for checklists.
    pub label: &'static str,
    predicate: fn(&str) -> bool,
}

impl Rule {
    const fn new(id: &'static str, label: &'static str, predicate: fn(&str) -> bool) -> Self {
        Self { id, label, predicate }
    }

    /// Returns `true` if `password` satisfies this rule.
    pub fn test(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// The rule set, in display order.
pub static RULES: [Rule; RULE_COUNT] = [
    Rule::new("length", "At least 8 characters", length_rule),
    Rule::new("upper", "One uppercase letter", upper_rule),
    Rule::new("number", "One number", number_rule),
    Rule::new("special", "One special character", special_rule),
    Rule::new("no-repeat", "No 3+ repeated characters", no_repeat_rule),
    Rule::new("no-sequence", "No common sequences", no_sequence_rule),
];

/// Looks up a rule by its identifier.
pub fn rule(id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|r| r.id == id)
}
