//! Evaluation result types.

use std::collections::BTreeSet;
use std::fmt;

use crate::rules::{MAX_SCORE, RULES, Rule};

/// Upper bound (inclusive) of the score ratio classified as weak.
pub const WEAK_RATIO: f64 = 0.3;

/// Upper bound (inclusive) of the score ratio classified as medium.
pub const MEDIUM_RATIO: f64 = 0.65;

/// Minimum bar fill, in percent, for any non-empty password.
const MIN_PERCENTAGE: f64 = 5.0;

/// Coarse strength classification.
///
/// Ordered by severity for display; `None` marks an empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PasswordStrength {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    /// Classifies a `score / MAX_SCORE` ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio <= WEAK_RATIO {
            Self::Weak
        } else if ratio <= MEDIUM_RATIO {
            Self::Medium
        } else {
            Self::Strong
        }
    }

    /// Classifies a score against [`MAX_SCORE`].
    pub fn from_score(score: u32) -> Self {
        Self::from_ratio(f64::from(score) / f64::from(MAX_SCORE))
    }

    /// Display label, `None` for an empty input.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Weak => Some("Weak"),
            Self::Medium => Some("Medium"),
            Self::Strong => Some("Strong"),
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
        };
        f.write_str(name)
    }
}

/// Result of evaluating one password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordEvaluation {
    pub score: u32,
    pub strength: PasswordStrength,
    /// Ids of the rules the password satisfied.
    pub passed: BTreeSet<&'static str>,
}

/// One line of a rendered rule checklist.
#[derive(Debug, Clone, Copy)]
pub struct ChecklistItem {
    pub rule: &'static Rule,
    pub met: bool,
}

impl PasswordEvaluation {
    /// Returns `true` if the rule with `id` passed.
    pub fn has_passed(&self, id: &str) -> bool {
        self.passed.contains(id)
    }

    /// Strength bar fill in percent.
    ///
    /// `0` for an empty input; otherwise the score ratio, never below 5%.
    pub fn percentage(&self) -> f64 {
        if self.strength == PasswordStrength::None {
            return 0.0;
        }
        (f64::from(self.score) / f64::from(MAX_SCORE) * 100.0).max(MIN_PERCENTAGE)
    }

    /// Short advice for the user, `None` for an empty input.
    pub fn tip(&self) -> Option<&'static str> {
        match self.strength {
            PasswordStrength::None => None,
            PasswordStrength::Weak => Some("Try using a mix of uppercase, numbers, and symbols."),
            PasswordStrength::Medium => {
                Some("Almost there: add more variety or length to reach strong.")
            }
            PasswordStrength::Strong => Some("Excellent! This is a strong password."),
        }
    }

    /// Every rule in display order, flagged with whether it passed.
    pub fn checklist(&self) -> Vec<ChecklistItem> {
        RULES
            .iter()
            .map(|rule| ChecklistItem {
                rule,
                met: self.has_passed(rule.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ratio_boundaries() {
        assert_eq!(PasswordStrength::from_ratio(0.0), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_ratio(0.3), PasswordStrength::Weak);
        assert_eq!(PasswordStrength::from_ratio(0.300_001), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_ratio(0.65), PasswordStrength::Medium);
        assert_eq!(PasswordStrength::from_ratio(0.650_001), PasswordStrength::Strong);
        assert_eq!(PasswordStrength::from_ratio(1.0), PasswordStrength::Strong);
    }

    #[test]
    fn test_from_score() {
        let expected = [
            PasswordStrength::Weak,   // 0
            PasswordStrength::Weak,   // 0.125
            PasswordStrength::Weak,   // 0.25
            PasswordStrength::Medium, // 0.375
            PasswordStrength::Medium, // 0.5
            PasswordStrength::Medium, // 0.625
            PasswordStrength::Strong, // 0.75
            PasswordStrength::Strong, // 0.875
            PasswordStrength::Strong, // 1
        ];
        for (score, strength) in expected.iter().enumerate() {
            assert_eq!(PasswordStrength::from_score(score as u32), *strength);
        }
    }

    #[test]
    fn test_strength_ordering_and_display() {
        assert!(PasswordStrength::None < PasswordStrength::Weak);
        assert!(PasswordStrength::Medium < PasswordStrength::Strong);
        assert_eq!(PasswordStrength::Medium.to_string(), "medium");
        assert_eq!(PasswordStrength::Strong.label(), Some("Strong"));
        assert_eq!(PasswordStrength::None.label(), None);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(PasswordEvaluation::default().percentage(), 0.0);

        let low = PasswordEvaluation {
            score: 0,
            strength: PasswordStrength::Weak,
            passed: BTreeSet::new(),
        };
        assert_eq!(low.percentage(), 5.0);

        let mid = PasswordEvaluation {
            score: 4,
            strength: PasswordStrength::Medium,
            passed: BTreeSet::new(),
        };
        assert_eq!(mid.percentage(), 50.0);
    }

    #[test]
    fn test_tip() {
        assert!(PasswordEvaluation::default().tip().is_none());
        let strong = PasswordEvaluation {
            score: 8,
            strength: PasswordStrength::Strong,
            passed: BTreeSet::new(),
        };
        assert!(strong.tip().is_some_and(|t| t.contains("strong password")));
    }

    #[test]
    fn test_checklist_follows_rule_order() {
        let evaluation = PasswordEvaluation {
            score: 2,
            strength: PasswordStrength::Weak,
            passed: ["upper", "no-repeat"].into_iter().collect(),
        };
        let items = evaluation.checklist();
        assert_eq!(items.len(), RULES.len());
        let met: Vec<_> = items.iter().filter(|i| i.met).map(|i| i.rule.id).collect();
        assert_eq!(met, vec!["upper", "no-repeat"]);
        assert_eq!(items[0].rule.id, "length");
    }
}
