//! Analysis result types returned by the evaluator.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Qualitative strength label derived from the score.
///
/// Variants are declared in threshold order, so `Ord` follows the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Strength {
    #[cfg_attr(feature = "serde", serde(rename = "weak"))]
    Weak,
    #[cfg_attr(feature = "serde", serde(rename = "fair"))]
    Fair,
    #[cfg_attr(feature = "serde", serde(rename = "good"))]
    Good,
    #[cfg_attr(feature = "serde", serde(rename = "strong"))]
    Strong,
    #[cfg_attr(feature = "serde", serde(rename = "very strong"))]
    VeryStrong,
}

impl Strength {
    /// Classifies a score. Upper bounds are exclusive: 80 is `Strong`, not `Good`.
    pub fn from_score(score: i64) -> Self {
        if score < 40 {
            Strength::Weak
        } else if score < 60 {
            Strength::Fair
        } else if score < 80 {
            Strength::Good
        } else if score < 95 {
            Strength::Strong
        } else {
            Strength::VeryStrong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Fair => "fair",
            Strength::Good => "good",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single pass/fail requirement with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Check {
    pub passed: bool,
    pub message: String,
}

/// Complete result of one evaluation.
///
/// `checks` always holds five entries, in order: length, uppercase,
/// lowercase, digit, special character.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Analysis {
    pub strength: Strength,
    pub score: i64,
    pub checks: Vec<Check>,
    pub suggestions: Vec<String>,
}

impl Analysis {
    /// Number of mandatory requirements satisfied.
    pub fn passed_checks(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn all_checks_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }
}
