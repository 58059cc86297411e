//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of the password. Checks are
//! pass/fail requirements shown to the user; modifiers only move the score.
//! Both tables are evaluated in full, in declaration order.

mod common;
mod length;
mod pattern;
mod variety;

use crate::common_words::CommonWords;

pub use common::common_words_section;
pub use length::{length_bonus_section, MIN_LENGTH, MIN_LENGTH_RULE, RECOMMENDED_LENGTH};
pub use pattern::{repetition_section, sequence_section};
pub use variety::{DIGIT_RULE, LOWERCASE_RULE, SPECIAL_CHARACTERS, SPECIAL_RULE, UPPERCASE_RULE};

/// Points awarded for each passed check.
pub const CHECK_POINTS: i64 = 20;

/// The password under evaluation plus the context the sections need.
pub struct Candidate<'a> {
    pub text: &'a str,
    /// Length in UTF-16 code units; characters above U+FFFF count twice.
    pub length: usize,
    pub common_words: &'a CommonWords,
}

impl<'a> Candidate<'a> {
    pub fn new(text: &'a str, common_words: &'a CommonWords) -> Self {
        Self {
            text,
            length: text.encode_utf16().count(),
            common_words,
        }
    }
}

/// A mandatory requirement.
pub struct CheckRule {
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    pub name: &'static str,
    pub test: fn(&Candidate) -> bool,
    pub passed_message: &'static str,
    pub failed_message: &'static str,
    pub suggestion: &'static str,
}

/// Score change produced by a modifier, with an optional suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Adjustment {
    pub delta: i64,
    pub suggestion: Option<&'static str>,
}

impl Adjustment {
    pub const NONE: Adjustment = Adjustment { delta: 0, suggestion: None };

    pub const fn penalty(points: i64, suggestion: &'static str) -> Self {
        Adjustment { delta: -points, suggestion: Some(suggestion) }
    }
}

pub type ModifierFn = fn(&Candidate) -> Adjustment;

/// Mandatory checks, in display order.
pub const CHECKS: [CheckRule; 5] = [
    MIN_LENGTH_RULE,
    UPPERCASE_RULE,
    LOWERCASE_RULE,
    DIGIT_RULE,
    SPECIAL_RULE,
];

/// Score modifiers, in suggestion order.
pub const MODIFIERS: [(&str, ModifierFn); 4] = [
    ("length_bonus", length_bonus_section),
    ("sequence", sequence_section),
    ("repetition", repetition_section),
    ("common_words", common_words_section),
];
