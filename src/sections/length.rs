//! Length section - minimum length requirement and long-password bonus.

use super::{Adjustment, Candidate, CheckRule};

pub const MIN_LENGTH: usize = 8;
pub const RECOMMENDED_LENGTH: usize = 12;
const PARTIAL_BONUS_LENGTH: usize = 10;

pub const MIN_LENGTH_RULE: CheckRule = CheckRule {
    name: "length",
    test: has_min_length,
    passed_message: "Contains at least 8 characters",
    failed_message: "Must be at least 8 characters long",
    suggestion: "Use at least 8 characters",
};

fn has_min_length(candidate: &Candidate) -> bool {
    candidate.length >= MIN_LENGTH
}

/// Awards +10 from 12 characters, +5 from 10.
///
/// Anything under 12 also gets the "12 or more" suggestion, including the
/// 10-11 range that already earned the partial bonus.
pub fn length_bonus_section(candidate: &Candidate) -> Adjustment {
    let len = candidate.length;
    let delta = if len >= RECOMMENDED_LENGTH {
        10
    } else if len >= PARTIAL_BONUS_LENGTH {
        5
    } else {
        0
    };

    let suggestion = (len < RECOMMENDED_LENGTH)
        .then_some("Use 12 or more characters for better security");

    Adjustment { delta, suggestion }
}
