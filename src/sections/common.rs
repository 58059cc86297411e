//! Common-word section - penalizes passwords containing a well-known word.

use super::{Adjustment, Candidate};

const COMMON_WORD_PENALTY: i64 = 20;

/// Penalizes a password that contains any common word as a substring.
///
/// Matching is containment, not equality: "myqwertydesk" is penalized.
pub fn common_words_section(candidate: &Candidate) -> Adjustment {
    if candidate.common_words.found_in(&candidate.text.to_lowercase()) {
        return Adjustment::penalty(COMMON_WORD_PENALTY, "Avoid common words and phrases");
    }
    Adjustment::NONE
}
