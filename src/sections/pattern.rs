//! Pattern analysis section - detects sequential and repeated characters.

use super::{Adjustment, Candidate};

const SEQUENCES: [&str; 11] = [
    "abc", "bcd", "cde", "def", "123", "234", "345", "456", "567", "678", "789",
];

const PATTERN_PENALTY: i64 = 10;

/// Penalizes any of the fixed three-character runs, case-insensitively.
pub fn sequence_section(candidate: &Candidate) -> Adjustment {
    let lowered = candidate.text.to_ascii_lowercase();
    if SEQUENCES.iter().any(|s| lowered.contains(s)) {
        return Adjustment::penalty(
            PATTERN_PENALTY,
            "Avoid sequential characters like \"abc\" or \"123\"",
        );
    }
    Adjustment::NONE
}

/// Penalizes a UTF-16 code unit repeated three or more times in a row.
///
/// Characters above U+FFFF are surrogate pairs and never form a run, and
/// neither do line terminators.
pub fn repetition_section(candidate: &Candidate) -> Adjustment {
    let mut prev: Option<u16> = None;
    let mut repeated_count = 0;

    for unit in candidate.text.encode_utf16() {
        if is_line_terminator(unit) {
            prev = None;
            repeated_count = 0;
            continue;
        }
        if prev == Some(unit) {
            repeated_count += 1;
            if repeated_count >= 3 {
                return Adjustment::penalty(
                    PATTERN_PENALTY,
                    "Avoid repeating characters like \"aaa\" or \"111\"",
                );
            }
        } else {
            prev = Some(unit);
            repeated_count = 1;
        }
    }

    Adjustment::NONE
}

fn is_line_terminator(unit: u16) -> bool {
    matches!(unit, 0x000A | 0x000D | 0x2028 | 0x2029)
}
