//! Character variety section - uppercase, lowercase, digit and special character checks.
//!
//! Only ASCII letters and digits count; letters from other scripts do not
//! satisfy the case checks.

use super::{Candidate, CheckRule};

/// Punctuation accepted by the special character check.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub const UPPERCASE_RULE: CheckRule = CheckRule {
    name: "uppercase",
    test: has_uppercase,
    passed_message: "Contains uppercase letters",
    failed_message: "Should contain uppercase letters (A-Z)",
    suggestion: "Add uppercase letters",
};

pub const LOWERCASE_RULE: CheckRule = CheckRule {
    name: "lowercase",
    test: has_lowercase,
    passed_message: "Contains lowercase letters",
    failed_message: "Should contain lowercase letters (a-z)",
    suggestion: "Add lowercase letters",
};

pub const DIGIT_RULE: CheckRule = CheckRule {
    name: "digit",
    test: has_digit,
    passed_message: "Contains numbers",
    failed_message: "Should contain numbers (0-9)",
    suggestion: "Add numbers",
};

pub const SPECIAL_RULE: CheckRule = CheckRule {
    name: "special",
    test: has_special,
    passed_message: "Contains special characters",
    failed_message: "Should contain special characters (!@#$%^&*)",
    suggestion: "Add special characters like !@#$%^&*",
};

fn has_uppercase(candidate: &Candidate) -> bool {
    candidate.text.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(candidate: &Candidate) -> bool {
    candidate.text.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(candidate: &Candidate) -> bool {
    candidate.text.chars().any(|c| c.is_ascii_digit())
}

fn has_special(candidate: &Candidate) -> bool {
    candidate.text.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}
