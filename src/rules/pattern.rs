//! Pattern rules - detects repeated runs and well-known sequences.

/// Run length at which a repeated character fails `no-repeat`.
const MAX_RUN: usize = 3;

/// Substrings rejected by `no-sequence`, matched case-insensitively.
const COMMON_SEQUENCES: [&str; 13] = [
    "012", "123", "234", "345", "456", "567", "678", "789", "abc", "bcd", "cde", "def", "qwerty",
];

/// Passes unless some character repeats 3 or more times in a row.
pub fn no_repeat_rule(password: &str) -> bool {
    let mut prev = None;
    let mut run = 0;
    for c in password.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= MAX_RUN {
                return false;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    true
}

/// Passes unless the password contains one of the common sequences.
pub fn no_sequence_rule(password: &str) -> bool {
    let lowered = password.to_ascii_lowercase();
    !COMMON_SEQUENCES.iter().any(|seq| lowered.contains(seq))
}
