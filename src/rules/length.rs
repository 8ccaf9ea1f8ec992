//! Length rule - checks password minimum length.

/// Minimum number of characters for the `length` rule.
pub const MIN_LENGTH: usize = 8;

/// Counts characters (Unicode scalar values), not bytes.
pub fn char_count(password: &str) -> usize {
    password.chars().count()
}

/// Passes if the password has at least [`MIN_LENGTH`] characters.
pub fn length_rule(password: &str) -> bool {
    char_count(password) >= MIN_LENGTH
}
