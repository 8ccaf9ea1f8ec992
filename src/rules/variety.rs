//! Character variety rules - uppercase, digits, special characters.

/// Passes if the password contains an uppercase Latin letter.
pub fn upper_rule(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Passes if the password contains a decimal digit.
pub fn number_rule(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Passes if the password contains anything other than a Latin letter or digit.
pub fn special_rule(password: &str) -> bool {
    password.chars().any(|c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_rule() {
        assert!(upper_rule("lowerAndOne"));
        assert!(!upper_rule("lowercase123!"));
        // non-Latin uppercase does not count
        assert!(!upper_rule("ÀÉÎ"));
    }

    #[test]
    fn test_number_rule() {
        assert!(number_rule("abc9"));
        assert!(!number_rule("NoNumbers!"));
        assert!(!number_rule("٣"));
    }

    #[test]
    fn test_special_rule() {
        assert!(special_rule("HasAll123!"));
        assert!(special_rule("with space"));
        assert!(special_rule("café"));
        assert!(!special_rule("NoSpecial123"));
    }

    #[test]
    fn test_variety_rules_empty() {
        assert!(!upper_rule(""));
        assert!(!number_rule(""));
        assert!(!special_rule(""));
    }
}
