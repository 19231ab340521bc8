//! Input validation for session command arguments.
//!
//! These validators are used by clap's `value_parser` attribute so a bad
//! argument is rejected before any store operation runs.

/// Maximum user name length in characters.
pub const MAX_USER_NAME_LENGTH: usize = 64;

/// Validate a user name.
///
/// Names are trimmed and must be non-empty, at most
/// [`MAX_USER_NAME_LENGTH`] characters, and free of control characters.
pub fn validate_user_name(s: &str) -> Result<String, String> {
    let name = s.trim();

    if name.is_empty() {
        return Err("User name cannot be empty".to_string());
    }

    if name.chars().count() > MAX_USER_NAME_LENGTH {
        return Err(format!(
            "User name cannot exceed {MAX_USER_NAME_LENGTH} characters"
        ));
    }

    if name.chars().any(char::is_control) {
        return Err("User name cannot contain control characters".to_string());
    }

    Ok(name.to_string())
}

/// Validate a connection weight: a finite number greater than zero.
pub fn validate_weight(s: &str) -> Result<f64, String> {
    let weight: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid weight '{s}': expected a number"))?;

    if !weight.is_finite() || weight <= 0.0 {
        return Err(format!(
            "Invalid weight '{s}': must be finite and greater than zero"
        ));
    }

    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::simple("alice", "alice")]
    #[case::trimmed("  bob  ", "bob")]
    #[case::unicode("zoë", "zoë")]
    #[case::punctuation("o'neil", "o'neil")]
    fn test_valid_user_names(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_user_name(input).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::control("ali\u{7}ce")]
    fn test_invalid_user_names(#[case] input: &str) {
        assert!(validate_user_name(input).is_err());
    }

    #[test]
    fn test_user_name_length_limit() {
        let at_limit = "a".repeat(MAX_USER_NAME_LENGTH);
        assert!(validate_user_name(&at_limit).is_ok());

        let over_limit = "a".repeat(MAX_USER_NAME_LENGTH + 1);
        let err = validate_user_name(&over_limit).unwrap_err();
        assert!(err.contains("cannot exceed"));
    }

    #[rstest]
    #[case::integer("3", 3.0)]
    #[case::fraction("0.25", 0.25)]
    #[case::padded(" 2 ", 2.0)]
    fn test_valid_weights(#[case] input: &str, #[case] expected: f64) {
        assert_eq!(validate_weight(input).unwrap(), expected);
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-1")]
    #[case::infinite("inf")]
    #[case::nan("NaN")]
    #[case::text("heavy")]
    fn test_invalid_weights(#[case] input: &str) {
        assert!(validate_weight(input).is_err());
    }
}
