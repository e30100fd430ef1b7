use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Phone numbers: optional leading `+`, then 10 to 13 digits
    /// - Valid: "9876543210", "+919876543210"
    /// - Invalid: "12345", "98765-43210", "phone"
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{10,13}$").unwrap();

    /// Required free-text fields: at least one non-whitespace character
    pub static ref NON_BLANK_REGEX: Regex = Regex::new(r"\S").unwrap();
}

/// Rejects NaN and infinities, which pass `range` checks unnoticed
pub fn validate_finite(value: impl std::borrow::Borrow<f64>) -> Result<(), ValidationError> {
    if value.borrow().is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite").with_message("must be a finite number".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("9876543210"));
        assert!(PHONE_REGEX.is_match("+919876543210"));
        assert!(PHONE_REGEX.is_match("0444567890123"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("12345")); // too short
        assert!(!PHONE_REGEX.is_match("98765-43210")); // separator
        assert!(!PHONE_REGEX.is_match("phone"));
        assert!(!PHONE_REGEX.is_match(""));
    }

    #[test]
    fn test_non_blank_regex() {
        assert!(NON_BLANK_REGEX.is_match(" camp "));
        assert!(!NON_BLANK_REGEX.is_match("   "));
        assert!(!NON_BLANK_REGEX.is_match(""));
    }

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite(&0.0).is_ok());
        assert!(validate_finite(&-78.5).is_ok());
        assert!(validate_finite(&f64::NAN).is_err());
        assert!(validate_finite(&f64::INFINITY).is_err());
        assert!(validate_finite(&f64::NEG_INFINITY).is_err());
    }
}
