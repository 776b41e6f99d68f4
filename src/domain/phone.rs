//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Indonesian mobile numbers: an optional `+62`/`62` country code or a leading
/// zero, the mobile prefix `8`, a non-zero operator digit, then 7-10 further
/// digits.
static ID_MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+?62|0)8[1-9][0-9]{7,10}$").expect("pattern compiles"));

/// A phone number in Indonesian mobile format.
///
/// The store keys uniqueness on the exact string as submitted, so no
/// normalization happens here; `0812...` and `+62812...` are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the number does not match
    /// the Indonesian mobile pattern.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !ID_MOBILE.is_match(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = PhoneNumber::new("081234567890").unwrap();
        assert_eq!(phone.as_str(), "081234567890");
    }

    #[test]
    fn test_phone_accepts_country_code_forms() {
        assert!(PhoneNumber::new("+6281234567890").is_ok());
        assert!(PhoneNumber::new("6281234567890").is_ok());
        assert!(PhoneNumber::new("089999999999").is_ok());
    }

    #[test]
    fn test_phone_rejects_invalid() {
        assert!(PhoneNumber::new("").is_err());
        assert!(PhoneNumber::new("no digits").is_err());
        // Not a mobile prefix
        assert!(PhoneNumber::new("0212345678").is_err());
        // Operator digit must be non-zero
        assert!(PhoneNumber::new("080234567890").is_err());
        // Too short / too long
        assert!(PhoneNumber::new("0812345").is_err());
        assert!(PhoneNumber::new("0812345678901234").is_err());
        // Formatting characters are not accepted
        assert!(PhoneNumber::new("0812-3456-7890").is_err());
        // US-style number
        assert!(PhoneNumber::new("+14155551234").is_err());
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("081234567890").unwrap();
        assert_eq!(format!("{}", phone), "081234567890");
    }
}
