//! EmailAddress value object.

use super::errors::ValidationError;
use std::fmt;

/// A syntactically valid email address.
///
/// Validation requires exactly one `@`, a non-empty local part, and a domain
/// with at least one dot and no empty labels. This matches what the add/edit
/// forms accept; anything stricter belongs to whoever delivers the mail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }

        Ok(Self(email))
    }

    fn is_valid(email: &str) -> bool {
        let mut parts = email.split('@');
        let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) => (local, domain),
            _ => return false,
        };

        if local.is_empty() || domain.is_empty() {
            return false;
        }

        // Domain must be dotted and every label non-empty
        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("alice@example.com").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("").is_err());
        assert!(EmailAddress::new("invalid").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("alice@").is_err());
        assert!(EmailAddress::new("alice@domain").is_err());
        assert!(EmailAddress::new("alice@@example.com").is_err());
        assert!(EmailAddress::new("alice@example..com").is_err());
        assert!(EmailAddress::new("alice@example.com").is_ok());
        assert!(EmailAddress::new("a.b+tag@example.co.id").is_ok());
    }

    #[test]
    fn test_email_display() {
        let email = EmailAddress::new("alice@example.com").unwrap();
        assert_eq!(format!("{}", email), "alice@example.com");
    }

    #[test]
    fn test_email_into_inner() {
        let email = EmailAddress::new("alice@example.com").unwrap();
        assert_eq!(email.into_inner(), "alice@example.com".to_string());
    }
}
