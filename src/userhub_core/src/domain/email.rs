use std::sync::LazyLock;

use regex::Regex;

use super::error::ValidationError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile")
});

/// Validated email address. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if !EMAIL_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidEmailFormat);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::parse("john@example.com").unwrap();
        assert_eq!(email.as_str(), "john@example.com");
    }

    #[test]
    fn test_empty_email_is_rejected() {
        assert_eq!(Email::parse(""), Err(ValidationError::EmptyEmail));
        assert_eq!(Email::parse("   "), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        for candidate in ["bad", "no-at-sign.com", "two@@example.com", "a@b", "a b@c.com"] {
            assert_eq!(
                Email::parse(candidate),
                Err(ValidationError::InvalidEmailFormat),
                "{candidate} should be rejected"
            );
        }
    }

    #[test]
    fn test_equality_is_by_value() {
        let a = Email::parse("john@example.com").unwrap();
        let b = Email::parse("john@example.com").unwrap();
        assert_eq!(a, b);
    }

    #[quickcheck]
    fn test_parse_never_panics(candidate: String) -> bool {
        // Construction either succeeds or fails with a ValidationError.
        match Email::parse(candidate.clone()) {
            Ok(email) => email.as_str() == candidate,
            Err(_) => true,
        }
    }
}
