//! Phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneNumberError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input has too few or too many digits.
    #[error("phone number must have between {min} and {max} digits")]
    BadLength {
        /// Minimum digit count.
        min: usize,
        /// Maximum digit count.
        max: usize,
    },
    /// The input contains a character outside the allowed set.
    #[error("phone number contains an invalid character: {0:?}")]
    InvalidCharacter(char),
}

/// A phone number in loose international format.
///
/// Allows digits plus the punctuation people actually type (`+`, `-`, `(`,
/// `)`, `.` and spaces). Between 7 and 15 digits overall, per E.164 plus a
/// little slack on the low end for local numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Minimum digit count.
    pub const MIN_DIGITS: usize = 7;
    /// Maximum digit count (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters outside
    /// digits and common phone punctuation, or has a digit count outside
    /// 7-15.
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        for c in trimmed.chars() {
            if !(c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | '.' | ' ')) {
                return Err(PhoneNumberError::InvalidCharacter(c));
            }
        }

        let digits = trimmed.chars().filter(char::is_ascii_digit).count();
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits) {
            return Err(PhoneNumberError::BadLength {
                min: Self::MIN_DIGITS,
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(PhoneNumber::parse("+84 912 345 678").is_ok());
        assert!(PhoneNumber::parse("(028) 3822-9999").is_ok());
        assert!(PhoneNumber::parse("0912345678").is_ok());
    }

    #[test]
    fn test_parse_trims() {
        let phone = PhoneNumber::parse("  0912345678 ").unwrap();
        assert_eq!(phone.as_str(), "0912345678");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(PhoneNumber::parse("  "), Err(PhoneNumberError::Empty)));
    }

    #[test]
    fn test_parse_too_short() {
        assert!(matches!(
            PhoneNumber::parse("12345"),
            Err(PhoneNumberError::BadLength { .. })
        ));
    }

    #[test]
    fn test_parse_too_long() {
        assert!(matches!(
            PhoneNumber::parse("1234567890123456"),
            Err(PhoneNumberError::BadLength { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_character() {
        assert!(matches!(
            PhoneNumber::parse("0912345678x"),
            Err(PhoneNumberError::InvalidCharacter('x'))
        ));
    }
}
