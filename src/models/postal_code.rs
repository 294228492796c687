//! Postal code value object
//!
//! A validated five digit ZIP code, the only input the regional weather
//! synthesizer accepts.
//!
//! # Examples
//!
//! ```
//! use snowday::models::PostalCode;
//!
//! let code = PostalCode::parse("02134").expect("valid postal code");
//! assert_eq!(code.value(), 2134);
//! assert_eq!(code.to_string(), "02134");
//!
//! assert!(PostalCode::parse("1234").is_err());
//! assert!(PostalCode::parse("abcde").is_err());
//! ```

use crate::error::SnowDayError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Five digit numeric postal code
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct PostalCode {
    digits: String,
    value: u32,
}

impl PostalCode {
    /// Number of digits a postal code must have
    pub const LENGTH: usize = 5;

    /// Parse and validate a postal code
    ///
    /// # Errors
    ///
    /// Returns `SnowDayError::InvalidPostalCode` unless the input is exactly
    /// five ASCII digits. No trimming or other sanitization is performed.
    pub fn parse(input: &str) -> Result<Self, SnowDayError> {
        if input.len() != Self::LENGTH || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SnowDayError::invalid_postal_code(input));
        }

        let value = input
            .parse::<u32>()
            .map_err(|_| SnowDayError::invalid_postal_code(input))?;

        Ok(Self {
            digits: input.to_string(),
            value,
        })
    }

    /// Numeric value of the code, leading zeros dropped
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Seed driving the deterministic weather draws (last four digits)
    #[must_use]
    pub const fn seed(&self) -> u32 {
        self.value % 10_000
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.digits
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

impl TryFrom<&str> for PostalCode {
    type Error = SnowDayError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl std::str::FromStr for PostalCode {
    type Err = SnowDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<PostalCode> for String {
    fn from(code: PostalCode) -> Self {
        code.digits
    }
}

/// Custom deserialization that validates postal codes
impl<'de> Deserialize<'de> for PostalCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
