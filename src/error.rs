//! Error types and handling for the `SnowDay` calculator

use thiserror::Error;

/// Main error type for the `SnowDay` calculator
#[derive(Error, Debug)]
pub enum SnowDayError {
    /// Postal code is not exactly five ASCII digits
    #[error("Invalid postal code '{input}': expected exactly 5 digits")]
    InvalidPostalCode { input: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SnowDayError {
    /// Create a new postal code validation error
    pub fn invalid_postal_code<S: Into<String>>(input: S) -> Self {
        Self::InvalidPostalCode {
            input: input.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SnowDayError::InvalidPostalCode { .. } => {
                "Please enter a valid 5-digit ZIP code.".to_string()
            }
            SnowDayError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}
