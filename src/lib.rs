//! `SnowDay` - Snow day closure probability calculator
//!
//! This library provides the two pure computations behind the calculator:
//! a deterministic regional weather estimate for a US postal code, and a
//! multi-factor scorer turning weather conditions into a closure probability.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod scoring;
pub mod synthesis;

// Re-export core types for public API
pub use config::{LoggingConfig, ScoringConfig, SnowDayConfig};
pub use error::SnowDayError;
pub use models::{CalculationBreakdown, Factor, PostalCode, Timing, WeatherObservation};
pub use scoring::{Adjustment, ClosureLikelihood, ScoreResult, Scorer, score};
pub use synthesis::{RegionalProfile, synthesize, synthesize_for, synthesize_with_profile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SnowDayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
