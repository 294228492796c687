//! Data models for the SnowDay calculator
//!
//! This module contains the core domain models organized by concern:
//! - Observation: Weather conditions and snowfall timing
//! - Breakdown: Per-factor sub-scores reported alongside a probability
//! - Postal code: Validated ZIP code input for regional estimates

pub mod breakdown;
pub mod observation;
pub mod postal_code;

// Re-export all public types for convenient access
pub use breakdown::{CalculationBreakdown, Factor};
pub use observation::{Timing, WeatherObservation};
pub use postal_code::PostalCode;

/// Round to one decimal place, the precision every reported value uses
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
