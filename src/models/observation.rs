//! Weather observation model and display methods

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weather conditions fed into the closure probability scorer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeatherObservation {
    /// Temperature in Celsius (whole degrees in practice, -30 to 40)
    pub temperature: f64,
    /// Expected snowfall in inches (0 to 50, 0.1 precision)
    pub snowfall: f64,
    /// Wind speed in mph (0 to 100, 0.1 precision)
    pub wind_speed: f64,
    /// Window in which the snow is expected to fall
    pub timing: Timing,
}

impl WeatherObservation {
    #[must_use]
    pub const fn new(temperature: f64, snowfall: f64, wind_speed: f64, timing: Timing) -> Self {
        Self {
            temperature,
            snowfall,
            wind_speed,
            timing,
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.0}°C", self.temperature)
    }

    /// Format snowfall with unit
    #[must_use]
    pub fn format_snowfall(&self) -> String {
        format!("{:.1} in", self.snowfall)
    }

    /// Format wind speed with unit
    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{:.1} mph", self.wind_speed)
    }
}

impl Default for WeatherObservation {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, Timing::Overnight)
    }
}

/// Time-of-day window in which snowfall is expected
///
/// Parsing never fails: anything unrecognised becomes [`Timing::Unknown`],
/// which scores zero timing points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum Timing {
    /// 6 PM - 6 AM
    Overnight,
    /// 4 AM - 8 AM
    EarlyMorning,
    /// 6 AM - 12 PM
    Morning,
    /// 12 PM - 6 PM
    Afternoon,
    /// 6 PM - 10 PM
    Evening,
    /// Unrecognised timing value
    Unknown,
}

impl Timing {
    /// All recognised timing windows in display order
    pub const ALL: [Timing; 5] = [
        Timing::Overnight,
        Timing::EarlyMorning,
        Timing::Morning,
        Timing::Afternoon,
        Timing::Evening,
    ];

    /// Wire representation (kebab-case)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Timing::Overnight => "overnight",
            Timing::EarlyMorning => "early-morning",
            Timing::Morning => "morning",
            Timing::Afternoon => "afternoon",
            Timing::Evening => "evening",
            Timing::Unknown => "unknown",
        }
    }

    /// Human readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Timing::Overnight => "Overnight",
            Timing::EarlyMorning => "Early Morning",
            Timing::Morning => "Morning",
            Timing::Afternoon => "Afternoon",
            Timing::Evening => "Evening",
            Timing::Unknown => "Unknown",
        }
    }

    /// Clock window covered by this timing
    #[must_use]
    pub fn window(self) -> Option<&'static str> {
        match self {
            Timing::Overnight => Some("6 PM - 6 AM"),
            Timing::EarlyMorning => Some("4 AM - 8 AM"),
            Timing::Morning => Some("6 AM - 12 PM"),
            Timing::Afternoon => Some("12 PM - 6 PM"),
            Timing::Evening => Some("6 PM - 10 PM"),
            Timing::Unknown => None,
        }
    }
}

impl From<&str> for Timing {
    fn from(value: &str) -> Self {
        match value {
            "overnight" => Timing::Overnight,
            "early-morning" => Timing::EarlyMorning,
            "morning" => Timing::Morning,
            "afternoon" => Timing::Afternoon,
            "evening" => Timing::Evening,
            _ => Timing::Unknown,
        }
    }
}

impl From<String> for Timing {
    fn from(value: String) -> Self {
        Timing::from(value.as_str())
    }
}

impl std::str::FromStr for Timing {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Timing::from(s))
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
