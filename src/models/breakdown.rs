//! Per-factor score breakdown

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw sub-scores of the seven closure factors, each rounded to one decimal
///
/// These are the values before any bonus, penalty or floor is applied, so they
/// do not necessarily sum to the final probability.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalculationBreakdown {
    /// 0-25
    pub temperature_factor: f64,
    /// 0-40
    pub snowfall_factor: f64,
    /// 0-20
    pub wind_factor: f64,
    /// 0-15
    pub timing_factor: f64,
    /// 0-15
    pub road_conditions_factor: f64,
    /// 0-10
    pub visibility_factor: f64,
    /// 0-10
    pub duration_factor: f64,
}

/// One of the seven independently capped closure factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    Temperature,
    Snowfall,
    Wind,
    Timing,
    RoadConditions,
    Visibility,
    Duration,
}

impl Factor {
    /// Factors in display order
    pub const ALL: [Factor; 7] = [
        Factor::Temperature,
        Factor::Snowfall,
        Factor::Wind,
        Factor::Timing,
        Factor::RoadConditions,
        Factor::Visibility,
        Factor::Duration,
    ];

    /// Maximum points this factor can contribute
    #[must_use]
    pub fn cap(self) -> f64 {
        match self {
            Factor::Temperature => 25.0,
            Factor::Snowfall => 40.0,
            Factor::Wind => 20.0,
            Factor::Timing | Factor::RoadConditions => 15.0,
            Factor::Visibility | Factor::Duration => 10.0,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Factor::Temperature => "Temperature",
            Factor::Snowfall => "Snowfall",
            Factor::Wind => "Wind Speed",
            Factor::Timing => "Timing",
            Factor::RoadConditions => "Road Conditions",
            Factor::Visibility => "Visibility",
            Factor::Duration => "Storm Duration",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl CalculationBreakdown {
    /// Sub-score for a single factor
    #[must_use]
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Temperature => self.temperature_factor,
            Factor::Snowfall => self.snowfall_factor,
            Factor::Wind => self.wind_factor,
            Factor::Timing => self.timing_factor,
            Factor::RoadConditions => self.road_conditions_factor,
            Factor::Visibility => self.visibility_factor,
            Factor::Duration => self.duration_factor,
        }
    }

    /// `(factor, sub-score)` pairs in display order
    pub fn factors(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(|factor| (factor, self.get(factor)))
    }

    /// Sum of all seven sub-scores (0-135)
    #[must_use]
    pub fn base_total(&self) -> f64 {
        self.factors().map(|(_, value)| value).sum()
    }

    /// Share of its cap a factor reached, in 0.0-1.0
    #[must_use]
    pub fn fill_ratio(&self, factor: Factor) -> f64 {
        (self.get(factor) / factor.cap()).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CalculationBreakdown {
        CalculationBreakdown {
            temperature_factor: 20.0,
            snowfall_factor: 28.0,
            wind_factor: 15.0,
            timing_factor: 15.0,
            road_conditions_factor: 15.0,
            visibility_factor: 10.0,
            duration_factor: 6.0,
        }
    }

    #[test]
    fn test_base_total() {
        assert_eq!(sample().base_total(), 109.0);
        assert_eq!(CalculationBreakdown::default().base_total(), 0.0);
    }

    #[test]
    fn test_caps_sum_to_maximum_base() {
        let total: f64 = Factor::ALL.iter().map(|f| f.cap()).sum();
        assert_eq!(total, 135.0);
    }

    #[test]
    fn test_fill_ratio() {
        let breakdown = sample();
        assert_eq!(breakdown.fill_ratio(Factor::Visibility), 1.0);
        assert_eq!(breakdown.fill_ratio(Factor::Snowfall), 0.7);
        assert_eq!(breakdown.fill_ratio(Factor::Duration), 0.6);
    }

    #[test]
    fn test_factors_in_display_order() {
        let labels: Vec<&str> = sample().factors().map(|(f, _)| f.label()).collect();
        assert_eq!(labels.first(), Some(&"Temperature"));
        assert_eq!(labels.last(), Some(&"Storm Duration"));
        assert_eq!(labels.len(), 7);
    }

    #[test]
    fn test_breakdown_serialization_uses_camel_case() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["roadConditionsFactor"], 15.0);
        assert_eq!(json["durationFactor"], 6.0);
    }
}
