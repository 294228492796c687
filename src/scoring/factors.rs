//! Per-factor base scores
//!
//! Each factor is a step function of the observation. Guards are evaluated
//! top to bottom and the first match wins, so arm order is significant at the
//! boundaries.

use crate::models::{CalculationBreakdown, Timing, WeatherObservation, round_to_tenth};

/// Temperature in °C (0-25 points)
#[must_use]
pub fn temperature_factor(temperature: f64) -> f64 {
    match temperature {
        t if t <= -10.0 => 25.0,
        t if t <= -5.0 => 20.0,
        t if t <= 0.0 => 15.0,
        t if t <= 2.0 => 8.0,
        t if t <= 5.0 => 3.0,
        _ => 0.0,
    }
}

/// Snowfall in inches (0-40 points)
#[must_use]
pub fn snowfall_factor(snowfall: f64) -> f64 {
    match snowfall {
        s if s >= 12.0 => 40.0,
        s if s >= 8.0 => 35.0,
        s if s >= 6.0 => 28.0,
        s if s >= 4.0 => 20.0,
        s if s >= 2.0 => 12.0,
        s if s >= 1.0 => 5.0,
        s if s >= 0.5 => 2.0,
        _ => 0.0,
    }
}

/// Wind speed in mph (0-20 points)
#[must_use]
pub fn wind_factor(wind_speed: f64) -> f64 {
    match wind_speed {
        w if w >= 35.0 => 20.0,
        w if w >= 25.0 => 15.0,
        w if w >= 15.0 => 8.0,
        w if w >= 10.0 => 3.0,
        _ => 0.0,
    }
}

/// When the snow falls (0-15 points)
#[must_use]
pub fn timing_factor(timing: Timing) -> f64 {
    match timing {
        Timing::Overnight => 15.0,
        Timing::EarlyMorning => 12.0,
        Timing::Morning => 5.0,
        Timing::Afternoon => 2.0,
        Timing::Evening => 8.0,
        Timing::Unknown => 0.0,
    }
}

/// Ice, snow pack and slush risk (0-15 points)
#[must_use]
pub fn road_conditions_factor(temperature: f64, snowfall: f64) -> f64 {
    match (temperature, snowfall) {
        (t, s) if t <= -7.0 && s >= 2.0 => 15.0,
        (t, s) if t <= 0.0 && s >= 3.0 => 12.0,
        (t, s) if t <= 2.0 && s >= 4.0 => 8.0,
        (_, s) if s >= 6.0 => 10.0,
        _ => 0.0,
    }
}

/// Blowing and falling snow (0-10 points)
#[must_use]
pub fn visibility_factor(snowfall: f64, wind_speed: f64) -> f64 {
    match (snowfall, wind_speed) {
        (s, w) if s >= 1.0 && w >= 20.0 => 10.0,
        (s, _) if s >= 3.0 => 6.0,
        (s, _) if s >= 1.5 => 3.0,
        _ => 0.0,
    }
}

/// Storm length implied by the snowfall total (0-10 points)
#[must_use]
pub fn duration_factor(snowfall: f64) -> f64 {
    match snowfall {
        s if s >= 8.0 => 10.0,
        s if s >= 4.0 => 6.0,
        s if s >= 2.0 => 3.0,
        _ => 0.0,
    }
}

/// All seven factors for an observation, each rounded to one decimal
#[must_use]
pub fn breakdown(obs: &WeatherObservation) -> CalculationBreakdown {
    CalculationBreakdown {
        temperature_factor: round_to_tenth(temperature_factor(obs.temperature)),
        snowfall_factor: round_to_tenth(snowfall_factor(obs.snowfall)),
        wind_factor: round_to_tenth(wind_factor(obs.wind_speed)),
        timing_factor: round_to_tenth(timing_factor(obs.timing)),
        road_conditions_factor: round_to_tenth(road_conditions_factor(
            obs.temperature,
            obs.snowfall,
        )),
        visibility_factor: round_to_tenth(visibility_factor(obs.snowfall, obs.wind_speed)),
        duration_factor: round_to_tenth(duration_factor(obs.snowfall)),
    }
}
