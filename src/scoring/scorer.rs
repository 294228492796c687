//! Closure probability scorer
//!
//! Single pass pipeline: factor sub-scores are summed, combination bonuses
//! added, penalties multiplied in, the total clamped to 0-100, and finally
//! the floor overrides applied in a fixed order.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::ScoringConfig;
use crate::models::{CalculationBreakdown, Timing, WeatherObservation, round_to_tenth};
use crate::scoring::factors;
use crate::scoring::outlook::ClosureLikelihood;

/// A bonus, penalty or override that fired while scoring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Adjustment {
    /// +8: 2in or more of snow at or below freezing, overnight
    PerfectStorm,
    /// +12: 4in or more of snow with 20 mph wind
    Blizzard,
    /// +6: any measurable snow at -7°C or colder
    IceStorm,
    /// +5: 3in or more of snow in the early morning
    RushHour,
    /// ×0.3: above 2°C with under 6in of snow
    WarmWeather,
    /// ×0.6: afternoon snow under 4in
    AfternoonTiming,
    /// Configured regional multiplier other than 1.0
    Regional(f64),
    /// Capped at 5%: under 0.5in of snow above freezing
    LightSnowCap,
    /// Forced to 0%: under 1in of snow above 2°C
    NoAccumulation,
    /// Raised to at least 85%: 10in of snow or more
    HeavySnowFloor,
    /// Raised to at least 95%: 15in of snow or more
    ExtremeSnowFloor,
}

impl Adjustment {
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Adjustment::PerfectStorm => "Overnight snow on frozen roads (+8)".to_string(),
            Adjustment::Blizzard => "Blizzard conditions (+12)".to_string(),
            Adjustment::IceStorm => "Ice storm potential (+6)".to_string(),
            Adjustment::RushHour => "Rush hour disruption (+5)".to_string(),
            Adjustment::WarmWeather => "Warm weather penalty (x0.3)".to_string(),
            Adjustment::AfternoonTiming => "Afternoon timing penalty (x0.6)".to_string(),
            Adjustment::Regional(factor) => format!("Regional adjustment (x{factor})"),
            Adjustment::LightSnowCap => "Too little snow above freezing (max 5%)".to_string(),
            Adjustment::NoAccumulation => "No accumulation expected (0%)".to_string(),
            Adjustment::HeavySnowFloor => "Heavy snowfall (min 85%)".to_string(),
            Adjustment::ExtremeSnowFloor => "Extreme snowfall (min 95%)".to_string(),
        }
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Closure probability with its per-factor explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Closure probability in percent (0-100, one decimal)
    pub probability: f64,
    /// Factor sub-scores before any adjustment
    pub breakdown: CalculationBreakdown,
    /// Adjustments that fired, in evaluation order
    pub adjustments: Vec<Adjustment>,
}

impl ScoreResult {
    #[must_use]
    pub fn likelihood(&self) -> ClosureLikelihood {
        ClosureLikelihood::from_probability(self.probability)
    }
}

/// Probability scorer with an optional regional multiplier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorer {
    regional_factor: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            regional_factor: 1.0,
        }
    }
}

impl Scorer {
    #[must_use]
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            regional_factor: config.regional_factor,
        }
    }

    #[must_use]
    pub fn regional_factor(&self) -> f64 {
        self.regional_factor
    }

    /// Score an observation. Total over every input, never fails.
    #[tracing::instrument(name = "score_observation", level = "debug", skip(self))]
    pub fn score(&self, obs: &WeatherObservation) -> ScoreResult {
        let breakdown = factors::breakdown(obs);
        let mut adjustments = Vec::new();

        let base = breakdown.base_total();
        let boosted = apply_bonuses(obs, base, &mut adjustments);
        let penalized = apply_penalties(obs, boosted, &mut adjustments);

        let regional = penalized * self.regional_factor;
        if self.regional_factor != 1.0 {
            adjustments.push(Adjustment::Regional(self.regional_factor));
        }

        let clamped = regional.clamp(0.0, 100.0);
        let probability = round_to_tenth(apply_floors(obs, clamped, &mut adjustments));

        debug!(
            "Base {:.1}, after bonuses {:.1}, after penalties {:.1}, final {:.1}%",
            base, boosted, penalized, probability
        );

        ScoreResult {
            probability,
            breakdown,
            adjustments,
        }
    }
}

/// Score an observation with the default (neutral) regional factor
#[must_use]
pub fn score(obs: &WeatherObservation) -> ScoreResult {
    Scorer::default().score(obs)
}

fn apply_bonuses(obs: &WeatherObservation, total: f64, adjustments: &mut Vec<Adjustment>) -> f64 {
    let (t, s, w) = (obs.temperature, obs.snowfall, obs.wind_speed);
    let bonuses = [
        (
            s >= 2.0 && t <= 0.0 && obs.timing == Timing::Overnight,
            Adjustment::PerfectStorm,
            8.0,
        ),
        (s >= 4.0 && w >= 20.0, Adjustment::Blizzard, 12.0),
        (t <= -7.0 && s >= 1.0, Adjustment::IceStorm, 6.0),
        (
            obs.timing == Timing::EarlyMorning && s >= 3.0,
            Adjustment::RushHour,
            5.0,
        ),
    ];

    bonuses
        .into_iter()
        .filter(|(applies, _, _)| *applies)
        .fold(total, |acc, (_, adjustment, points)| {
            adjustments.push(adjustment);
            acc + points
        })
}

fn apply_penalties(obs: &WeatherObservation, total: f64, adjustments: &mut Vec<Adjustment>) -> f64 {
    let mut total = total;

    if obs.temperature > 2.0 && obs.snowfall < 6.0 {
        total *= 0.3;
        adjustments.push(Adjustment::WarmWeather);
    }

    if obs.timing == Timing::Afternoon && obs.snowfall < 4.0 {
        total *= 0.6;
        adjustments.push(Adjustment::AfternoonTiming);
    }

    total
}

/// Floor overrides run after clamping and in this order; the zero override
/// wins over the 5% cap when both fire.
fn apply_floors(obs: &WeatherObservation, probability: f64, adjustments: &mut Vec<Adjustment>) -> f64 {
    let (t, s) = (obs.temperature, obs.snowfall);
    let mut probability = probability;

    if s < 0.5 && t > 0.0 {
        probability = probability.min(5.0);
        adjustments.push(Adjustment::LightSnowCap);
    }

    if s < 1.0 && t > 2.0 {
        probability = 0.0;
        adjustments.push(Adjustment::NoAccumulation);
    }

    if s >= 10.0 {
        probability = probability.max(85.0);
        adjustments.push(Adjustment::HeavySnowFloor);
    }

    if s >= 15.0 {
        probability = probability.max(95.0);
        adjustments.push(Adjustment::ExtremeSnowFloor);
    }

    probability
}
