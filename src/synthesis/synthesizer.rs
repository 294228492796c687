//! Regional weather synthesizer
//!
//! Turns a postal code and the current date into a plausible weather
//! observation without any weather service. Results are repeatable for a
//! given postal code and month.

use chrono::Datelike;
use tracing::debug;

use crate::Result;
use crate::models::{PostalCode, Timing, WeatherObservation, round_to_tenth};
use crate::synthesis::generator::SeededGenerator;
use crate::synthesis::profile::RegionalProfile;

/// Offset of the "does it snow at all" draw
const SNOW_CHANCE_OFFSET: u32 = 13;

/// Snow only falls at or below this temperature (°C)
const SNOW_TEMPERATURE_LIMIT: f64 = 2.0;

/// Synthesize weather for a raw postal code string
///
/// # Errors
///
/// Returns `SnowDayError::InvalidPostalCode` unless `postal_code` is exactly
/// five ASCII digits.
pub fn synthesize(postal_code: &str, now: impl Datelike) -> Result<WeatherObservation> {
    let postal_code = PostalCode::parse(postal_code)?;
    Ok(synthesize_for(&postal_code, now))
}

/// Synthesize weather for an already validated postal code
#[must_use]
pub fn synthesize_for(postal_code: &PostalCode, now: impl Datelike) -> WeatherObservation {
    synthesize_with_profile(postal_code, now).1
}

/// Synthesize weather, also returning the regional profile it was drawn from
#[must_use]
pub fn synthesize_with_profile(
    postal_code: &PostalCode,
    now: impl Datelike,
) -> (RegionalProfile, WeatherObservation) {
    let profile = RegionalProfile::for_month(postal_code, now.month());
    let params = profile.parameters();
    let generator = SeededGenerator::new(postal_code.seed());

    let temperature = params.temperature.base
        + (generator.unit(params.temperature.offset) * params.temperature.span).floor();

    let snowfall = draw_snowfall(&generator, temperature, params.snow_chance);

    let base_wind = generator.uniform(params.wind.offset, params.wind.base, params.wind.span);
    let wind_speed = base_wind * storm_amplification(snowfall);

    debug!(
        "Synthesized weather for {} [{}]: {}°C, {:.2}in snow, {:.2}mph wind",
        postal_code, profile, temperature, snowfall, wind_speed
    );

    let observation = WeatherObservation::new(
        temperature,
        round_to_tenth(snowfall),
        round_to_tenth(wind_speed),
        Timing::Overnight,
    );

    (profile, observation)
}

/// Unrounded snowfall in inches, zero unless the snow-chance draw hits and
/// it is cold enough
fn draw_snowfall(generator: &SeededGenerator, temperature: f64, snow_chance: f64) -> f64 {
    if generator.unit(SNOW_CHANCE_OFFSET) >= snow_chance || temperature > SNOW_TEMPERATURE_LIMIT {
        return 0.0;
    }

    let (offset, max_inches) = match temperature {
        t if t <= -10.0 => (14, 12.0),
        t if t <= -5.0 => (15, 8.0),
        t if t <= 0.0 => (16, 5.0),
        _ => (17, 2.0),
    };

    generator.unit(offset) * max_inches
}

/// Wind multiplier for storms: heavier snow brings stronger wind
fn storm_amplification(snowfall: f64) -> f64 {
    match snowfall {
        s if s > 4.0 => 1.5,
        s if s > 2.0 => 1.2,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnowDayError;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[rstest]
    #[case("02134", 1, -14.0, 7.6, 44.0)]
    #[case("60601", 1, -7.0, 3.8, 19.8)]
    #[case("53202", 1, -8.0, 5.8, 46.0)]
    #[case("55401", 1, 9.0, 0.0, 6.4)]
    #[case("33101", 1, 11.0, 0.0, 12.2)]
    #[case("75201", 7, 20.0, 0.0, 17.4)]
    #[case("02134", 11, -2.0, 1.4, 26.9)]
    fn test_reference_observations(
        #[case] postal_code: &str,
        #[case] month: u32,
        #[case] temperature: f64,
        #[case] snowfall: f64,
        #[case] wind_speed: f64,
    ) {
        let obs = synthesize(postal_code, date(2025, month, 15)).expect("valid postal code");
        assert_eq!(obs.temperature, temperature);
        assert_eq!(obs.snowfall, snowfall);
        assert_eq!(obs.wind_speed, wind_speed);
        assert_eq!(obs.timing, Timing::Overnight);
    }

    #[test]
    fn test_deterministic_within_a_month() {
        let first = synthesize("80202", date(2025, 1, 2)).unwrap();
        let second = synthesize("80202", date(2026, 1, 28)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_profile_returned_with_observation() {
        let code = PostalCode::parse("02134").unwrap();
        let (profile, observation) = synthesize_with_profile(&code, date(2025, 1, 15));
        assert_eq!(profile, RegionalProfile::for_month(&code, 1));
        assert_eq!(observation, synthesize_for(&code, date(2025, 1, 15)));

        let params = profile.parameters();
        assert!(observation.temperature >= params.temperature.base);
        assert!(observation.temperature < params.temperature.max());
    }

    #[test]
    fn test_invalid_postal_codes_rejected() {
        for input in ["1234", "abcde", "", "123456"] {
            let err = synthesize(input, date(2025, 1, 1)).unwrap_err();
            assert!(matches!(err, SnowDayError::InvalidPostalCode { .. }));
        }
    }

    #[test]
    fn test_leading_zero_postal_code_accepted() {
        assert!(synthesize("02134", date(2025, 1, 1)).is_ok());
    }

    #[test]
    fn test_no_snow_above_two_degrees() {
        let generator = SeededGenerator::new(2134);
        assert_eq!(draw_snowfall(&generator, 3.0, 1.0), 0.0);
        assert_eq!(draw_snowfall(&generator, 25.0, 1.0), 0.0);
    }

    #[test]
    fn test_no_snow_when_chance_draw_misses() {
        // unit(13) for seed 2134 is ~0.15
        let generator = SeededGenerator::new(2134);
        assert_eq!(draw_snowfall(&generator, -20.0, 0.1), 0.0);
        assert!(draw_snowfall(&generator, -20.0, 0.2) > 0.0);
    }

    #[rstest]
    #[case(-12.0, 12.0)]
    #[case(-10.0, 12.0)]
    #[case(-7.0, 8.0)]
    #[case(-1.0, 5.0)]
    #[case(0.0, 5.0)]
    #[case(2.0, 2.0)]
    fn test_snowfall_bounded_by_temperature_band(#[case] temperature: f64, #[case] max: f64) {
        for seed in (0..10_000).step_by(97) {
            let generator = SeededGenerator::new(seed);
            let snowfall = draw_snowfall(&generator, temperature, 1.0);
            assert!((0.0..max).contains(&snowfall));
        }
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(2.0, 1.0)]
    #[case(2.1, 1.2)]
    #[case(4.0, 1.2)]
    #[case(4.01, 1.5)]
    #[case(11.0, 1.5)]
    fn test_storm_amplification(#[case] snowfall: f64, #[case] expected: f64) {
        assert_eq!(storm_amplification(snowfall), expected);
    }
}
