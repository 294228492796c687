//! Regional climate classification for postal codes
//!
//! A postal code's numeric range picks a coarse climate region, the calendar
//! month picks a season, and together they select the distribution
//! parameters the synthesizer draws from.

use crate::models::PostalCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse climate region derived from a postal code's numeric range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    /// California and Florida
    Warm,
    /// Texas and neighbours
    Southern,
    /// Northeast, upper Midwest and mountain West
    Cold,
    /// Everything else
    Moderate,
}

/// Season flag derived from the calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    /// December, January, February
    DeepWinter,
    /// November and March
    Winter,
    /// April through October
    Other,
}

impl Region {
    /// Classify a numeric postal code, first matching range wins
    #[must_use]
    pub fn classify(code: u32) -> Self {
        match code {
            c if c >= 90_000 => Region::Warm,
            32_000..=34_999 => Region::Warm,
            70_000..=79_999 => Region::Southern,
            1_000..=14_999
            | 46_000..=49_999
            | 53_000..=54_999
            | 60_000..=62_999
            | 59_000..=59_999
            | 82_000..=83_999
            | 80_000..=81_999 => Region::Cold,
            _ => Region::Moderate,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Region::Warm => "warm",
            Region::Southern => "southern",
            Region::Cold => "cold",
            Region::Moderate => "moderate",
        }
    }
}

impl Season {
    /// Season for a 1-based calendar month (January = 1)
    #[must_use]
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::DeepWinter,
            11 | 3 => Season::Winter,
            _ => Season::Other,
        }
    }

    /// True for deep winter and the shoulder winter months
    #[must_use]
    pub fn is_winter(self) -> bool {
        matches!(self, Season::DeepWinter | Season::Winter)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Season::DeepWinter => "deep-winter",
            Season::Winter => "winter",
            Season::Other => "other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Uniform draw `base + unit * span` taken at a fixed generator offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DrawRange {
    pub base: f64,
    pub span: f64,
    pub offset: u32,
}

impl DrawRange {
    const fn new(base: f64, span: f64, offset: u32) -> Self {
        Self { base, span, offset }
    }

    /// Upper (exclusive) bound of the range
    #[must_use]
    pub fn max(&self) -> f64 {
        self.base + self.span
    }
}

/// Distribution parameters for one region/season combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SynthesisParameters {
    /// Temperature in °C, floored to whole degrees after drawing
    pub temperature: DrawRange,
    /// Probability (0-1) that any snow falls at all
    pub snow_chance: f64,
    /// Base wind speed in mph before storm amplification
    pub wind: DrawRange,
}

/// Region and season for a postal code at a point in the year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionalProfile {
    pub region: Region,
    pub season: Season,
}

impl RegionalProfile {
    #[must_use]
    pub const fn new(region: Region, season: Season) -> Self {
        Self { region, season }
    }

    /// Profile for a postal code in the given 1-based month
    #[must_use]
    pub fn for_month(postal_code: &PostalCode, month: u32) -> Self {
        Self::new(Region::classify(postal_code.value()), Season::from_month(month))
    }

    /// Distribution parameters for this profile
    #[must_use]
    pub fn parameters(&self) -> SynthesisParameters {
        let season = self.season;
        match self.region {
            Region::Warm => SynthesisParameters {
                temperature: if season.is_winter() {
                    DrawRange::new(10.0, 15.0, 1)
                } else {
                    DrawRange::new(20.0, 20.0, 1)
                },
                snow_chance: 0.05,
                wind: DrawRange::new(5.0, 15.0, 2),
            },
            Region::Southern => SynthesisParameters {
                temperature: if season.is_winter() {
                    DrawRange::new(5.0, 20.0, 3)
                } else {
                    DrawRange::new(15.0, 25.0, 3)
                },
                snow_chance: if season == Season::DeepWinter { 0.3 } else { 0.1 },
                wind: DrawRange::new(8.0, 20.0, 4),
            },
            Region::Cold => match season {
                Season::DeepWinter => SynthesisParameters {
                    temperature: DrawRange::new(-15.0, 25.0, 5),
                    snow_chance: 0.7,
                    wind: DrawRange::new(10.0, 25.0, 6),
                },
                Season::Winter => SynthesisParameters {
                    temperature: DrawRange::new(-5.0, 20.0, 7),
                    snow_chance: 0.5,
                    wind: DrawRange::new(8.0, 20.0, 8),
                },
                Season::Other => SynthesisParameters {
                    temperature: DrawRange::new(5.0, 25.0, 9),
                    snow_chance: 0.05,
                    wind: DrawRange::new(5.0, 15.0, 10),
                },
            },
            Region::Moderate => SynthesisParameters {
                temperature: if season.is_winter() {
                    DrawRange::new(-2.0, 20.0, 11)
                } else {
                    DrawRange::new(10.0, 25.0, 11)
                },
                snow_chance: match season {
                    Season::DeepWinter => 0.4,
                    Season::Winter => 0.2,
                    Season::Other => 0.02,
                },
                wind: DrawRange::new(6.0, 18.0, 12),
            },
        }
    }
}

impl fmt::Display for RegionalProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.region, self.season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(90_000, Region::Warm)]
    #[case(99_501, Region::Warm)]
    #[case(32_000, Region::Warm)]
    #[case(34_999, Region::Warm)]
    #[case(35_000, Region::Moderate)]
    #[case(31_999, Region::Moderate)]
    #[case(70_000, Region::Southern)]
    #[case(79_999, Region::Southern)]
    #[case(999, Region::Moderate)]
    #[case(1_000, Region::Cold)]
    #[case(14_999, Region::Cold)]
    #[case(15_000, Region::Moderate)]
    #[case(46_000, Region::Cold)]
    #[case(49_999, Region::Cold)]
    #[case(53_202, Region::Cold)]
    #[case(55_401, Region::Moderate)]
    #[case(59_001, Region::Cold)]
    #[case(60_601, Region::Cold)]
    #[case(62_999, Region::Cold)]
    #[case(63_000, Region::Moderate)]
    #[case(80_000, Region::Cold)]
    #[case(83_999, Region::Cold)]
    #[case(84_000, Region::Moderate)]
    #[case(89_999, Region::Moderate)]
    fn test_region_classification(#[case] code: u32, #[case] expected: Region) {
        assert_eq!(Region::classify(code), expected);
    }

    #[rstest]
    #[case(1, Season::DeepWinter)]
    #[case(2, Season::DeepWinter)]
    #[case(3, Season::Winter)]
    #[case(4, Season::Other)]
    #[case(7, Season::Other)]
    #[case(10, Season::Other)]
    #[case(11, Season::Winter)]
    #[case(12, Season::DeepWinter)]
    fn test_season_from_month(#[case] month: u32, #[case] expected: Season) {
        assert_eq!(Season::from_month(month), expected);
    }

    #[test]
    fn test_deep_winter_is_winter() {
        assert!(Season::DeepWinter.is_winter());
        assert!(Season::Winter.is_winter());
        assert!(!Season::Other.is_winter());
    }

    #[test]
    fn test_cold_deep_winter_parameters() {
        let params = RegionalProfile::new(Region::Cold, Season::DeepWinter).parameters();
        assert_eq!(params.temperature.base, -15.0);
        assert_eq!(params.temperature.max(), 10.0);
        assert_eq!(params.snow_chance, 0.7);
        assert_eq!(params.wind.base, 10.0);
        assert_eq!(params.wind.max(), 35.0);
    }

    #[rstest]
    #[case(Season::DeepWinter, 0.4)]
    #[case(Season::Winter, 0.2)]
    #[case(Season::Other, 0.02)]
    fn test_moderate_snow_chance(#[case] season: Season, #[case] expected: f64) {
        let params = RegionalProfile::new(Region::Moderate, season).parameters();
        assert_eq!(params.snow_chance, expected);
    }

    #[test]
    fn test_southern_snow_chance_peaks_in_deep_winter() {
        let deep = RegionalProfile::new(Region::Southern, Season::DeepWinter).parameters();
        let shoulder = RegionalProfile::new(Region::Southern, Season::Winter).parameters();
        assert_eq!(deep.snow_chance, 0.3);
        assert_eq!(shoulder.snow_chance, 0.1);
    }

    #[test]
    fn test_warm_region_temperatures_by_season() {
        let winter = RegionalProfile::new(Region::Warm, Season::Winter).parameters();
        let summer = RegionalProfile::new(Region::Warm, Season::Other).parameters();
        assert_eq!((winter.temperature.base, winter.temperature.max()), (10.0, 25.0));
        assert_eq!((summer.temperature.base, summer.temperature.max()), (20.0, 40.0));
    }

    #[test]
    fn test_draw_offsets_are_distinct_per_profile() {
        let regions = [Region::Warm, Region::Southern, Region::Cold, Region::Moderate];
        let seasons = [Season::DeepWinter, Season::Winter, Season::Other];
        for region in regions {
            for season in seasons {
                let params = RegionalProfile::new(region, season).parameters();
                assert_ne!(params.temperature.offset, params.wind.offset);
            }
        }
    }

    #[test]
    fn test_profile_for_postal_code() {
        let code = PostalCode::parse("02134").unwrap();
        let profile = RegionalProfile::for_month(&code, 1);
        assert_eq!(profile, RegionalProfile::new(Region::Cold, Season::DeepWinter));
        assert_eq!(profile.to_string(), "cold (deep-winter)");
    }
}
