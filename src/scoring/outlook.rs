//! Closure likelihood bands and recommendations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative band for a closure probability
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosureLikelihood {
    /// Below 25%
    VeryLow,
    /// 25% to under 50%
    Possible,
    /// 50% to under 70%
    Likely,
    /// 70% to under 85%
    VeryLikely,
    /// 85% and above
    AlmostCertain,
}

const PREPARATION_TIPS: [&str; 4] = [
    "Stock up on essentials (food, water, medications)",
    "Charge electronic devices and have backup power ready",
    "Clear vehicles and walkways early if possible",
    "Check on elderly neighbors and relatives",
];

impl ClosureLikelihood {
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        match probability {
            p if p >= 85.0 => ClosureLikelihood::AlmostCertain,
            p if p >= 70.0 => ClosureLikelihood::VeryLikely,
            p if p >= 50.0 => ClosureLikelihood::Likely,
            p if p >= 25.0 => ClosureLikelihood::Possible,
            _ => ClosureLikelihood::VeryLow,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ClosureLikelihood::AlmostCertain => "Almost Certain",
            ClosureLikelihood::VeryLikely => "Very Likely",
            ClosureLikelihood::Likely => "Likely",
            ClosureLikelihood::Possible => "Possible",
            ClosureLikelihood::VeryLow => "Very Low",
        }
    }

    /// Advice for households and commuters
    #[must_use]
    pub fn recommendation(self) -> &'static str {
        match self {
            ClosureLikelihood::AlmostCertain => {
                "Almost certain closure expected. Plan for a snow day and prepare for extended disruptions."
            }
            ClosureLikelihood::VeryLikely => {
                "Very likely closure. Make backup childcare arrangements and prepare for travel delays."
            }
            ClosureLikelihood::Likely => {
                "Likely closure. Monitor weather updates and have contingency plans ready."
            }
            ClosureLikelihood::Possible => {
                "Possible closure. Stay alert to changing conditions and official announcements."
            }
            ClosureLikelihood::VeryLow => {
                "Closure unlikely. Normal operations expected, but monitor conditions."
            }
        }
    }

    /// Preparation checklist, only offered for the two highest bands
    #[must_use]
    pub fn preparation_tips(self) -> &'static [&'static str] {
        if self >= ClosureLikelihood::VeryLikely {
            &PREPARATION_TIPS
        } else {
            &[]
        }
    }
}

impl fmt::Display for ClosureLikelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, ClosureLikelihood::VeryLow)]
    #[case(24.9, ClosureLikelihood::VeryLow)]
    #[case(25.0, ClosureLikelihood::Possible)]
    #[case(49.9, ClosureLikelihood::Possible)]
    #[case(50.0, ClosureLikelihood::Likely)]
    #[case(70.0, ClosureLikelihood::VeryLikely)]
    #[case(84.9, ClosureLikelihood::VeryLikely)]
    #[case(85.0, ClosureLikelihood::AlmostCertain)]
    #[case(100.0, ClosureLikelihood::AlmostCertain)]
    fn test_bands(#[case] probability: f64, #[case] expected: ClosureLikelihood) {
        assert_eq!(ClosureLikelihood::from_probability(probability), expected);
    }

    #[test]
    fn test_preparation_tips_only_for_high_bands() {
        assert_eq!(ClosureLikelihood::AlmostCertain.preparation_tips().len(), 4);
        assert_eq!(ClosureLikelihood::VeryLikely.preparation_tips().len(), 4);
        assert!(ClosureLikelihood::Likely.preparation_tips().is_empty());
        assert!(ClosureLikelihood::VeryLow.preparation_tips().is_empty());
    }

    #[test]
    fn test_labels_and_recommendations() {
        assert_eq!(ClosureLikelihood::VeryLikely.to_string(), "Very Likely");
        assert!(
            ClosureLikelihood::VeryLow
                .recommendation()
                .starts_with("Closure unlikely")
        );
    }
}
