//! Snow day probability scoring
//!
//! This module turns a weather observation into a closure probability:
//! - Factors: The seven capped sub-scores
//! - Scorer: Bonuses, penalties, clamping and floor overrides
//! - Outlook: Likelihood bands and recommendations for a probability

pub mod factors;
pub mod outlook;
pub mod scorer;

pub use outlook::ClosureLikelihood;
pub use scorer::{Adjustment, ScoreResult, Scorer, score};
