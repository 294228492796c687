//! Regional weather synthesis
//!
//! This module estimates weather for a postal code without any network access:
//! - Profile: Climate region and season classification
//! - Generator: Deterministic seed-based draws
//! - Synthesizer: Temperature, snowfall and wind derivation

pub mod generator;
pub mod profile;
pub mod synthesizer;

pub use generator::SeededGenerator;
pub use profile::{DrawRange, Region, RegionalProfile, Season, SynthesisParameters};
pub use synthesizer::{synthesize, synthesize_for, synthesize_with_profile};
