//! # hepascore-profile
//!
//! TOML-driven scoring profiles for the hepascore engine.
//!
//! A `ScoringProfile` holds an ordered list of threshold rules, the risk band
//! cutoffs, and the canned recommendation text per risk level. Profiles are
//! fully declarative: the engine crate evaluates them against a `PatientData`
//! snapshot without any per-profile code. The built-in liver disease profile
//! is embedded at compile time.

pub mod load;
pub mod rule;

pub use rule::{RecommendationSet, RiskBands, ScoringProfile, ThresholdRule};

use hepascore_contracts::error::HepaResult;

/// The built-in liver disease profile, embedded at compile time.
pub const LIVER_PROFILE_TOML: &str = include_str!("../profiles/liver.toml");

/// Load the built-in liver disease profile.
pub fn liver_default() -> HepaResult<ScoringProfile> {
    ScoringProfile::from_toml_str(LIVER_PROFILE_TOML)
}
