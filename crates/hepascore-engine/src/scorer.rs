//! The profile-driven risk scorer.
//!
//! Scoring is one accumulation pass over the profile's threshold rules in
//! declaration order. Every rule whose bounds are satisfied fires
//! independently: its points are added to the running total and its factor
//! text (when present) is appended. The total is then bucketed into a
//! `RiskLevel` by the profile's band cutoffs, and the fixed recommendation
//! list for that level is attached together with a confidence sample.
//!
//! There are no failure conditions on this path. NaN input makes every
//! comparison false, so an unparseable field silently contributes nothing.

use tracing::debug;

use hepascore_contracts::assessment::PredictionResult;
use hepascore_contracts::error::HepaResult;
use hepascore_contracts::patient::PatientData;
use hepascore_profile::ScoringProfile;

use crate::confidence::RandomConfidence;
use crate::traits::{ConfidenceSource, RiskScorer};

/// Points and risk factors accumulated by one pass over the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTally {
    pub total: u32,
    /// Factor text of every firing rule, in rule declaration order.
    pub factors: Vec<String>,
}

/// A `RiskScorer` driven entirely by a `ScoringProfile`.
pub struct ProfileScorer {
    profile: ScoringProfile,
    confidence: Box<dyn ConfidenceSource>,
}

impl ProfileScorer {
    /// Build a scorer over `profile` with the default random confidence source.
    pub fn new(profile: ScoringProfile) -> Self {
        Self::with_confidence(profile, Box::new(RandomConfidence))
    }

    /// Build a scorer with an explicit confidence source.
    pub fn with_confidence(profile: ScoringProfile, confidence: Box<dyn ConfidenceSource>) -> Self {
        Self { profile, confidence }
    }

    /// Load the built-in liver profile and build a scorer over it.
    pub fn liver_default() -> HepaResult<Self> {
        Ok(Self::new(hepascore_profile::liver_default()?))
    }

    /// The profile this scorer evaluates.
    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Run the accumulation pass only: no bucketing, no confidence.
    pub fn tally(&self, patient: &PatientData) -> ScoreTally {
        let mut total = 0u32;
        let mut factors = Vec::new();

        for rule in &self.profile.rules {
            let value = patient.biomarker(rule.field);
            if !rule.fires(value) {
                continue;
            }
            total += rule.points;
            if let Some(factor) = &rule.factor {
                factors.push(factor.clone());
            }
        }

        ScoreTally { total, factors }
    }
}

impl RiskScorer for ProfileScorer {
    fn assess(&self, patient: &PatientData) -> PredictionResult {
        let tally = self.tally(patient);
        let risk = self.profile.bands.classify(tally.total);

        debug!(
            total = tally.total,
            risk = %risk,
            factors = tally.factors.len(),
            "patient scored"
        );

        PredictionResult {
            risk,
            confidence: self.confidence.sample(),
            risk_factors: tally.factors,
            recommendations: self.profile.recommendations.for_level(risk).to_vec(),
        }
    }
}
