//! Seam traits for the scoring engine.
//!
//! The UI layers depend on these traits rather than on a concrete scorer, so
//! tests can substitute canned implementations.

use hepascore_contracts::assessment::PredictionResult;
use hepascore_contracts::patient::PatientData;

/// Anything that can turn a patient snapshot into a `PredictionResult`.
pub trait RiskScorer: Send + Sync {
    /// Score one patient snapshot.
    ///
    /// Must be free of side effects and latency: the result is a plain
    /// return value, and any simulated processing delay is the caller's
    /// concern. The scorer accepts any numeric input, including negative,
    /// absurd, or NaN values, without rejecting it.
    fn assess(&self, patient: &PatientData) -> PredictionResult;
}

/// Source of the decorative confidence percentage attached to each result.
///
/// Implementations must return values in [75.0, 95.0). The value is not
/// derived from the inputs and exists only for display.
pub trait ConfidenceSource: Send + Sync {
    fn sample(&self) -> f64;
}
