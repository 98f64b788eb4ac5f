//! Scoring rule and profile schema types.
//!
//! A `ScoringProfile` is deserialized from TOML and holds an ordered list of
//! `ThresholdRule`s, the band cutoffs, and the recommendation text per risk
//! level. Rules are evaluated in declaration order, and every rule whose
//! bounds are satisfied fires — checks are mutually independent, with no
//! first-match short circuit.

use serde::{Deserialize, Serialize};

use hepascore_contracts::assessment::RiskLevel;
use hepascore_contracts::patient::BiomarkerField;

/// A single threshold check loaded from TOML.
///
/// A rule fires when the referenced biomarker satisfies every bound that is
/// set. At least one bound must be present (enforced at load time). Every
/// comparison against NaN evaluates false, so an unparseable form field
/// never fires a rule.
///
/// Example in TOML:
/// ```toml
/// [[rules]]
/// id = "alt-elevated"
/// field = "alanine-aminotransferase"
/// above = 50.0
/// points = 20
/// factor = "Elevated ALT levels"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThresholdRule {
    /// Stable identifier used in logs and validation messages.
    pub id: String,

    /// Human-readable explanation of what this rule checks.
    #[serde(default)]
    pub description: Option<String>,

    /// The biomarker this rule reads.
    pub field: BiomarkerField,

    /// Fires only when the value is strictly greater than this bound.
    pub above: Option<f64>,

    /// Fires only when the value is strictly less than this bound.
    pub below: Option<f64>,

    /// Fires only when the value is less than or equal to this bound.
    /// Combined with `above` this expresses a half-open band such as the
    /// moderate age range (45, 60].
    pub at_most: Option<f64>,

    /// Points added to the total score when the rule fires.
    pub points: u32,

    /// Risk-factor text recorded when the rule fires. A rule may contribute
    /// points without recording a factor (the moderate age band does).
    pub factor: Option<String>,
}

impl ThresholdRule {
    /// Return true if `value` satisfies every configured bound.
    pub fn fires(&self, value: f64) -> bool {
        let above_ok = self.above.map_or(true, |bound| value > bound);
        let below_ok = self.below.map_or(true, |bound| value < bound);
        let at_most_ok = self.at_most.map_or(true, |bound| value <= bound);
        above_ok && below_ok && at_most_ok
    }

    /// True if no bound is set at all. Such a rule would fire on every
    /// input; validation rejects it.
    pub fn is_unbounded(&self) -> bool {
        self.above.is_none() && self.below.is_none() && self.at_most.is_none()
    }
}

/// Score cutoffs mapping an accumulated total to a `RiskLevel`.
///
/// Evaluated highest-first; totals below `moderate` classify as Low.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskBands {
    pub moderate: u32,
    pub high: u32,
    pub critical: u32,
}

impl RiskBands {
    /// Bucket a total score into a risk level.
    pub fn classify(&self, total: u32) -> RiskLevel {
        if total >= self.critical {
            RiskLevel::Critical
        } else if total >= self.high {
            RiskLevel::High
        } else if total >= self.moderate {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

/// Canned recommendation text per risk level.
///
/// The list for a level is fixed: the same strings are returned regardless
/// of which risk factors fired.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub low: Vec<String>,
    pub moderate: Vec<String>,
    pub high: Vec<String>,
    pub critical: Vec<String>,
}

impl RecommendationSet {
    pub fn for_level(&self, level: RiskLevel) -> &[String] {
        match level {
            RiskLevel::Low => &self.low,
            RiskLevel::Moderate => &self.moderate,
            RiskLevel::High => &self.high,
            RiskLevel::Critical => &self.critical,
        }
    }
}

/// The top-level structure deserialized from a TOML profile file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringProfile {
    /// Ordered list of threshold checks. Every matching rule fires.
    pub rules: Vec<ThresholdRule>,
    pub bands: RiskBands,
    pub recommendations: RecommendationSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(above: Option<f64>, below: Option<f64>, at_most: Option<f64>) -> ThresholdRule {
        ThresholdRule {
            id: "test-rule".to_string(),
            description: None,
            field: BiomarkerField::Albumin,
            above,
            below,
            at_most,
            points: 10,
            factor: None,
        }
    }

    #[test]
    fn above_bound_is_strict() {
        let r = rule(Some(50.0), None, None);
        assert!(!r.fires(50.0));
        assert!(r.fires(50.1));
    }

    #[test]
    fn below_bound_is_strict() {
        let r = rule(None, Some(3.5), None);
        assert!(!r.fires(3.5));
        assert!(r.fires(3.4));
    }

    #[test]
    fn at_most_bound_is_inclusive() {
        let r = rule(Some(45.0), None, Some(60.0));
        assert!(!r.fires(45.0));
        assert!(r.fires(46.0));
        assert!(r.fires(60.0));
        assert!(!r.fires(61.0));
    }

    #[test]
    fn nan_never_fires_any_bound() {
        assert!(!rule(Some(0.0), None, None).fires(f64::NAN));
        assert!(!rule(None, Some(100.0), None).fires(f64::NAN));
        assert!(!rule(None, None, Some(100.0)).fires(f64::NAN));
    }

    #[test]
    fn unbounded_rule_is_detected() {
        assert!(rule(None, None, None).is_unbounded());
        assert!(!rule(Some(1.0), None, None).is_unbounded());
    }

    #[test]
    fn classify_uses_highest_band_first() {
        let bands = RiskBands { moderate: 20, high: 40, critical: 70 };
        assert_eq!(bands.classify(0), RiskLevel::Low);
        assert_eq!(bands.classify(19), RiskLevel::Low);
        assert_eq!(bands.classify(20), RiskLevel::Moderate);
        assert_eq!(bands.classify(39), RiskLevel::Moderate);
        assert_eq!(bands.classify(40), RiskLevel::High);
        assert_eq!(bands.classify(69), RiskLevel::High);
        assert_eq!(bands.classify(70), RiskLevel::Critical);
        assert_eq!(bands.classify(160), RiskLevel::Critical);
    }

    #[test]
    fn recommendations_lookup_by_level() {
        let recs = RecommendationSet {
            low: vec!["a".to_string()],
            moderate: vec!["b".to_string()],
            high: vec!["c".to_string()],
            critical: vec!["d".to_string()],
        };
        assert_eq!(recs.for_level(RiskLevel::Low), ["a".to_string()]);
        assert_eq!(recs.for_level(RiskLevel::Critical), ["d".to_string()]);
    }
}
