//! Assessment output types.
//!
//! A `PredictionResult` is produced fresh on every scoring call and replaces
//! any previous one. An `Assessment` pairs the result with the input snapshot
//! it was computed from; assessments live only in memory for the current
//! session (e.g. the TUI history strip).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::patient::PatientData;

/// Ordinal risk classification assigned by bucketing the accumulated score.
///
/// Derives `Ord` in severity order: `Low < Moderate < High < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The output of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub risk: RiskLevel,
    /// Decorative confidence percentage in [75, 95). Not derived from the
    /// inputs and carries no statistical meaning.
    pub confidence: f64,
    /// One entry per threshold check that fired, in rule declaration order.
    pub risk_factors: Vec<String>,
    /// Fixed guidance text for the resulting risk level. The default liver
    /// profile carries exactly four entries per level.
    pub recommendations: Vec<String>,
}

/// Unique identifier for a single assessment run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub uuid::Uuid);

impl AssessmentId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }

    /// First 8 hex chars, for compact display.
    pub fn short(&self) -> String {
        self.0.to_string().chars().take(8).collect()
    }
}

impl Default for AssessmentId {
    fn default() -> Self {
        Self::new()
    }
}

/// One completed assessment: the input snapshot plus its result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub id: AssessmentId,
    pub created_at: DateTime<Utc>,
    pub patient: PatientData,
    pub result: PredictionResult,
}

impl Assessment {
    /// Stamp a fresh id and timestamp onto a completed scoring run.
    pub fn new(patient: PatientData, result: PredictionResult) -> Self {
        Self {
            id: AssessmentId::new(),
            created_at: Utc::now(),
            patient,
            result,
        }
    }
}
