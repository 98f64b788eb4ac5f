//! # hepascore-engine
//!
//! Profile-driven risk scoring for patient biomarker records.
//!
//! The engine is deliberately small: one accumulation pass over declarative
//! threshold rules, a band lookup, and a decorative confidence sample.
//!
//!   PatientData → [tally rules] → total + factors → [classify] → RiskLevel
//!                                                 → recommendations + confidence
//!
//! Scoring has no failure conditions and no side effects; everything is a
//! return value. Latency simulation, rendering, and input parsing belong to
//! the UI layers.

pub mod confidence;
pub mod scorer;
pub mod traits;

pub use confidence::{FixedConfidence, RandomConfidence};
pub use scorer::{ProfileScorer, ScoreTally};
pub use traits::{ConfidenceSource, RiskScorer};
