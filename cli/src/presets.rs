//! Canned patient presets for the CLI.
//!
//! All values are hardcoded and fictional. No real patient data is present.

use hepascore_contracts::patient::PatientData;

/// Healthy baseline: every field at its mid-range normal value. Scores zero.
pub fn normal_baseline() -> PatientData {
    PatientData::default()
}

/// Advanced age with otherwise normal labs. The age rule alone fires,
/// landing the total exactly on the Moderate cutoff.
pub fn advanced_age() -> PatientData {
    PatientData {
        age: 70,
        direct_bilirubin: 0.2,
        ..PatientData::default()
    }
}

/// Young patient with an acute hepatocellular pattern: elevated bilirubins
/// and transaminases, depressed albumin and A/G ratio. Scores deep into the
/// Critical band.
pub fn acute_hepatitis() -> PatientData {
    PatientData {
        age: 30,
        total_bilirubin: 3.0,
        direct_bilirubin: 0.6,
        alanine_aminotransferase: 60,
        aspartate_aminotransferase: 60,
        albumin: 3.0,
        albumin_globulin_ratio: 0.8,
        ..PatientData::default()
    }
}

/// Every preset with its display name, in presentation order.
pub fn all() -> Vec<(&'static str, PatientData)> {
    vec![
        ("Normal baseline", normal_baseline()),
        ("Advanced age", advanced_age()),
        ("Acute hepatitis pattern", acute_hepatitis()),
    ]
}
