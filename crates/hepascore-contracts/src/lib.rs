//! # hepascore-contracts
//!
//! Shared types for the hepascore workspace.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types. In particular the
//! scoring constants do NOT live here; they belong to the profile crate.

pub mod assessment;
pub mod error;
pub mod patient;

#[cfg(test)]
mod tests {
    use super::*;
    use assessment::{Assessment, AssessmentId, PredictionResult, RiskLevel};
    use error::HepaError;
    use patient::{BiomarkerField, Gender, PatientData};

    // ── PatientData ──────────────────────────────────────────────────────────

    #[test]
    fn default_patient_is_mid_range_normal() {
        let p = PatientData::default();
        assert_eq!(p.age, 45);
        assert_eq!(p.gender, Gender::Male);
        assert_eq!(p.total_bilirubin, 1.0);
        assert_eq!(p.direct_bilirubin, 0.3);
        assert_eq!(p.alkaline_phosphatase, 100);
        assert_eq!(p.alanine_aminotransferase, 30);
        assert_eq!(p.aspartate_aminotransferase, 30);
        assert_eq!(p.total_proteins, 7.0);
        assert_eq!(p.albumin, 4.0);
        assert_eq!(p.albumin_globulin_ratio, 1.5);
    }

    #[test]
    fn biomarker_accessor_covers_every_field() {
        let p = PatientData {
            age: 70,
            gender: Gender::Female,
            total_bilirubin: 2.5,
            direct_bilirubin: 0.6,
            alkaline_phosphatase: 180,
            alanine_aminotransferase: 55,
            aspartate_aminotransferase: 60,
            total_proteins: 6.5,
            albumin: 3.0,
            albumin_globulin_ratio: 0.9,
        };

        assert_eq!(p.biomarker(BiomarkerField::Age), 70.0);
        assert_eq!(p.biomarker(BiomarkerField::TotalBilirubin), 2.5);
        assert_eq!(p.biomarker(BiomarkerField::DirectBilirubin), 0.6);
        assert_eq!(p.biomarker(BiomarkerField::AlkalinePhosphatase), 180.0);
        assert_eq!(p.biomarker(BiomarkerField::AlanineAminotransferase), 55.0);
        assert_eq!(p.biomarker(BiomarkerField::AspartateAminotransferase), 60.0);
        assert_eq!(p.biomarker(BiomarkerField::TotalProteins), 6.5);
        assert_eq!(p.biomarker(BiomarkerField::Albumin), 3.0);
        assert_eq!(p.biomarker(BiomarkerField::AlbuminGlobulinRatio), 0.9);
    }

    #[test]
    fn nan_survives_the_record_untouched() {
        let p = PatientData {
            total_bilirubin: f64::NAN,
            ..PatientData::default()
        };
        assert!(p.biomarker(BiomarkerField::TotalBilirubin).is_nan());
    }

    #[test]
    fn gender_toggle_round_trips() {
        assert_eq!(Gender::Male.toggled(), Gender::Female);
        assert_eq!(Gender::Female.toggled(), Gender::Male);
        assert_eq!(Gender::Male.toggled().toggled(), Gender::Male);
    }

    // ── Serde ────────────────────────────────────────────────────────────────

    #[test]
    fn gender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
    }

    #[test]
    fn biomarker_field_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&BiomarkerField::TotalBilirubin).unwrap(),
            "\"total-bilirubin\""
        );
        assert_eq!(
            serde_json::to_string(&BiomarkerField::AlanineAminotransferase).unwrap(),
            "\"alanine-aminotransferase\""
        );
    }

    #[test]
    fn patient_data_round_trips() {
        let original = PatientData::default();
        let json = serde_json::to_string(&original).unwrap();
        let decoded: PatientData = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn prediction_result_round_trips() {
        let original = PredictionResult {
            risk: RiskLevel::High,
            confidence: 88.4,
            risk_factors: vec!["Elevated ALT levels".to_string()],
            recommendations: vec![
                "Urgent referral to a hepatologist".to_string(),
                "Advanced liver imaging (CT or MRI)".to_string(),
            ],
        };
        let json = serde_json::to_string(&original).unwrap();
        let decoded: PredictionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(original, decoded);
    }

    // ── RiskLevel ────────────────────────────────────────────────────────────

    #[test]
    fn risk_levels_order_by_severity() {
        assert!(RiskLevel::Low < RiskLevel::Moderate);
        assert!(RiskLevel::Moderate < RiskLevel::High);
        assert!(RiskLevel::High < RiskLevel::Critical);
    }

    #[test]
    fn risk_level_display_labels() {
        assert_eq!(RiskLevel::Low.to_string(), "Low");
        assert_eq!(RiskLevel::Moderate.to_string(), "Moderate");
        assert_eq!(RiskLevel::High.to_string(), "High");
        assert_eq!(RiskLevel::Critical.to_string(), "Critical");
    }

    // ── Assessment ───────────────────────────────────────────────────────────

    #[test]
    fn assessment_id_new_produces_unique_values() {
        let ids: Vec<AssessmentId> = (0..100).map(|_| AssessmentId::new()).collect();
        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.0.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    #[test]
    fn assessment_id_short_is_eight_chars() {
        let id = AssessmentId::new();
        assert_eq!(id.short().len(), 8);
        assert!(id.0.to_string().starts_with(&id.short()));
    }

    #[test]
    fn assessment_new_stamps_id_and_timestamp() {
        let before = chrono::Utc::now();
        let a = Assessment::new(
            PatientData::default(),
            PredictionResult {
                risk: RiskLevel::Low,
                confidence: 80.0,
                risk_factors: vec![],
                recommendations: vec!["Continue routine health monitoring".to_string()],
            },
        );
        let after = chrono::Utc::now();

        assert!(a.created_at >= before && a.created_at <= after);
        assert_eq!(a.result.risk, RiskLevel::Low);
    }

    // ── HepaError display messages ───────────────────────────────────────────

    #[test]
    fn error_config_display() {
        let err = HepaError::Config {
            reason: "unexpected key `bnads`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("profile configuration error"));
        assert!(msg.contains("bnads"));
    }

    #[test]
    fn error_serialize_display() {
        let err = HepaError::Serialize {
            reason: "unexpected end of input".to_string(),
        };
        assert!(err.to_string().contains("serialization error"));
    }

    #[test]
    fn error_invalid_profile_display() {
        let err = HepaError::InvalidProfile {
            reason: "rule 'age-severe' has no bounds".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("invalid scoring profile"));
        assert!(msg.contains("age-severe"));
    }
}
