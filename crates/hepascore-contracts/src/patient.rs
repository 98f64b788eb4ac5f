//! Patient intake record types.
//!
//! `PatientData` is the fixed-shape snapshot the scorer consumes. The record
//! enforces no clinical invariants: values are taken exactly as entered on
//! the form, and out-of-range or unparseable input is the scorer's silent
//! no-op case, not an error.

use serde::{Deserialize, Serialize};

/// Patient sex as captured on the intake form.
///
/// Carried for completeness of the record; no rule in the default liver
/// profile reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// The other value. Used by the form's gender toggle.
    pub fn toggled(self) -> Self {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }
}

/// The numeric fields of `PatientData` that scoring rules may reference.
///
/// Serialized in kebab-case so profile TOML reads naturally:
///
/// ```toml
/// field = "total-bilirubin"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BiomarkerField {
    Age,
    TotalBilirubin,
    DirectBilirubin,
    AlkalinePhosphatase,
    AlanineAminotransferase,
    AspartateAminotransferase,
    TotalProteins,
    Albumin,
    AlbuminGlobulinRatio,
}

/// A snapshot of the ten intake-form fields for one assessment.
///
/// Decimal fields may carry NaN when form input failed to parse. Every
/// threshold comparison against NaN evaluates false, so such a field
/// contributes no points and records no risk factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientData {
    /// Age in years (form hint: 1-120).
    pub age: u32,
    pub gender: Gender,
    /// Total bilirubin in mg/dL.
    pub total_bilirubin: f64,
    /// Direct bilirubin in mg/dL.
    pub direct_bilirubin: f64,
    /// Alkaline phosphatase in U/L.
    pub alkaline_phosphatase: u32,
    /// Alanine aminotransferase (ALT) in U/L.
    pub alanine_aminotransferase: u32,
    /// Aspartate aminotransferase (AST) in U/L.
    pub aspartate_aminotransferase: u32,
    /// Total proteins in g/dL.
    pub total_proteins: f64,
    /// Albumin in g/dL.
    pub albumin: f64,
    /// Albumin/globulin ratio.
    pub albumin_globulin_ratio: f64,
}

impl PatientData {
    /// The numeric value of `field`, widened to `f64` for rule evaluation.
    pub fn biomarker(&self, field: BiomarkerField) -> f64 {
        match field {
            BiomarkerField::Age => f64::from(self.age),
            BiomarkerField::TotalBilirubin => self.total_bilirubin,
            BiomarkerField::DirectBilirubin => self.direct_bilirubin,
            BiomarkerField::AlkalinePhosphatase => f64::from(self.alkaline_phosphatase),
            BiomarkerField::AlanineAminotransferase => f64::from(self.alanine_aminotransferase),
            BiomarkerField::AspartateAminotransferase => {
                f64::from(self.aspartate_aminotransferase)
            }
            BiomarkerField::TotalProteins => self.total_proteins,
            BiomarkerField::Albumin => self.albumin,
            BiomarkerField::AlbuminGlobulinRatio => self.albumin_globulin_ratio,
        }
    }
}

impl Default for PatientData {
    /// Mid-range normal values. These seed the intake form and score zero
    /// points against the default liver profile.
    fn default() -> Self {
        Self {
            age: 45,
            gender: Gender::Male,
            total_bilirubin: 1.0,
            direct_bilirubin: 0.3,
            alkaline_phosphatase: 100,
            alanine_aminotransferase: 30,
            aspartate_aminotransferase: 30,
            total_proteins: 7.0,
            albumin: 4.0,
            albumin_globulin_ratio: 1.5,
        }
    }
}
