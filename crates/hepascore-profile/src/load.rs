//! Profile loading and validation.
//!
//! Profiles come from a TOML string or file and must pass semantic checks
//! beyond what serde enforces before the engine will accept them. Validation
//! failures are reported as `HepaError::InvalidProfile` with the offending
//! rule id or band values in the message.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use hepascore_contracts::error::{HepaError, HepaResult};

use crate::rule::ScoringProfile;

impl ScoringProfile {
    /// Parse `s` as TOML, validate, and build a `ScoringProfile`.
    ///
    /// Returns `HepaError::Config` if the TOML is malformed or does not match
    /// the profile schema, and `HepaError::InvalidProfile` if it parses but
    /// fails a semantic check.
    pub fn from_toml_str(s: &str) -> HepaResult<Self> {
        let profile: ScoringProfile = toml::from_str(s).map_err(|e| HepaError::Config {
            reason: format!("failed to parse profile TOML: {}", e),
        })?;
        profile.validate()?;
        Ok(profile)
    }

    /// Read the file at `path` and parse it as a TOML scoring profile.
    pub fn from_file(path: &Path) -> HepaResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| HepaError::Config {
            reason: format!("failed to read profile file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Semantic checks:
    ///
    /// - at least one rule
    /// - every rule carries at least one bound
    /// - rule ids are unique
    /// - band cutoffs strictly increase (moderate < high < critical)
    /// - every risk level has at least one recommendation
    fn validate(&self) -> HepaResult<()> {
        if self.rules.is_empty() {
            warn!("rejecting profile with no rules");
            return Err(HepaError::InvalidProfile {
                reason: "profile declares no rules".to_string(),
            });
        }

        let mut seen_ids = HashSet::new();
        for rule in &self.rules {
            if rule.is_unbounded() {
                return Err(HepaError::InvalidProfile {
                    reason: format!(
                        "rule '{}' has no bounds and would fire on every input",
                        rule.id
                    ),
                });
            }
            if !seen_ids.insert(rule.id.as_str()) {
                return Err(HepaError::InvalidProfile {
                    reason: format!("duplicate rule id '{}'", rule.id),
                });
            }
        }

        let bands = &self.bands;
        if bands.moderate >= bands.high || bands.high >= bands.critical {
            return Err(HepaError::InvalidProfile {
                reason: format!(
                    "band cutoffs must strictly increase: moderate={} high={} critical={}",
                    bands.moderate, bands.high, bands.critical
                ),
            });
        }

        for (level, list) in [
            ("low", &self.recommendations.low),
            ("moderate", &self.recommendations.moderate),
            ("high", &self.recommendations.high),
            ("critical", &self.recommendations.critical),
        ] {
            if list.is_empty() {
                return Err(HepaError::InvalidProfile {
                    reason: format!("no recommendations declared for level '{}'", level),
                });
            }
        }

        debug!(rules = self.rules.len(), "scoring profile validated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use hepascore_contracts::error::HepaError;

    use crate::rule::ScoringProfile;

    /// A minimal valid profile used as the base for the rejection tests.
    const MINIMAL: &str = r#"
[[rules]]
id = "albumin-low"
field = "albumin"
below = 3.5
points = 25
factor = "Low albumin levels"

[bands]
moderate = 20
high = 40
critical = 70

[recommendations]
low = ["routine monitoring"]
moderate = ["follow-up in 6 months"]
high = ["hepatologist referral"]
critical = ["immediate specialist consult"]
"#;

    #[test]
    fn minimal_profile_loads() {
        let profile = ScoringProfile::from_toml_str(MINIMAL).unwrap();
        assert_eq!(profile.rules.len(), 1);
        assert_eq!(profile.rules[0].id, "albumin-low");
        assert_eq!(profile.bands.critical, 70);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = ScoringProfile::from_toml_str("rules = 3").unwrap_err();
        assert!(matches!(err, HepaError::Config { .. }), "got {:?}", err);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err =
            ScoringProfile::from_file(std::path::Path::new("/no/such/profile.toml")).unwrap_err();
        match err {
            HepaError::Config { reason } => assert!(reason.contains("/no/such/profile.toml")),
            other => panic!("expected Config, got {:?}", other),
        }
    }

    #[test]
    fn empty_rule_list_is_rejected() {
        let toml = MINIMAL.replace(
            "[[rules]]\nid = \"albumin-low\"\nfield = \"albumin\"\nbelow = 3.5\npoints = 25\nfactor = \"Low albumin levels\"\n",
            "rules = []\n",
        );
        let err = ScoringProfile::from_toml_str(&toml).unwrap_err();
        match err {
            HepaError::InvalidProfile { reason } => assert!(reason.contains("no rules")),
            other => panic!("expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn unbounded_rule_is_rejected() {
        let toml = MINIMAL.replace("below = 3.5\n", "");
        let err = ScoringProfile::from_toml_str(&toml).unwrap_err();
        match err {
            HepaError::InvalidProfile { reason } => {
                assert!(reason.contains("albumin-low"));
                assert!(reason.contains("no bounds"));
            }
            other => panic!("expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_rule_ids_are_rejected() {
        let duplicated = format!(
            "{}\n[[rules]]\nid = \"albumin-low\"\nfield = \"albumin\"\nbelow = 3.0\npoints = 5\n",
            MINIMAL
        );
        let err = ScoringProfile::from_toml_str(&duplicated).unwrap_err();
        match err {
            HepaError::InvalidProfile { reason } => assert!(reason.contains("duplicate")),
            other => panic!("expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn non_increasing_bands_are_rejected() {
        let toml = MINIMAL.replace("high = 40", "high = 20");
        let err = ScoringProfile::from_toml_str(&toml).unwrap_err();
        match err {
            HepaError::InvalidProfile { reason } => {
                assert!(reason.contains("strictly increase"));
            }
            other => panic!("expected InvalidProfile, got {:?}", other),
        }
    }

    #[test]
    fn empty_recommendation_list_is_rejected() {
        let toml = MINIMAL.replace("high = [\"hepatologist referral\"]", "high = []");
        let err = ScoringProfile::from_toml_str(&toml).unwrap_err();
        match err {
            HepaError::InvalidProfile { reason } => assert!(reason.contains("'high'")),
            other => panic!("expected InvalidProfile, got {:?}", other),
        }
    }
}
