//! Hepascore — liver disease risk assessment CLI.
//!
//! Scores a patient biomarker record against a declarative threshold profile
//! and prints the risk classification with its canned recommendations.
//!
//! Usage:
//!   cargo run -p hepascore-cli -- assess --age 70 --albumin 3.2
//!   cargo run -p hepascore-cli -- assess --json
//!   cargo run -p hepascore-cli -- presets
//!   cargo run -p hepascore-cli -- check-profile my-profile.toml

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hepascore_contracts::{
    assessment::Assessment,
    error::{HepaError, HepaResult},
    patient::{Gender, PatientData},
};
use hepascore_engine::{ProfileScorer, RiskScorer};
use hepascore_profile::ScoringProfile;

mod presets;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Hepascore — rule-based liver disease risk assessment.
///
/// The score is a deterministic sum of threshold checks against hardcoded
/// reference limits. It is an educational estimate, not a diagnosis.
#[derive(Parser)]
#[command(
    name = "hepascore",
    about = "Rule-based liver disease risk assessment",
    long_about = "Scores patient biomarkers against a declarative threshold profile\n\
                  and prints the risk level, triggered risk factors, and canned\n\
                  recommendations. Educational use only; not a medical diagnosis."
)]
struct Cli {
    /// Load the scoring profile from this TOML file instead of the built-in
    /// liver profile. Applies to `assess` and `presets`; `check-profile`
    /// validates its own path argument and ignores this flag.
    #[arg(long, global = true, value_name = "PATH")]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a single patient given per-field flags (defaults are the
    /// mid-range normal values).
    Assess(AssessArgs),
    /// Score the three canned patient presets and print each result.
    Presets,
    /// Parse and validate a scoring profile TOML file.
    CheckProfile {
        /// Path to the profile file.
        path: PathBuf,
    },
}

#[derive(clap::Args)]
struct AssessArgs {
    /// Age in years (1-120).
    #[arg(long, default_value_t = 45)]
    age: u32,

    /// Patient sex: "male" or "female". Carried on the record; read by no
    /// rule in the default profile.
    #[arg(long, value_parser = parse_gender, default_value = "male")]
    gender: Gender,

    /// Total bilirubin in mg/dL.
    #[arg(long, default_value_t = 1.0)]
    total_bilirubin: f64,

    /// Direct bilirubin in mg/dL.
    #[arg(long, default_value_t = 0.3)]
    direct_bilirubin: f64,

    /// Alkaline phosphatase in U/L.
    #[arg(long, default_value_t = 100)]
    alkaline_phosphatase: u32,

    /// Alanine aminotransferase in U/L.
    #[arg(long, visible_alias = "alt", default_value_t = 30)]
    alanine_aminotransferase: u32,

    /// Aspartate aminotransferase in U/L.
    #[arg(long, visible_alias = "ast", default_value_t = 30)]
    aspartate_aminotransferase: u32,

    /// Total proteins in g/dL.
    #[arg(long, default_value_t = 7.0)]
    total_proteins: f64,

    /// Albumin in g/dL.
    #[arg(long, default_value_t = 4.0)]
    albumin: f64,

    /// Albumin/globulin ratio.
    #[arg(long, visible_alias = "ag-ratio", default_value_t = 1.5)]
    albumin_globulin_ratio: f64,

    /// Emit the full assessment record as pretty JSON.
    #[arg(long)]
    json: bool,
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    match s.to_lowercase().as_str() {
        "male" | "m" => Ok(Gender::Male),
        "female" | "f" => Ok(Gender::Female),
        other => Err(format!("unknown gender '{}' (expected male or female)", other)),
    }
}

impl AssessArgs {
    fn to_patient(&self) -> PatientData {
        PatientData {
            age: self.age,
            gender: self.gender,
            total_bilirubin: self.total_bilirubin,
            direct_bilirubin: self.direct_bilirubin,
            alkaline_phosphatase: self.alkaline_phosphatase,
            alanine_aminotransferase: self.alanine_aminotransferase,
            aspartate_aminotransferase: self.aspartate_aminotransferase,
            total_proteins: self.total_proteins,
            albumin: self.albumin,
            albumin_globulin_ratio: self.albumin_globulin_ratio,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Assess(ref args) => run_assess(cli.profile.as_deref(), args),
        Command::Presets => run_presets(cli.profile.as_deref()),
        Command::CheckProfile { ref path } => run_check_profile(path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Build the scorer from `--profile` if given, otherwise the built-in liver
/// profile.
fn build_scorer(profile_path: Option<&std::path::Path>) -> HepaResult<ProfileScorer> {
    match profile_path {
        Some(path) => Ok(ProfileScorer::new(ScoringProfile::from_file(path)?)),
        None => ProfileScorer::liver_default(),
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_assess(profile_path: Option<&std::path::Path>, args: &AssessArgs) -> HepaResult<()> {
    let scorer = build_scorer(profile_path)?;
    let patient = args.to_patient();

    let tally = scorer.tally(&patient);
    let result = scorer.assess(&patient);
    let assessment = Assessment::new(patient, result);

    if args.json {
        let json = serde_json::to_string_pretty(&assessment).map_err(|e| HepaError::Serialize {
            reason: format!("failed to serialize assessment: {}", e),
        })?;
        println!("{}", json);
        return Ok(());
    }

    print_assessment(&assessment, tally.total);
    Ok(())
}

fn run_presets(profile_path: Option<&std::path::Path>) -> HepaResult<()> {
    let scorer = build_scorer(profile_path)?;

    for (name, patient) in presets::all() {
        println!("=== Preset: {} ===", name);
        println!();

        let tally = scorer.tally(&patient);
        let result = scorer.assess(&patient);
        let assessment = Assessment::new(patient, result);
        print_assessment(&assessment, tally.total);
    }

    Ok(())
}

fn run_check_profile(path: &std::path::Path) -> HepaResult<()> {
    let profile = ScoringProfile::from_file(path)?;
    println!("Profile '{}' is valid.", path.display());
    println!(
        "  {} rule(s), bands: moderate >= {}, high >= {}, critical >= {}",
        profile.rules.len(),
        profile.bands.moderate,
        profile.bands.high,
        profile.bands.critical
    );
    Ok(())
}

// ── Output formatting ─────────────────────────────────────────────────────────

fn print_assessment(assessment: &Assessment, total: u32) {
    let result = &assessment.result;
    let patient = &assessment.patient;

    println!(
        "  Patient:         {} year(s), {}",
        patient.age,
        patient.gender.as_str()
    );
    println!("  Score total:     {}", total);
    println!("  Risk level:      {}", result.risk);
    println!("  Confidence:      {:.1}%", result.confidence);

    if result.risk_factors.is_empty() {
        println!("  Risk factors:    none identified");
    } else {
        println!("  Risk factors:");
        for factor in &result.risk_factors {
            println!("    - {}", factor);
        }
    }

    println!("  Recommendations:");
    for rec in &result.recommendations {
        println!("    - {}", rec);
    }

    println!();
    println!("  Assessment id:   {}", assessment.id.0);
    println!("  Note: rule-based educational estimate, not a medical diagnosis.");
    println!();
}
