//! Error types for the hepascore workspace.
//!
//! Only the configuration path can fail: scoring itself has no error
//! conditions (unparseable input degrades to a no-op comparison instead).

use thiserror::Error;

/// The unified error type for the hepascore crates.
#[derive(Debug, Error)]
pub enum HepaError {
    /// A scoring profile could not be read or parsed as TOML.
    #[error("profile configuration error: {reason}")]
    Config { reason: String },

    /// A scoring profile parsed but failed semantic validation.
    #[error("invalid scoring profile: {reason}")]
    InvalidProfile { reason: String },

    /// An assessment could not be serialized for output.
    #[error("serialization error: {reason}")]
    Serialize { reason: String },
}

/// Convenience alias used throughout the hepascore crates.
pub type HepaResult<T> = Result<T, HepaError>;
