//! Errors raised while preparing a structural analysis.
//!
//! The engine itself never fails on individual files or edges; these errors
//! only surface at the configuration boundary.

use super::error_code::{self, TangleErrorCode};
use super::ConfigError;

/// Errors that can occur when building an analyzer from configuration.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid glob for {field}: '{pattern}' ({message})")]
    InvalidGlob {
        field: String,
        pattern: String,
        message: String,
    },
}

/// Result alias for analyzer construction.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl TangleErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::InvalidGlob { .. } => error_code::INVALID_GLOB,
        }
    }
}
