//! CLI error type and exit-code mapping.

use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] seismograph_core::SeismographError),
}

impl CliError {
    /// Process exit code: 2 for malformed input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Json(_) => 2,
            CliError::Engine(seismograph_core::SeismographError::InvalidWindow(_)) => 2,
            _ => 1,
        }
    }
}
