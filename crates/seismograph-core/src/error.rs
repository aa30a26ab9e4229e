//! Seismograph error types.
//!
//! Only structural failures are errors: an invalid configuration at the
//! API boundary, or a window whose dates are duplicated or out of order.
//! Per-aspect and per-day anomalies (malformed records, empty days, thin
//! normalization history) are recovered locally and surfaced as data.

use thiserror::Error;

/// Errors that can abort a whole evaluation.
#[derive(Debug, Error)]
pub enum SeismographError {
    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The requested window is structurally invalid (empty, duplicate
    /// dates, or dates out of order).
    #[error("invalid evaluation window: {0}")]
    InvalidWindow(String),
}

/// Result alias for seismograph operations.
pub type SeismographResult<T> = Result<T, SeismographError>;
