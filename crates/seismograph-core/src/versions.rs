//! Calibration version tags.
//!
//! Three independently versioned rule sets produce every summary. A change
//! in any tag is a breaking change for consumers comparing historical
//! outputs, so the tags ride on every report verbatim.

use serde::{Deserialize, Serialize};

/// Version of the daily aggregation and scoring rules.
pub const AGGREGATION_VERSION: &str = "seismo-agg/5.0";

/// Version of the support-friction differential channel.
pub const DIFFERENTIAL_VERSION: &str = "sfd/1.2";

/// Version of the rolling normalization mode.
pub const NORMALIZATION_VERSION: &str = "norm-rolling14/1.0";

/// The tag triple stamped on every summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationVersions {
    pub aggregation: String,
    pub differential: String,
    pub normalization: String,
}

impl Default for CalibrationVersions {
    fn default() -> Self {
        Self {
            aggregation: AGGREGATION_VERSION.to_string(),
            differential: DIFFERENTIAL_VERSION.to_string(),
            normalization: NORMALIZATION_VERSION.to_string(),
        }
    }
}
