//! Classifier/filter thresholds.

use serde::{Deserialize, Serialize};

/// Rejection thresholds applied after orb validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Minimum absolute provisional score an accepted aspect must carry.
    pub significance_floor: f64,

    /// Maximum accepted aspects a single luminary or angle may anchor.
    pub max_primary_anchor: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            significance_floor: 0.05,
            max_primary_anchor: 3,
        }
    }
}

impl FilterConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.significance_floor.is_finite() || self.significance_floor < 0.0 {
            return Err(format!(
                "significance_floor must be finite and >= 0, got {}",
                self.significance_floor
            ));
        }
        if self.max_primary_anchor == 0 {
            return Err("max_primary_anchor must be > 0".to_string());
        }
        Ok(())
    }
}
