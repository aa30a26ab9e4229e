//! Volatility signal thresholds.

use serde::{Deserialize, Serialize};

/// Thresholds for the four day-over-day instability signals and the
/// dispersion term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolatilityConfig {
    /// Orb band (degrees) defining a "tight" contact for churn tracking.
    pub tight_band: f64,

    /// Noise floor below which a directional sign flip is ignored.
    pub bias_noise_floor: f64,

    /// Minimum day-over-day orb decrease (degrees) counting as an
    /// outer-body hard aspect tightening.
    pub outer_tighten_step: f64,

    /// Orb bound (degrees) for the fast-outer-body proximity trigger.
    pub fast_outer_flag_orb: f64,

    /// Minimum aspect count before the dispersion term contributes.
    pub dispersion_min_aspects: usize,
    /// Scale applied to the weighted score standard deviation.
    pub dispersion_scale: f64,
    /// Upper bound on the dispersion contribution before rounding.
    pub dispersion_cap: f64,
}

impl Default for VolatilityConfig {
    fn default() -> Self {
        Self {
            tight_band: 1.5,
            bias_noise_floor: 0.05,
            outer_tighten_step: 0.2,
            fast_outer_flag_orb: 3.0,
            dispersion_min_aspects: 3,
            dispersion_scale: 0.5,
            dispersion_cap: 2.0,
        }
    }
}

impl VolatilityConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.tight_band <= 0.0 {
            return Err(format!("tight_band must be > 0, got {}", self.tight_band));
        }
        if self.bias_noise_floor < 0.0 {
            return Err(format!(
                "bias_noise_floor must be >= 0, got {}",
                self.bias_noise_floor
            ));
        }
        if self.outer_tighten_step <= 0.0 {
            return Err(format!(
                "outer_tighten_step must be > 0, got {}",
                self.outer_tighten_step
            ));
        }
        if self.fast_outer_flag_orb <= 0.0 {
            return Err(format!(
                "fast_outer_flag_orb must be > 0, got {}",
                self.fast_outer_flag_orb
            ));
        }
        if self.dispersion_scale < 0.0 || self.dispersion_cap < 0.0 {
            return Err("dispersion_scale and dispersion_cap must be >= 0".to_string());
        }
        Ok(())
    }
}
