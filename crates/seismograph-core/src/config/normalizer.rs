//! Rolling-window normalizer calibration.
//!
//! The magnitude scale blends a fixed prior divisor with a divisor derived
//! from the rolling history as confidence accumulates; the directional
//! channel is amplified by the day's magnitude before being bounded.

use serde::{Deserialize, Serialize};

/// Calibration for magnitude and directional-bias scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// Rolling history length; also the divisor of the confidence ramp.
    pub window_size: usize,

    /// Fixed divisor used while history is too thin to trust.
    pub prior_divisor: f64,

    /// Reference-scale factor applied to the adaptive divisor.
    pub reference_scale: f64,

    /// Exponent of the density compression applied to the mean
    /// absolute score before scaling.
    pub magnitude_exponent: f64,

    /// Input gain of the directional shaping curve.
    pub bias_input_gain: f64,
    /// Exponent of the directional shaping curve.
    pub bias_input_exponent: f64,
    /// Output gain applied after the shaping curve.
    pub bias_output_gain: f64,
    /// Base of the magnitude-coupled bias amplification.
    pub bias_amplify_base: f64,
    /// Slope of the magnitude-coupled bias amplification.
    pub bias_amplify_slope: f64,
    /// Divisor bounding the amplified bias into unit range.
    pub bias_divisor: f64,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            window_size: 14,
            prior_divisor: 2.0,
            reference_scale: 1.6,
            magnitude_exponent: 1.3,
            bias_input_gain: 3.0,
            bias_input_exponent: 1.8,
            bias_output_gain: 3.2,
            bias_amplify_base: 0.8,
            bias_amplify_slope: 0.4,
            bias_divisor: 50.0,
        }
    }
}

impl NormalizerConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.window_size < 2 {
            return Err(format!(
                "window_size must be >= 2, got {}",
                self.window_size
            ));
        }
        if self.prior_divisor <= 0.0 {
            return Err(format!(
                "prior_divisor must be > 0, got {}",
                self.prior_divisor
            ));
        }
        if self.reference_scale <= 0.0 {
            return Err(format!(
                "reference_scale must be > 0, got {}",
                self.reference_scale
            ));
        }
        if self.magnitude_exponent < 1.0 {
            return Err(format!(
                "magnitude_exponent must be >= 1, got {}",
                self.magnitude_exponent
            ));
        }
        if self.bias_input_gain <= 0.0
            || self.bias_input_exponent <= 0.0
            || self.bias_output_gain <= 0.0
        {
            return Err("bias shaping constants must be > 0".to_string());
        }
        if self.bias_amplify_base <= 0.0 || self.bias_amplify_slope < 0.0 {
            return Err("bias amplification constants must be positive".to_string());
        }
        if self.bias_divisor <= 0.0 {
            return Err(format!(
                "bias_divisor must be > 0, got {}",
                self.bias_divisor
            ));
        }
        Ok(())
    }
}
