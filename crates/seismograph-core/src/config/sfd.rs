//! Support-friction differential calibration.

use serde::{Deserialize, Serialize};

/// Base weights, role multipliers and dampening rules for the two
/// differential passes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SfdConfig {
    /// Support weight of a trine.
    pub trine_weight: f64,
    /// Support weight of a sextile.
    pub sextile_weight: f64,
    /// Support weight of a conjunction involving a benefic.
    pub benefic_conjunction_weight: f64,
    /// Support weight of a tight harmonic minor (quintile/biquintile).
    pub harmonic_weight: f64,
    /// Orb bound inside which harmonic minors count as support.
    pub harmonic_orb: f64,

    /// Counter weight of a hard aspect landing on a support node.
    pub hard_on_support_weight: f64,
    /// Counter weight of a hard aspect touching a benefic.
    pub hard_on_benefic_weight: f64,
    /// Counter weight of a heavy-body conjunction to a benefic.
    pub heavy_conjunction_weight: f64,

    /// Dampening applied to counter contributions that share no body with
    /// any supportive aspect.
    pub locality_dampening: f64,

    /// Orb band inside which a co-occurring soft aspect compensates a
    /// heavy conjunction to the same benefic.
    pub compensation_orb: f64,

    /// Support-channel body multipliers.
    pub support_benefic_multiplier: f64,
    pub support_stabilizer_multiplier: f64,

    /// Counter-channel body multipliers.
    pub counter_aggressor_multiplier: f64,
    pub counter_heavy_multiplier: f64,
    pub counter_diffuse_multiplier: f64,

    /// Symmetric sensitivity boosts for the differential channel.
    pub sensitivity_angle: f64,
    pub sensitivity_luminary: f64,
    pub sensitivity_personal: f64,

    /// Soft-saturation knee of the channel totals.
    pub saturation_knee: f64,
}

impl Default for SfdConfig {
    fn default() -> Self {
        Self {
            trine_weight: 1.5,
            sextile_weight: 1.0,
            benefic_conjunction_weight: 1.2,
            harmonic_weight: 0.5,
            harmonic_orb: 1.0,
            hard_on_support_weight: 1.0,
            hard_on_benefic_weight: 1.3,
            heavy_conjunction_weight: 0.8,
            locality_dampening: 0.7,
            compensation_orb: 1.5,
            support_benefic_multiplier: 1.4,
            support_stabilizer_multiplier: 1.2,
            counter_aggressor_multiplier: 1.2,
            counter_heavy_multiplier: 1.2,
            counter_diffuse_multiplier: 1.1,
            sensitivity_angle: 1.2,
            sensitivity_luminary: 1.1,
            sensitivity_personal: 1.05,
            saturation_knee: 4.0,
        }
    }
}

impl SfdConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            self.trine_weight,
            self.sextile_weight,
            self.benefic_conjunction_weight,
            self.harmonic_weight,
            self.hard_on_support_weight,
            self.hard_on_benefic_weight,
            self.heavy_conjunction_weight,
        ];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err("channel weights must be finite and >= 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.locality_dampening) {
            return Err(format!(
                "locality_dampening must be in [0, 1], got {}",
                self.locality_dampening
            ));
        }
        if self.compensation_orb <= 0.0 || self.harmonic_orb <= 0.0 {
            return Err("compensation_orb and harmonic_orb must be > 0".to_string());
        }
        let multipliers = [
            self.support_benefic_multiplier,
            self.support_stabilizer_multiplier,
            self.counter_aggressor_multiplier,
            self.counter_heavy_multiplier,
            self.counter_diffuse_multiplier,
            self.sensitivity_angle,
            self.sensitivity_luminary,
            self.sensitivity_personal,
        ];
        if multipliers.iter().any(|m| !m.is_finite() || *m < 1.0) {
            return Err("role multipliers must be >= 1.0".to_string());
        }
        if self.saturation_knee <= 0.0 {
            return Err(format!(
                "saturation_knee must be > 0, got {}",
                self.saturation_knee
            ));
        }
        Ok(())
    }
}
