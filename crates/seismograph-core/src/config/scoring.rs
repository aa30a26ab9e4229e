//! Scoring multipliers.
//!
//! Defaults are calibration constants tuned against historical benchmark
//! days; they are configuration, not values to rederive.

use serde::{Deserialize, Serialize};

/// Multipliers for the per-aspect score `S = v * p * o * s` and the
/// geometry amplification applied on top of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Sensitivity boost for angle contact (largest).
    pub sensitivity_angle: f64,
    /// Sensitivity boost for luminary contact.
    pub sensitivity_luminary: f64,
    /// Sensitivity boost for personal-body contact (smallest).
    pub sensitivity_personal: f64,
    /// Further boost when the contact sits at a critical degree.
    pub sensitivity_critical: f64,

    /// Maximum tightness amplification for an exact major aspect.
    pub amplify_tight_max: f64,
    /// Orb (degrees) over which the tightness boost decays for majors.
    pub amplify_tight_span_major: f64,
    /// Orb (degrees) over which the tightness boost decays for non-majors.
    pub amplify_tight_span_minor: f64,
    /// Potency multiplier when one side is a slow outer body.
    pub amplify_outer: f64,
    /// Potency multiplier when both sides are slow outer bodies.
    pub amplify_double_outer: f64,
    /// Kicker when Saturn or Pluto participates inside 1 degree.
    pub amplify_catastrophe: f64,
    /// Orb bound for the catastrophe kicker.
    pub catastrophe_orb: f64,

    /// Moderation applied to soft aspects whose moving body is retrograde.
    pub retrograde_soft_factor: f64,

    /// During crisis conditions, supportive scores are capped at this
    /// fraction of the accumulated friction.
    pub crisis_supportive_cap: f64,
    /// Orb bound qualifying a hard hit as a crisis trigger.
    pub crisis_orb: f64,
    /// Minimum tight hard outer hits that trigger the crisis cap.
    pub crisis_outer_hits: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            sensitivity_angle: 1.3,
            sensitivity_luminary: 1.2,
            sensitivity_personal: 1.1,
            sensitivity_critical: 1.1,
            amplify_tight_max: 0.35,
            amplify_tight_span_major: 3.0,
            amplify_tight_span_minor: 1.0,
            amplify_outer: 1.2,
            amplify_double_outer: 1.35,
            amplify_catastrophe: 1.15,
            catastrophe_orb: 1.0,
            retrograde_soft_factor: 0.9,
            crisis_supportive_cap: 0.6,
            crisis_orb: 2.0,
            crisis_outer_hits: 2,
        }
    }
}

impl ScoringConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let multipliers = [
            self.sensitivity_angle,
            self.sensitivity_luminary,
            self.sensitivity_personal,
            self.sensitivity_critical,
            self.amplify_outer,
            self.amplify_double_outer,
            self.amplify_catastrophe,
        ];
        if multipliers.iter().any(|m| !m.is_finite() || *m < 1.0) {
            return Err("sensitivity and potency multipliers must be >= 1.0".to_string());
        }
        if !(0.0..=1.0).contains(&self.amplify_tight_max) {
            return Err(format!(
                "amplify_tight_max must be in [0, 1], got {}",
                self.amplify_tight_max
            ));
        }
        if self.amplify_tight_span_major <= 0.0 || self.amplify_tight_span_minor <= 0.0 {
            return Err("tightness spans must be > 0".to_string());
        }
        if !(0.0..=1.0).contains(&self.retrograde_soft_factor) {
            return Err(format!(
                "retrograde_soft_factor must be in [0, 1], got {}",
                self.retrograde_soft_factor
            ));
        }
        if !(0.0..=1.0).contains(&self.crisis_supportive_cap) {
            return Err(format!(
                "crisis_supportive_cap must be in [0, 1], got {}",
                self.crisis_supportive_cap
            ));
        }
        if self.crisis_orb <= 0.0 || self.catastrophe_orb <= 0.0 {
            return Err("crisis_orb and catastrophe_orb must be > 0".to_string());
        }
        if self.crisis_outer_hits == 0 {
            return Err("crisis_outer_hits must be > 0".to_string());
        }
        Ok(())
    }
}
