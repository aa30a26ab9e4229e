//! Hook selection bounds and scoring bonuses.

use serde::{Deserialize, Serialize};

/// Selection bounds for one evaluation mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HookLimits {
    pub min: usize,
    pub max: usize,
}

/// Candidate scoring bonuses and category gates for the hook selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookConfig {
    /// Bounds for a solo-context evaluation.
    pub solo: HookLimits,
    /// Bounds for a paired-context evaluation.
    pub paired: HookLimits,

    /// Orb bound qualifying a primary-point contact as category A.
    pub tight_orb: f64,
    /// Eligibility gate for category C (soft benefic gateway).
    pub soft_gate_orb: f64,
    /// Eligibility gate for category D (minor/harmonic echo).
    pub minor_gate_orb: f64,

    /// Score bonus when a primary point participates.
    pub primary_bonus: f64,
    /// Score bonus by aspect class.
    pub major_bonus: f64,
    pub harmonic_bonus: f64,
    pub minor_bonus: f64,
    /// Score bonus when the same contact was selected yesterday.
    pub continuity_bonus: f64,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            solo: HookLimits { min: 5, max: 9 },
            paired: HookLimits { min: 8, max: 12 },
            tight_orb: 1.5,
            soft_gate_orb: 3.0,
            minor_gate_orb: 1.0,
            primary_bonus: 0.5,
            major_bonus: 0.4,
            harmonic_bonus: 0.2,
            minor_bonus: 0.1,
            continuity_bonus: 0.25,
        }
    }
}

impl HookConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        for (name, limits) in [("solo", self.solo), ("paired", self.paired)] {
            if limits.min == 0 || limits.min > limits.max {
                return Err(format!(
                    "{name} limits must satisfy 0 < min <= max, got {}..{}",
                    limits.min, limits.max
                ));
            }
        }
        if self.tight_orb <= 0.0 || self.soft_gate_orb <= 0.0 || self.minor_gate_orb <= 0.0 {
            return Err("hook orb gates must be > 0".to_string());
        }
        let bonuses = [
            self.primary_bonus,
            self.major_bonus,
            self.harmonic_bonus,
            self.minor_bonus,
            self.continuity_bonus,
        ];
        if bonuses.iter().any(|b| !b.is_finite() || *b < 0.0) {
            return Err("hook bonuses must be finite and >= 0".to_string());
        }
        Ok(())
    }
}
