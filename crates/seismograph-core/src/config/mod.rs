//! Seismograph configuration types.
//!
//! One immutable [`SeismographConfig`] is constructed per evaluation and
//! passed by reference into every component; nothing in the pipeline
//! mutates shared option state. Defaults are the calibration constants
//! tuned against the historical benchmark days and should be treated as
//! the compatibility baseline, not rederived.

mod filter;
mod hooks;
mod normalizer;
mod orbs;
mod scoring;
mod sfd;
mod volatility;

#[cfg(test)]
mod tests;

pub use self::filter::FilterConfig;
pub use self::hooks::{HookConfig, HookLimits};
pub use self::normalizer::NormalizerConfig;
pub use self::orbs::OrbConfig;
pub use self::scoring::ScoringConfig;
pub use self::sfd::SfdConfig;
pub use self::volatility::VolatilityConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration aggregating all subsystem settings.
///
/// # Example
///
/// ```
/// use seismograph_core::config::SeismographConfig;
///
/// let config = SeismographConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.normalizer.window_size, 14);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeismographConfig {
    /// Orb caps and modifiers.
    #[serde(default)]
    pub orbs: OrbConfig,

    /// Filter rejection thresholds.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Scoring multipliers and amplification.
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Volatility signal thresholds.
    #[serde(default)]
    pub volatility: VolatilityConfig,

    /// Magnitude/bias scaling calibration.
    #[serde(default)]
    pub normalizer: NormalizerConfig,

    /// Support-friction differential calibration.
    #[serde(default)]
    pub sfd: SfdConfig,

    /// Hook selection bounds and bonuses.
    #[serde(default)]
    pub hooks: HookConfig,

    /// Emit extra diagnostic events while evaluating.
    #[serde(default)]
    pub debug: bool,
}

impl SeismographConfig {
    /// Standard calibration (the defaults).
    pub fn standard() -> Self {
        Self::default()
    }

    /// High-precision preset: tighter orb caps, fewer but stronger
    /// contacts. Scoring and scaling calibration are unchanged.
    pub fn strict() -> Self {
        Self {
            orbs: OrbConfig::strict(),
            ..Default::default()
        }
    }

    /// Validate the whole configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.orbs.validate()?;
        self.filter.validate()?;
        self.scoring.validate()?;
        self.volatility.validate()?;
        self.normalizer.validate()?;
        self.sfd.validate()?;
        self.hooks.validate()?;
        Ok(())
    }
}
