//! Day-over-day volatility signals.
//!
//! Four independent signals compared against the previous day's scored
//! set, plus a dispersion term over planetary-weighted scores. When no
//! previous context exists the first three signals are unavailable (not
//! zero); only the fast-outer proximity trigger can fire.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::aggregate::DayContext;
use crate::bodies::Body;
use crate::config::VolatilityConfig;
use crate::scoring::{is_effectively_hard, ScoredAspect};

/// Breakdown of one day's volatility score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolatilitySignals {
    /// Aspect keys that crossed into or out of the tight band since
    /// yesterday. `None` when no previous context exists.
    pub tight_band_churn: Option<u32>,
    /// Directional value flipped sign above the noise floor.
    /// `None` when no previous context exists.
    pub bias_sign_flip: Option<bool>,
    /// Outer-body hard aspects that tightened by at least the configured
    /// step. `None` when no previous context exists.
    pub outer_hard_tightening: Option<u32>,
    /// Any aspect involving the fastest outer body inside the flag orb.
    pub fast_outer_trigger: bool,
    /// Rounded dispersion of planetary-weighted scores.
    pub dispersion: u32,
    /// Total volatility score.
    pub total: u32,
}

/// Dispersion weight per body. Fast personal points swing the field more
/// than slow background bodies.
fn planetary_weight(body: &Body) -> f64 {
    match body {
        Body::Moon => 1.5,
        Body::Ascendant | Body::MediumCoeli => 1.3,
        Body::Sun => 1.2,
        Body::Descendant | Body::ImumCoeli => 1.1,
        Body::Mars => 1.1,
        Body::Mercury | Body::Venus => 1.0,
        Body::Jupiter => 0.9,
        Body::Saturn | Body::Chiron => 0.8,
        Body::Uranus => 0.7,
        Body::MeanNode | Body::TrueNode | Body::MeanSouthNode | Body::TrueSouthNode => 0.7,
        Body::Neptune | Body::Pluto => 0.6,
        _ => 0.5,
    }
}

fn tight_keys(
    scored: &[ScoredAspect],
    band: f64,
) -> HashSet<(String, String, String)> {
    scored
        .iter()
        .filter(|a| a.aspect.orb <= band)
        .map(|a| a.aspect.identity_key())
        .collect()
}

/// Compute the day's volatility signals.
pub fn volatility(
    scored: &[ScoredAspect],
    raw_bias: f64,
    prev: Option<&DayContext>,
    config: &VolatilityConfig,
) -> VolatilitySignals {
    let mut signals = VolatilitySignals::default();

    if let Some(prev) = prev {
        // Signal 1: tight-band membership churn.
        let prev_tight = tight_keys(&prev.scored, config.tight_band);
        let now_tight = tight_keys(scored, config.tight_band);
        let churn = now_tight.symmetric_difference(&prev_tight).count() as u32;
        signals.tight_band_churn = Some(churn);

        // Signal 2: directional sign flip above the noise floor.
        let flipped = prev.bias.signum() != raw_bias.signum()
            && prev.bias.abs() > config.bias_noise_floor
            && raw_bias.abs() > config.bias_noise_floor;
        signals.bias_sign_flip = Some(flipped);

        // Signal 3: outer-body hard aspects tightening.
        let prev_orbs: HashMap<_, f64> = prev
            .scored
            .iter()
            .map(|a| (a.aspect.identity_key(), a.aspect.orb))
            .collect();
        let tightening = scored
            .iter()
            .filter(|a| {
                let outer_hard = is_effectively_hard(a)
                    && (a.aspect.moving.is_outer_slow() || a.aspect.fixed.is_outer_slow());
                if !outer_hard {
                    return false;
                }
                prev_orbs
                    .get(&a.aspect.identity_key())
                    .is_some_and(|prev_orb| prev_orb - a.aspect.orb >= config.outer_tighten_step)
            })
            .count() as u32;
        signals.outer_hard_tightening = Some(tightening);
    }

    // Signal 4: the fastest outer body close to exact. Available with or
    // without previous context.
    signals.fast_outer_trigger = scored.iter().any(|a| {
        (a.aspect.moving == Body::Uranus || a.aspect.fixed == Body::Uranus)
            && a.aspect.orb <= config.fast_outer_flag_orb
    });

    // Dispersion of planetary-weighted scores.
    if scored.len() >= config.dispersion_min_aspects {
        let weighted: Vec<f64> = scored
            .iter()
            .map(|a| {
                let w = planetary_weight(&a.aspect.moving).max(planetary_weight(&a.aspect.fixed));
                a.score * w
            })
            .collect();
        let mean = weighted.iter().sum::<f64>() / weighted.len() as f64;
        let variance = weighted
            .iter()
            .map(|v| (v - mean) * (v - mean))
            .sum::<f64>()
            / weighted.len() as f64;
        let dispersion = (variance.sqrt() * config.dispersion_scale).min(config.dispersion_cap);
        signals.dispersion = dispersion.round() as u32;
    }

    signals.total = signals.tight_band_churn.unwrap_or(0)
        + u32::from(signals.bias_sign_flip.unwrap_or(false))
        + signals.outer_hard_tightening.unwrap_or(0)
        + u32::from(signals.fast_outer_trigger)
        + signals.dispersion;

    trace!(total = signals.total, "volatility signals");
    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::RawAspect;
    use crate::classify::classify_day;
    use crate::config::SeismographConfig;
    use crate::scoring::score_day;

    fn scored(raws: &[RawAspect]) -> Vec<ScoredAspect> {
        let config = SeismographConfig::default();
        let outcome = classify_day(raws, &config);
        score_day(&outcome.accepted, &config.scoring)
    }

    #[test]
    fn test_first_day_has_only_fast_outer_signal() {
        let today = scored(&[RawAspect::new("Uranus", "Sun", "square", 1.0)]);
        let signals = volatility(&today, -1.0, None, &VolatilityConfig::default());
        assert_eq!(signals.tight_band_churn, None);
        assert_eq!(signals.bias_sign_flip, None);
        assert_eq!(signals.outer_hard_tightening, None);
        assert!(signals.fast_outer_trigger);
        assert_eq!(signals.total, 1);
    }

    #[test]
    fn test_fast_outer_trigger_requires_proximity() {
        let wide = scored(&[RawAspect::new("Uranus", "Mercury", "square", 4.5)]);
        let signals = volatility(&wide, -1.0, None, &VolatilityConfig::default());
        assert!(!signals.fast_outer_trigger);
        assert_eq!(signals.total, 0);
    }

    #[test]
    fn test_tight_band_churn_counts_both_directions() {
        let config = VolatilityConfig::default();
        let yesterday = DayContext {
            scored: scored(&[
                RawAspect::new("Mars", "Sun", "square", 1.0),
                RawAspect::new("Venus", "Moon", "trine", 0.5),
            ]),
            bias: -1.0,
        };
        // Mars-Sun leaves the tight band, Saturn-Mercury enters it.
        let today = scored(&[
            RawAspect::new("Mars", "Sun", "square", 2.5),
            RawAspect::new("Venus", "Moon", "trine", 0.5),
            RawAspect::new("Saturn", "Mercury", "square", 0.8),
        ]);
        let signals = volatility(&today, -1.0, Some(&yesterday), &config);
        assert_eq!(signals.tight_band_churn, Some(2));
    }

    #[test]
    fn test_bias_sign_flip_respects_noise_floor() {
        let config = VolatilityConfig::default();
        let today = scored(&[RawAspect::new("Mars", "Sun", "square", 1.0)]);
        let prev_loud = DayContext { scored: vec![], bias: 2.0 };
        let prev_quiet = DayContext { scored: vec![], bias: 0.01 };
        let flipped = volatility(&today, -1.5, Some(&prev_loud), &config);
        assert_eq!(flipped.bias_sign_flip, Some(true));
        let quiet = volatility(&today, -1.5, Some(&prev_quiet), &config);
        assert_eq!(quiet.bias_sign_flip, Some(false));
    }

    #[test]
    fn test_outer_hard_tightening() {
        let config = VolatilityConfig::default();
        let yesterday = DayContext {
            scored: scored(&[RawAspect::new("Pluto", "Sun", "square", 2.0)]),
            bias: -1.0,
        };
        let today = scored(&[RawAspect::new("Pluto", "Sun", "square", 1.7)]);
        let signals = volatility(&today, -1.0, Some(&yesterday), &config);
        assert_eq!(signals.outer_hard_tightening, Some(1));

        // A drift under the step does not count.
        let barely = scored(&[RawAspect::new("Pluto", "Sun", "square", 1.9)]);
        let signals = volatility(&barely, -1.0, Some(&yesterday), &config);
        assert_eq!(signals.outer_hard_tightening, Some(0));
    }
}
