//! Display scaling.
//!
//! Magnitude: choose a scaling strategy from the rolling-history length,
//! derive the divisor, normalize, scale to the 0-5 band and clamp exactly
//! once. Directional bias: amplify by the day's magnitude, bound into unit
//! range, scale to the -5..5 band. Intermediate raw values are never
//! clamped; the single clamp at the end is what keeps busy days from
//! pinning at the maximum.

mod window;

pub use self::window::RollingHistory;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::NormalizerConfig;

/// How the day's magnitude divisor was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingStrategy {
    /// Fixed prior divisor; history too thin to trust.
    Prior,
    /// History median blended with the prior by confidence.
    Blended,
    /// Full-window median.
    Rolling,
}

impl ScalingStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalingStrategy::Prior => "prior",
            ScalingStrategy::Blended => "blended",
            ScalingStrategy::Rolling => "rolling",
        }
    }
}

/// Scaling provenance carried on every day's output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScalingProvenance {
    pub strategy: ScalingStrategy,
    /// `min(1, n / window_size)` where n is the history length used.
    pub confidence: f64,
}

/// A clamp that actually fired, kept as data for observability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClampEvent {
    pub axis: String,
    pub raw: f64,
    pub clamped: f64,
}

/// A scaled axis value with its unclamped raw counterpart.
#[derive(Debug, Clone, Copy)]
pub struct ScaledValue {
    /// Pre-clamp scaled value.
    pub raw: f64,
    /// Final display value, clamped and rounded half-up to one decimal.
    pub value: f64,
    pub hit_min: bool,
    pub hit_max: bool,
}

/// Round half away from zero at `decimals` places.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = 10f64.powi(decimals as i32);
    let shifted = value * factor;
    let rounded = if shifted >= 0.0 {
        (shifted + 0.5).floor()
    } else {
        (shifted - 0.5).ceil()
    };
    rounded / factor
}

fn scale(raw: f64, min: f64, max: f64) -> ScaledValue {
    let clamped = raw.clamp(min, max);
    ScaledValue {
        raw,
        value: round_half_up(clamped, 1),
        hit_min: raw < min,
        hit_max: raw > max,
    }
}

/// Choose the scaling strategy and divisor from the rolling history.
///
/// The history is inspected *before* the current day's energy is pushed.
pub fn choose_strategy(
    history: &RollingHistory,
    config: &NormalizerConfig,
) -> (ScalingStrategy, f64, f64) {
    let n = history.len();
    let window = config.window_size as f64;
    let confidence = (n as f64 / window).min(1.0);

    if n >= config.window_size {
        let median = history.median().unwrap_or(config.prior_divisor);
        (ScalingStrategy::Rolling, median, confidence)
    } else if n >= 2 {
        let median = history.median().unwrap_or(config.prior_divisor);
        let lambda = confidence;
        let blended = lambda * median + (1.0 - lambda) * config.prior_divisor;
        (ScalingStrategy::Blended, blended, confidence)
    } else {
        (ScalingStrategy::Prior, config.prior_divisor, confidence)
    }
}

/// Scale a day's magnitude energy to the 0-5 display band.
pub fn scale_magnitude(
    energy: f64,
    history: &RollingHistory,
    config: &NormalizerConfig,
) -> (ScaledValue, ScalingProvenance) {
    let (strategy, reference, confidence) = choose_strategy(history, config);

    let normalized = match strategy {
        ScalingStrategy::Prior => (energy / reference).min(1.0),
        ScalingStrategy::Blended | ScalingStrategy::Rolling => {
            let reference = if reference > f64::EPSILON {
                reference
            } else {
                config.prior_divisor
            };
            let scaled = 5.0 * energy / (reference * config.reference_scale);
            scaled.clamp(0.0, 10.0) / 10.0
        }
    };

    let scaled = scale(normalized * 5.0, 0.0, 5.0);
    debug!(
        strategy = strategy.as_str(),
        confidence,
        energy,
        magnitude = scaled.value,
        "scaled magnitude"
    );
    (scaled, ScalingProvenance { strategy, confidence })
}

/// Scale a day's directional energy to the -5..5 display band, coupled to
/// the day's displayed magnitude: high-pressure days show their lean more
/// plainly.
pub fn scale_bias(bias_energy: f64, magnitude: f64, config: &NormalizerConfig) -> ScaledValue {
    let amplified =
        bias_energy * (config.bias_amplify_base + config.bias_amplify_slope * magnitude);
    let normalized = (amplified / config.bias_divisor).clamp(-1.0, 1.0);
    // Keep the unclamped product as the raw trace; the clamp below is the
    // single clamp of the directional channel.
    let mut scaled = scale(normalized * 5.0, -5.0, 5.0);
    scaled.raw = amplified / config.bias_divisor * 5.0;
    scaled.hit_min = scaled.raw < -5.0;
    scaled.hit_max = scaled.raw > 5.0;
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> NormalizerConfig {
        NormalizerConfig::default()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1.25, 1), 1.3);
        assert_eq!(round_half_up(1.24, 1), 1.2);
        assert_eq!(round_half_up(-1.25, 1), -1.3);
        assert_eq!(round_half_up(4.949, 1), 4.9);
    }

    #[test]
    fn test_strategy_schedule() {
        let config = config();
        let mut history = RollingHistory::new(config.window_size);

        let (strategy, _, confidence) = choose_strategy(&history, &config);
        assert_eq!(strategy, ScalingStrategy::Prior);
        assert_eq!(confidence, 0.0);

        history.push(2.0);
        let (strategy, _, _) = choose_strategy(&history, &config);
        assert_eq!(strategy, ScalingStrategy::Prior);

        history.push(2.5);
        let (strategy, _, confidence) = choose_strategy(&history, &config);
        assert_eq!(strategy, ScalingStrategy::Blended);
        assert!((confidence - 2.0 / 14.0).abs() < 1e-12);

        for _ in 0..12 {
            history.push(2.2);
        }
        let (strategy, _, confidence) = choose_strategy(&history, &config);
        assert_eq!(strategy, ScalingStrategy::Rolling);
        assert_eq!(confidence, 1.0);
    }

    #[test]
    fn test_blended_divisor_moves_toward_median() {
        let config = config();
        let mut history = RollingHistory::new(config.window_size);
        history.push(6.0);
        history.push(6.0);
        let (_, reference, _) = choose_strategy(&history, &config);
        // λ = 2/14: mostly prior, nudged toward the 6.0 median.
        let lambda: f64 = 2.0 / 14.0;
        let expected = lambda * 6.0 + (1.0 - lambda) * config.prior_divisor;
        assert!((reference - expected).abs() < 1e-12);
    }

    #[test]
    fn test_prior_magnitude_is_bounded_and_monotone() {
        let config = config();
        let history = RollingHistory::new(config.window_size);
        let (low, _) = scale_magnitude(0.5, &history, &config);
        let (mid, _) = scale_magnitude(1.0, &history, &config);
        let (high, _) = scale_magnitude(1.9, &history, &config);
        assert!(low.value < mid.value && mid.value < high.value);
        assert!(high.value <= 5.0);
        let (saturated, provenance) = scale_magnitude(50.0, &history, &config);
        assert_eq!(saturated.value, 5.0);
        assert_eq!(provenance.strategy, ScalingStrategy::Prior);
    }

    #[test]
    fn test_rolling_adapts_to_busy_history() {
        let config = config();
        let mut quiet = RollingHistory::new(config.window_size);
        let mut busy = RollingHistory::new(config.window_size);
        for _ in 0..14 {
            quiet.push(1.0);
            busy.push(8.0);
        }
        let (from_quiet, _) = scale_magnitude(4.0, &quiet, &config);
        let (from_busy, _) = scale_magnitude(4.0, &busy, &config);
        // The same energy reads higher against a quiet baseline.
        assert!(from_quiet.value > from_busy.value);
    }

    #[test]
    fn test_bias_scaling_bounds_and_sign() {
        let config = config();
        let negative = scale_bias(-20.0, 4.0, &config);
        assert!(negative.value < 0.0 && negative.value >= -5.0);
        let positive = scale_bias(12.0, 2.0, &config);
        assert!(positive.value > 0.0 && positive.value <= 5.0);
        let extreme = scale_bias(-200.0, 5.0, &config);
        assert_eq!(extreme.value, -5.0);
        assert!(extreme.hit_min);
    }

    #[test]
    fn test_magnitude_amplifies_bias() {
        let config = config();
        let calm = scale_bias(-10.0, 1.0, &config);
        let loud = scale_bias(-10.0, 5.0, &config);
        assert!(loud.value <= calm.value);
    }
}
