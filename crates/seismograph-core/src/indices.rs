//! Daily output assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::VolatilitySignals;
use crate::bands::BandedAspect;
use crate::classify::Rejection;
use crate::hooks::HookSelection;
use crate::labels::{BiasSeverity, MagnitudeLabel, Polarity, VolatilityLabel};
use crate::normalize::{ClampEvent, ScalingProvenance};
use crate::scoring::ScoredAspect;
use crate::sfd::SfdBreakdown;

/// Unclamped intermediate values, preserved for plotting and audits.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RawAxes {
    /// Sum of absolute scores.
    pub magnitude: f64,
    /// Sum of signed scores.
    pub bias: f64,
    /// Density-compressed magnitude energy fed to the normalizer.
    pub magnitude_energy: f64,
    /// Shaped directional energy fed to the bias scaler.
    pub bias_energy: f64,
}

/// The complete bounded output for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyIndices {
    pub date: NaiveDate,

    /// Aggregate pressure, [0, 5].
    pub magnitude: f64,
    pub magnitude_label: MagnitudeLabel,

    /// Directional lean, [-5, 5].
    pub directional_bias: f64,
    pub polarity: Polarity,
    pub bias_severity: BiasSeverity,

    /// Composite instability score.
    pub volatility: u32,
    pub volatility_label: VolatilityLabel,
    pub volatility_signals: VolatilitySignals,

    /// Support-friction differential block.
    pub sfd: SfdBreakdown,

    /// Unclamped intermediates.
    pub raw: RawAxes,

    /// How the magnitude divisor was derived, and with what confidence.
    pub scaling: ScalingProvenance,

    /// Clamps that actually fired during display scaling.
    pub clamp_events: Vec<ClampEvent>,

    /// Display magnitude reached the top of the band.
    pub saturated: bool,

    /// The day had no raw aspects at all; distinguishes "no activity"
    /// from a failed computation.
    pub empty_input: bool,

    /// Accepted aspects with their scores.
    pub aspects: Vec<ScoredAspect>,
    /// Rejected records with named reasons.
    pub rejections: Vec<Rejection>,
    /// Selected hook packet.
    pub hooks: HookSelection,
    /// Orb-banded view with day-over-day phase.
    pub bands: Vec<BandedAspect>,
}
