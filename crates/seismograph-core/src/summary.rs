//! Period summarization.

use serde::{Deserialize, Serialize};

use crate::indices::DailyIndices;
use crate::labels::{BiasSeverity, MagnitudeLabel, Polarity, VolatilityLabel};
use crate::normalize::round_half_up;
use crate::versions::CalibrationVersions;

/// Arithmetic means across a window, with re-derived classification and
/// the calibration tags that produced them. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub days: usize,

    pub magnitude: f64,
    pub magnitude_label: MagnitudeLabel,

    pub directional_bias: f64,
    pub polarity: Polarity,
    pub bias_severity: BiasSeverity,

    pub volatility: f64,
    pub volatility_label: VolatilityLabel,

    pub sfd: f64,

    /// Days whose display magnitude reached the top of the band.
    pub saturation_days: usize,
    pub saturation_ratio: f64,

    pub versions: CalibrationVersions,
}

/// Summarize a window of daily outputs.
///
/// The caller guarantees a non-empty window; the processor enforces this
/// at the API boundary.
pub fn summarize(daily: &[&DailyIndices]) -> PeriodSummary {
    let n = daily.len() as f64;
    let magnitude = daily.iter().map(|d| d.magnitude).sum::<f64>() / n;
    let bias = daily.iter().map(|d| d.directional_bias).sum::<f64>() / n;
    let volatility = daily.iter().map(|d| f64::from(d.volatility)).sum::<f64>() / n;
    let sfd = daily.iter().map(|d| d.sfd.sfd).sum::<f64>() / n;

    let saturation_days = daily.iter().filter(|d| d.saturated).count();

    let magnitude = round_half_up(magnitude, 1);
    let bias = round_half_up(bias, 1);
    let volatility = round_half_up(volatility, 1);

    PeriodSummary {
        days: daily.len(),
        magnitude,
        magnitude_label: MagnitudeLabel::for_value(magnitude),
        directional_bias: bias,
        polarity: Polarity::for_value(bias),
        bias_severity: BiasSeverity::for_value(bias),
        volatility,
        volatility_label: VolatilityLabel::for_value(volatility),
        sfd: round_half_up(sfd, 2),
        saturation_days,
        saturation_ratio: round_half_up(saturation_days as f64 / n, 3),
        versions: CalibrationVersions::default(),
    }
}
