//! Categorical label bands for the display axes.
//!
//! Short data labels consumed by report front ends; the engine attaches
//! them but never formats prose around them.

use serde::{Deserialize, Serialize};

/// Magnitude band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeLabel {
    Trace,
    Pulse,
    Wave,
    Surge,
    Peak,
    Threshold,
}

impl MagnitudeLabel {
    pub fn for_value(value: f64) -> Self {
        if value <= 0.5 {
            MagnitudeLabel::Trace
        } else if value <= 1.5 {
            MagnitudeLabel::Pulse
        } else if value <= 2.5 {
            MagnitudeLabel::Wave
        } else if value <= 3.5 {
            MagnitudeLabel::Surge
        } else if value <= 4.5 {
            MagnitudeLabel::Peak
        } else {
            MagnitudeLabel::Threshold
        }
    }
}

/// Volatility band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolatilityLabel {
    AlignedFlow,
    CycledPull,
    MixedPaths,
    FragmentScatter,
    VortexDispersion,
}

impl VolatilityLabel {
    pub fn for_value(value: f64) -> Self {
        if value <= 0.5 {
            VolatilityLabel::AlignedFlow
        } else if value <= 2.0 {
            VolatilityLabel::CycledPull
        } else if value <= 3.0 {
            VolatilityLabel::MixedPaths
        } else if value <= 5.0 {
            VolatilityLabel::FragmentScatter
        } else {
            VolatilityLabel::VortexDispersion
        }
    }
}

/// Net lean of the directional channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Expansive,
    Compressive,
    Equilibrium,
}

impl Polarity {
    pub fn for_value(bias: f64) -> Self {
        if bias > 0.0 {
            Polarity::Expansive
        } else if bias < 0.0 {
            Polarity::Compressive
        } else {
            Polarity::Equilibrium
        }
    }
}

/// Severity band of the absolute directional bias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasSeverity {
    Steady,
    Advisory,
    Watch,
    Warning,
    Critical,
}

impl BiasSeverity {
    pub fn for_value(bias: f64) -> Self {
        let abs = bias.abs();
        if abs >= 4.0 {
            BiasSeverity::Critical
        } else if abs >= 2.5 {
            BiasSeverity::Warning
        } else if abs >= 1.5 {
            BiasSeverity::Watch
        } else if abs >= 0.5 {
            BiasSeverity::Advisory
        } else {
            BiasSeverity::Steady
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_band_edges() {
        assert_eq!(MagnitudeLabel::for_value(0.0), MagnitudeLabel::Trace);
        assert_eq!(MagnitudeLabel::for_value(0.5), MagnitudeLabel::Trace);
        assert_eq!(MagnitudeLabel::for_value(1.0), MagnitudeLabel::Pulse);
        assert_eq!(MagnitudeLabel::for_value(3.0), MagnitudeLabel::Surge);
        assert_eq!(MagnitudeLabel::for_value(4.6), MagnitudeLabel::Threshold);
        assert_eq!(MagnitudeLabel::for_value(5.0), MagnitudeLabel::Threshold);
    }

    #[test]
    fn test_volatility_band_edges() {
        assert_eq!(VolatilityLabel::for_value(0.0), VolatilityLabel::AlignedFlow);
        assert_eq!(VolatilityLabel::for_value(1.0), VolatilityLabel::CycledPull);
        assert_eq!(VolatilityLabel::for_value(2.5), VolatilityLabel::MixedPaths);
        assert_eq!(VolatilityLabel::for_value(4.0), VolatilityLabel::FragmentScatter);
        assert_eq!(VolatilityLabel::for_value(9.0), VolatilityLabel::VortexDispersion);
    }

    #[test]
    fn test_polarity() {
        assert_eq!(Polarity::for_value(1.2), Polarity::Expansive);
        assert_eq!(Polarity::for_value(-0.1), Polarity::Compressive);
        assert_eq!(Polarity::for_value(0.0), Polarity::Equilibrium);
    }

    #[test]
    fn test_bias_severity_bands() {
        assert_eq!(BiasSeverity::for_value(0.2), BiasSeverity::Steady);
        assert_eq!(BiasSeverity::for_value(-0.8), BiasSeverity::Advisory);
        assert_eq!(BiasSeverity::for_value(2.0), BiasSeverity::Watch);
        assert_eq!(BiasSeverity::for_value(-3.0), BiasSeverity::Warning);
        assert_eq!(BiasSeverity::for_value(-4.8), BiasSeverity::Critical);
    }
}
