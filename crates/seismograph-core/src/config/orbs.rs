//! Orb cap configuration.
//!
//! Effective cap for an aspect =
//! `min(aspect_type_cap, max(class_cap_a, class_cap_b))`, then adjusted:
//! `+moon_bonus` when the Moon is involved, `+outer_to_personal_penalty`
//! (negative) when a slow outer body contacts a fast personal body. The
//! result is bounded by `[min_cap, max_cap]`.

use serde::{Deserialize, Serialize};

use crate::aspect::AspectType;
use crate::bodies::{Body, BodyClass};

/// Orb caps per aspect type and body class, plus the cap modifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbConfig {
    /// Caps by aspect type, degrees.
    pub conjunction: f64,
    pub opposition: f64,
    pub square: f64,
    pub trine: f64,
    pub sextile: f64,
    pub quincunx: f64,
    pub semisquare: f64,
    pub sesquiquadrate: f64,
    pub semisextile: f64,
    pub quintile: f64,
    pub biquintile: f64,
    /// Cap for unrecognized aspect labels.
    pub fallback: f64,

    /// Caps by body class, degrees.
    pub luminary_cap: f64,
    pub angle_cap: f64,
    pub personal_cap: f64,
    pub social_cap: f64,
    pub outer_cap: f64,
    pub point_cap: f64,
    pub other_cap: f64,

    /// Widening when the Moon is on either side.
    pub moon_bonus: f64,
    /// Tightening (negative) when an outer body contacts a fast personal body.
    pub outer_to_personal_penalty: f64,

    /// Absolute bounds on the effective cap.
    pub min_cap: f64,
    pub max_cap: f64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            conjunction: 8.0,
            opposition: 8.0,
            square: 7.0,
            trine: 7.0,
            sextile: 5.0,
            quincunx: 3.0,
            semisquare: 2.0,
            sesquiquadrate: 2.0,
            semisextile: 2.0,
            quintile: 1.0,
            biquintile: 1.0,
            fallback: 1.0,
            luminary_cap: 8.0,
            angle_cap: 7.0,
            personal_cap: 7.0,
            social_cap: 6.0,
            outer_cap: 6.0,
            point_cap: 5.0,
            other_cap: 4.0,
            moon_bonus: 1.0,
            outer_to_personal_penalty: -1.0,
            min_cap: 0.5,
            max_cap: 10.0,
        }
    }
}

impl OrbConfig {
    /// Tighter caps for high-precision runs: fewer, stronger contacts.
    pub fn strict() -> Self {
        Self {
            conjunction: 6.0,
            opposition: 6.0,
            square: 5.0,
            trine: 5.0,
            sextile: 4.0,
            quincunx: 2.0,
            semisquare: 1.5,
            sesquiquadrate: 1.5,
            semisextile: 1.5,
            quintile: 0.5,
            biquintile: 0.5,
            fallback: 0.5,
            moon_bonus: 0.5,
            outer_to_personal_penalty: -1.5,
            max_cap: 8.0,
            ..Default::default()
        }
    }

    /// Cap for an aspect type.
    pub fn aspect_cap(&self, aspect: &AspectType) -> f64 {
        match aspect {
            AspectType::Conjunction => self.conjunction,
            AspectType::Opposition => self.opposition,
            AspectType::Square => self.square,
            AspectType::Trine => self.trine,
            AspectType::Sextile => self.sextile,
            AspectType::Quincunx => self.quincunx,
            AspectType::SemiSquare => self.semisquare,
            AspectType::Sesquiquadrate => self.sesquiquadrate,
            AspectType::SemiSextile => self.semisextile,
            AspectType::Quintile => self.quintile,
            AspectType::Biquintile => self.biquintile,
            AspectType::Other(_) => self.fallback,
        }
    }

    /// Cap for a body class.
    pub fn class_cap(&self, class: BodyClass) -> f64 {
        match class {
            BodyClass::Luminary => self.luminary_cap,
            BodyClass::Angle => self.angle_cap,
            BodyClass::Personal => self.personal_cap,
            BodyClass::Social => self.social_cap,
            BodyClass::Outer => self.outer_cap,
            BodyClass::Point => self.point_cap,
            BodyClass::Other => self.other_cap,
        }
    }

    /// Effective orb cap for a classified pair.
    pub fn effective_cap(&self, aspect: &AspectType, moving: &Body, fixed: &Body) -> f64 {
        let class_cap = self
            .class_cap(moving.class())
            .max(self.class_cap(fixed.class()));
        let mut cap = self.aspect_cap(aspect).min(class_cap);

        if *moving == Body::Moon || *fixed == Body::Moon {
            cap += self.moon_bonus;
        }
        let outer_to_personal = (moving.is_outer_slow() && fixed.is_personal_fast())
            || (fixed.is_outer_slow() && moving.is_personal_fast());
        if outer_to_personal {
            cap += self.outer_to_personal_penalty;
        }

        cap.clamp(self.min_cap, self.max_cap)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        let caps = [
            self.conjunction,
            self.opposition,
            self.square,
            self.trine,
            self.sextile,
            self.quincunx,
            self.semisquare,
            self.sesquiquadrate,
            self.semisextile,
            self.quintile,
            self.biquintile,
            self.fallback,
            self.luminary_cap,
            self.angle_cap,
            self.personal_cap,
            self.social_cap,
            self.outer_cap,
            self.point_cap,
            self.other_cap,
        ];
        if caps.iter().any(|c| !c.is_finite() || *c <= 0.0) {
            return Err("orb caps must be finite and > 0".to_string());
        }
        if self.min_cap <= 0.0 || self.min_cap >= self.max_cap {
            return Err(format!(
                "min_cap ({}) must be > 0 and < max_cap ({})",
                self.min_cap, self.max_cap
            ));
        }
        if self.moon_bonus < 0.0 {
            return Err("moon_bonus must be >= 0".to_string());
        }
        if self.outer_to_personal_penalty > 0.0 {
            return Err("outer_to_personal_penalty must be <= 0".to_string());
        }
        Ok(())
    }
}
