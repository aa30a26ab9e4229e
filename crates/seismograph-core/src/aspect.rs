//! Aspect taxonomy and the raw input record.
//!
//! Aspect-type labels arrive as free-form strings from the upstream
//! ephemeris collaborator; they are normalized here exactly once, at the
//! classification boundary. Downstream code matches on the closed enums.

use serde::{Deserialize, Serialize};

/// Named angular relationship between two bodies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectType {
    Conjunction,
    Opposition,
    Square,
    Trine,
    Sextile,
    Quincunx,
    SemiSquare,
    Sesquiquadrate,
    SemiSextile,
    Quintile,
    Biquintile,
    /// Unrecognized label, preserved verbatim. Scores to zero valence.
    Other(String),
}

/// Structural family of an aspect type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectClass {
    Major,
    Minor,
    Harmonic,
    Other,
}

impl AspectType {
    /// Normalize a label to its canonical variant, accepting the common
    /// abbreviations and alternate spellings.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "conjunction" | "conj" => AspectType::Conjunction,
            "opposition" | "opp" => AspectType::Opposition,
            "square" | "sq" => AspectType::Square,
            "trine" | "tri" => AspectType::Trine,
            "sextile" | "sex" => AspectType::Sextile,
            "quincunx" | "inconjunct" => AspectType::Quincunx,
            "semisquare" | "semi-square" => AspectType::SemiSquare,
            "sesquiquadrate" | "sesquisquare" => AspectType::Sesquiquadrate,
            "semisextile" | "semi-sextile" => AspectType::SemiSextile,
            "quintile" => AspectType::Quintile,
            "biquintile" => AspectType::Biquintile,
            other => AspectType::Other(other.to_string()),
        }
    }

    /// Canonical lowercase token.
    pub fn name(&self) -> &str {
        match self {
            AspectType::Conjunction => "conjunction",
            AspectType::Opposition => "opposition",
            AspectType::Square => "square",
            AspectType::Trine => "trine",
            AspectType::Sextile => "sextile",
            AspectType::Quincunx => "quincunx",
            AspectType::SemiSquare => "semisquare",
            AspectType::Sesquiquadrate => "sesquiquadrate",
            AspectType::SemiSextile => "semisextile",
            AspectType::Quintile => "quintile",
            AspectType::Biquintile => "biquintile",
            AspectType::Other(label) => label,
        }
    }

    pub fn class(&self) -> AspectClass {
        match self {
            AspectType::Conjunction
            | AspectType::Opposition
            | AspectType::Square
            | AspectType::Trine
            | AspectType::Sextile => AspectClass::Major,
            AspectType::Quincunx
            | AspectType::SemiSquare
            | AspectType::Sesquiquadrate
            | AspectType::SemiSextile => AspectClass::Minor,
            AspectType::Quintile | AspectType::Biquintile => AspectClass::Harmonic,
            AspectType::Other(_) => AspectClass::Other,
        }
    }

    /// Hard contacts: square and opposition.
    pub fn is_hard(&self) -> bool {
        matches!(self, AspectType::Square | AspectType::Opposition)
    }

    /// Soft contacts: trine and sextile.
    pub fn is_soft(&self) -> bool {
        matches!(self, AspectType::Trine | AspectType::Sextile)
    }
}

/// One raw aspect record for one day, as supplied by the upstream data
/// fetcher. Missing or malformed fields never abort an evaluation; they
/// surface as classification rejections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAspect {
    /// Moving (transiting) body label.
    pub moving: String,
    /// Fixed (natal) body label.
    pub fixed: String,
    /// Aspect-type label, free form.
    pub aspect: String,
    /// Orb in degrees. Absent or non-finite orbs reject the record.
    #[serde(default)]
    pub orb: Option<f64>,
    /// Whether the moving body is retrograde.
    #[serde(default)]
    pub moving_retrograde: Option<bool>,
    /// Whether the fixed body is retrograde.
    #[serde(default)]
    pub fixed_retrograde: Option<bool>,
    /// Applying (true) or separating (false), when known.
    #[serde(default)]
    pub applying: Option<bool>,
    /// House placement of the fixed body, when known.
    #[serde(default)]
    pub house: Option<u8>,
    /// Whether the contact sits at a critical degree (sign edge),
    /// as flagged by the upstream position calculator.
    #[serde(default)]
    pub critical_degree: Option<bool>,
}

impl RawAspect {
    /// Convenience constructor for the common three-field case.
    pub fn new(moving: &str, fixed: &str, aspect: &str, orb: f64) -> Self {
        Self {
            moving: moving.to_string(),
            fixed: fixed.to_string(),
            aspect: aspect.to_string(),
            orb: Some(orb),
            moving_retrograde: None,
            fixed_retrograde: None,
            applying: None,
            house: None,
            critical_degree: None,
        }
    }
}
