//! Orb banding with day-over-day phase tracking.
//!
//! Accepted aspects are grouped into exactness bands and annotated with
//! whether each contact tightened or separated relative to yesterday's
//! orb for the same pair.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::scoring::ScoredAspect;

/// Exactness band of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbBand {
    /// Orb <= 0.5 degrees.
    Exact,
    /// Orb <= 2.0 degrees.
    Tight,
    /// Orb <= 6.0 degrees.
    Moderate,
    /// Everything wider.
    Wide,
}

impl OrbBand {
    pub fn for_orb(orb: f64) -> Self {
        if orb <= 0.5 {
            OrbBand::Exact
        } else if orb <= 2.0 {
            OrbBand::Tight
        } else if orb <= 6.0 {
            OrbBand::Moderate
        } else {
            OrbBand::Wide
        }
    }
}

/// Day-over-day orb motion for one contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Orb decreased since yesterday.
    Tightening,
    /// Orb increased since yesterday.
    Separating,
    /// Unchanged, or no record of this contact yesterday.
    Steady,
}

/// One banded contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandedAspect {
    pub moving: String,
    pub fixed: String,
    pub aspect: String,
    pub orb: f64,
    pub band: OrbBand,
    pub phase: Phase,
    pub score: f64,
}

/// Band today's aspects, sorted tightest first, with phase derived from
/// yesterday's scored set.
pub fn band_day(scored: &[ScoredAspect], previous: Option<&[ScoredAspect]>) -> Vec<BandedAspect> {
    let prev_orbs: HashMap<(String, String, String), f64> = previous
        .map(|aspects| {
            aspects
                .iter()
                .map(|a| (a.aspect.identity_key(), a.aspect.orb))
                .collect()
        })
        .unwrap_or_default();

    let mut banded: Vec<BandedAspect> = scored
        .iter()
        .map(|a| {
            let phase = match prev_orbs.get(&a.aspect.identity_key()) {
                Some(prev_orb) if a.aspect.orb < *prev_orb => Phase::Tightening,
                Some(prev_orb) if a.aspect.orb > *prev_orb => Phase::Separating,
                _ => Phase::Steady,
            };
            BandedAspect {
                moving: a.aspect.moving.name().to_string(),
                fixed: a.aspect.fixed.name().to_string(),
                aspect: a.aspect.aspect.name().to_string(),
                orb: a.aspect.orb,
                band: OrbBand::for_orb(a.aspect.orb),
                phase,
                score: a.score,
            }
        })
        .collect();
    banded.sort_by(|a, b| a.orb.total_cmp(&b.orb));
    banded
}
