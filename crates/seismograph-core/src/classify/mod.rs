//! Aspect classification and filtering.
//!
//! Each raw record is normalized once at this boundary: labels become
//! closed enums, the effective orb cap is computed, and anything that
//! cannot be scored is rejected with a named reason. Every rejection is
//! data, never an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aspect::{AspectClass, AspectType, RawAspect};
use crate::bodies::{Body, BodyClass};
use crate::config::SeismographConfig;
use crate::scoring;

/// Why a raw aspect was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Both sides name the same body and the contact is not a
    /// return-eligible conjunction or opposition.
    SelfAspect,
    /// The orb is absent or not a finite number.
    MissingOrb,
    /// The orb meets or exceeds the effective cap.
    OrbBeyondCap,
    /// The provisional score fell below the significance floor.
    BelowSignificanceFloor,
    /// The unordered body-pair plus type was already accepted today.
    DuplicatePair,
    /// The anchoring luminary or angle already holds its maximum
    /// number of accepted aspects.
    PrimaryOverload,
}

/// A rejected raw aspect with its reason, kept for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rejection {
    pub moving: String,
    pub fixed: String,
    pub aspect: String,
    pub orb: Option<f64>,
    pub reason: DropReason,
}

/// An accepted aspect with its derived tags.
///
/// Invariant: `0.0 <= orb < cap`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedAspect {
    pub moving: Body,
    pub fixed: Body,
    pub aspect: AspectType,
    pub aspect_class: AspectClass,
    pub moving_class: BodyClass,
    pub fixed_class: BodyClass,
    /// Absolute orb in degrees.
    pub orb: f64,
    /// Effective orb cap the orb was validated against.
    pub cap: f64,
    pub moving_retrograde: bool,
    pub critical_degree: bool,
    pub applying: Option<bool>,
}

impl ClassifiedAspect {
    /// Orientation-preserving identity, for day-over-day comparison.
    pub fn identity_key(&self) -> (String, String, String) {
        (
            self.moving.name().to_string(),
            self.fixed.name().to_string(),
            self.aspect.name().to_string(),
        )
    }

    /// Orientation-free identity, for same-day deduplication.
    pub fn pair_key(&self) -> (String, String, String) {
        let a = self.moving.name();
        let b = self.fixed.name();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (lo.to_string(), hi.to_string(), self.aspect.name().to_string())
    }
}

/// Output of one day's classification pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterOutcome {
    pub accepted: Vec<ClassifiedAspect>,
    pub rejections: Vec<Rejection>,
}

fn reject(list: &mut Vec<Rejection>, raw: &RawAspect, reason: DropReason) {
    list.push(Rejection {
        moving: raw.moving.clone(),
        fixed: raw.fixed.clone(),
        aspect: raw.aspect.clone(),
        orb: raw.orb,
        reason,
    });
}

/// Classify and filter one day's raw aspects.
///
/// Pipeline: normalize labels, reject self-aspects that are not returns,
/// validate the orb against the effective cap, drop sub-floor provisional
/// weights, deduplicate by unordered pair+type, and finally guard against
/// any single primary point anchoring more than the configured maximum.
pub fn classify_day(raw_aspects: &[RawAspect], config: &SeismographConfig) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();
    let mut seen_pairs: Vec<(String, String, String)> = Vec::new();
    let mut anchor_counts: HashMap<String, usize> = HashMap::new();

    for raw in raw_aspects {
        let moving = Body::parse(&raw.moving);
        let fixed = Body::parse(&raw.fixed);
        let aspect = AspectType::parse(&raw.aspect);

        if moving == fixed {
            let returning = moving.is_return_eligible()
                && matches!(aspect, AspectType::Conjunction | AspectType::Opposition);
            if !returning {
                reject(&mut outcome.rejections, raw, DropReason::SelfAspect);
                continue;
            }
        }

        let orb = match raw.orb {
            Some(orb) if orb.is_finite() => orb.abs(),
            _ => {
                reject(&mut outcome.rejections, raw, DropReason::MissingOrb);
                continue;
            }
        };

        let cap = config.orbs.effective_cap(&aspect, &moving, &fixed);
        if orb >= cap {
            reject(&mut outcome.rejections, raw, DropReason::OrbBeyondCap);
            continue;
        }

        let classified = ClassifiedAspect {
            aspect_class: aspect.class(),
            moving_class: moving.class(),
            fixed_class: fixed.class(),
            moving,
            fixed,
            aspect,
            orb,
            cap,
            moving_retrograde: raw.moving_retrograde.unwrap_or(false),
            critical_degree: raw.critical_degree.unwrap_or(false),
            applying: raw.applying,
        };

        let provisional = scoring::score_aspect(&classified, &config.scoring).abs();
        if provisional < config.filter.significance_floor {
            reject(
                &mut outcome.rejections,
                raw,
                DropReason::BelowSignificanceFloor,
            );
            continue;
        }

        let pair = classified.pair_key();
        if seen_pairs.contains(&pair) {
            reject(&mut outcome.rejections, raw, DropReason::DuplicatePair);
            continue;
        }

        let mut overloaded = false;
        for body in [&classified.moving, &classified.fixed] {
            if body.is_primary() {
                let count = anchor_counts.entry(body.name().to_string()).or_insert(0);
                if *count >= config.filter.max_primary_anchor {
                    overloaded = true;
                }
            }
        }
        if overloaded {
            reject(&mut outcome.rejections, raw, DropReason::PrimaryOverload);
            continue;
        }
        for body in [&classified.moving, &classified.fixed] {
            if body.is_primary() {
                *anchor_counts.entry(body.name().to_string()).or_insert(0) += 1;
            }
        }

        seen_pairs.push(pair);
        outcome.accepted.push(classified);
    }

    debug!(
        accepted = outcome.accepted.len(),
        rejected = outcome.rejections.len(),
        "classified day"
    );
    outcome
}
