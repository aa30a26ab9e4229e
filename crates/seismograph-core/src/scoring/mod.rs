//! Per-aspect scoring.
//!
//! `S = base_valence * tier * orb_decay * sensitivity`, then geometry
//! amplification and retrograde moderation. The function is pure and total
//! over any accepted [`ClassifiedAspect`]: unknown bodies score with a
//! neutral tier, unknown aspect types with zero valence.

use serde::{Deserialize, Serialize};

use crate::aspect::{AspectClass, AspectType};
use crate::bodies::Body;
use crate::classify::ClassifiedAspect;
use crate::config::ScoringConfig;

/// A classified aspect with its signed score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredAspect {
    #[serde(flatten)]
    pub aspect: ClassifiedAspect,
    /// Signed score `S`. Finite; zero exactly when the base valence is zero.
    pub score: f64,
}

/// Signed base valence for a type/body combination.
///
/// Harmonious contacts are positive (trine above sextile); hard contacts
/// are negative and larger in magnitude. A conjunction takes its sign from
/// the company it keeps: positive with a benefic, negative with a heavy
/// body, mildly positive otherwise.
pub fn base_valence(aspect: &AspectType, moving: &Body, fixed: &Body) -> f64 {
    match aspect {
        AspectType::Opposition => -1.0,
        AspectType::Square => -0.85,
        AspectType::Trine => 0.9,
        AspectType::Sextile => 0.55,
        AspectType::Quincunx => -0.35,
        AspectType::SemiSquare | AspectType::Sesquiquadrate => -0.5,
        AspectType::SemiSextile => 0.2,
        AspectType::Quintile | AspectType::Biquintile => 0.4,
        AspectType::Conjunction => {
            if moving.is_benefic() || fixed.is_benefic() {
                1.0
            } else if moving.is_heavy() || fixed.is_heavy() {
                -1.0
            } else {
                0.2
            }
        }
        AspectType::Other(_) => 0.0,
    }
}

/// Linear orb decay: 1.0 at exact, 0.0 at the cap, never negative.
pub fn orb_decay(orb: f64, cap: f64) -> f64 {
    if cap <= 0.0 {
        return 0.0;
    }
    (1.0 - orb / cap).max(0.0)
}

/// Compounding sensitivity boosts for angle, luminary, personal and
/// critical-degree contact.
fn sensitivity(aspect: &ClassifiedAspect, config: &ScoringConfig) -> f64 {
    let mut s = 1.0;
    if aspect.moving.is_angle() || aspect.fixed.is_angle() {
        s *= config.sensitivity_angle;
    }
    if aspect.moving.is_luminary() || aspect.fixed.is_luminary() {
        s *= config.sensitivity_luminary;
    }
    if aspect.moving.class() == crate::bodies::BodyClass::Personal
        || aspect.fixed.class() == crate::bodies::BodyClass::Personal
    {
        s *= config.sensitivity_personal;
    }
    if aspect.critical_degree {
        s *= config.sensitivity_critical;
    }
    s
}

/// Geometry amplification: tightness boost for near-exact contacts,
/// outer-body potency, and a kicker for Saturn/Pluto inside 1 degree.
fn amplification(aspect: &ClassifiedAspect, config: &ScoringConfig) -> f64 {
    let span = if aspect.aspect_class == AspectClass::Major {
        config.amplify_tight_span_major
    } else {
        config.amplify_tight_span_minor
    };
    let tightness = (1.0 - aspect.orb / span).max(0.0);
    let tight_boost = 1.0 + config.amplify_tight_max * tightness;

    let moving_outer = aspect.moving.is_outer_slow();
    let fixed_outer = aspect.fixed.is_outer_slow();
    let outer_boost = if moving_outer && fixed_outer {
        config.amplify_double_outer
    } else if moving_outer || fixed_outer {
        config.amplify_outer
    } else {
        1.0
    };

    let saturnine = matches!(aspect.moving, Body::Saturn | Body::Pluto)
        || matches!(aspect.fixed, Body::Saturn | Body::Pluto);
    let catastrophe = if saturnine && aspect.orb <= config.catastrophe_orb {
        config.amplify_catastrophe
    } else {
        1.0
    };

    tight_boost * outer_boost * catastrophe
}

/// Score one classified aspect. Pure; total over accepted aspects.
pub fn score_aspect(aspect: &ClassifiedAspect, config: &ScoringConfig) -> f64 {
    let v = base_valence(&aspect.aspect, &aspect.moving, &aspect.fixed);
    if v == 0.0 {
        return 0.0;
    }
    let p = aspect.moving.tier().max(aspect.fixed.tier());
    let o = orb_decay(aspect.orb, aspect.cap);
    let s = sensitivity(aspect, config);

    let mut score = v * p * o * s * amplification(aspect, config);

    if aspect.moving_retrograde && aspect.aspect.is_soft() {
        score *= config.retrograde_soft_factor;
    }
    score
}

/// Score a whole day's accepted aspects.
pub fn score_day(accepted: &[ClassifiedAspect], config: &ScoringConfig) -> Vec<ScoredAspect> {
    accepted
        .iter()
        .map(|aspect| ScoredAspect {
            aspect: aspect.clone(),
            score: score_aspect(aspect, config),
        })
        .collect()
}

/// Effective hardness: squares, oppositions, and conjunctions that
/// resolved to a negative score.
pub fn is_effectively_hard(scored: &ScoredAspect) -> bool {
    scored.aspect.aspect.is_hard()
        || (scored.aspect.aspect == AspectType::Conjunction && scored.score < 0.0)
}

/// Cap supportive scores during crisis conditions.
///
/// Triggered by at least `crisis_outer_hits` tight hard contacts from slow
/// outer movers, or any tight hard contact onto the Ascendant or
/// Midheaven. Positive scores are then scaled so their sum does not exceed
/// `crisis_supportive_cap` of the accumulated friction.
pub fn apply_crisis_cap(scored: &mut [ScoredAspect], config: &ScoringConfig) -> bool {
    let outer_hits = scored
        .iter()
        .filter(|a| {
            is_effectively_hard(a)
                && a.aspect.moving.is_outer_slow()
                && a.aspect.orb <= config.crisis_orb
        })
        .count();
    let angle_hits = scored
        .iter()
        .filter(|a| {
            is_effectively_hard(a)
                && matches!(a.aspect.fixed, Body::Ascendant | Body::MediumCoeli)
                && a.aspect.orb <= config.crisis_orb
        })
        .count();

    if outer_hits < config.crisis_outer_hits && angle_hits == 0 {
        return false;
    }

    let positive: f64 = scored.iter().filter(|a| a.score > 0.0).map(|a| a.score).sum();
    let negative: f64 = scored.iter().filter(|a| a.score < 0.0).map(|a| a.score).sum();
    let cap = negative.abs() * config.crisis_supportive_cap;
    if positive > cap && positive > 0.0 {
        let factor = cap / positive;
        for aspect in scored.iter_mut() {
            if aspect.score > 0.0 {
                aspect.score *= factor;
            }
        }
        return true;
    }
    false
}
