//! Support-friction differential.
//!
//! Two independent passes over the day's filtered aspects. Pass one
//! accumulates supportive contributions and records every body touched by
//! one. Pass two accumulates counter-forces: hard aspects landing on
//! support nodes, hard contacts to benefics, and heavy conjunctions to
//! benefics (compensated by co-occurring soft aspects to the same
//! benefic). Counter contributions disjoint from the support-node set are
//! dampened before accumulation. Both totals saturate softly; only the
//! final differential is clamped.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aspect::AspectType;
use crate::bodies::Body;
use crate::classify::ClassifiedAspect;
use crate::config::SfdConfig;
use crate::normalize::round_half_up;
use crate::scoring::orb_decay;

/// Support and counter magnitudes with their signed differential.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SfdBreakdown {
    /// Signed differential, clamped to [-5, 5].
    pub sfd: f64,
    /// Saturated support-channel magnitude, [0, 5].
    pub support: f64,
    /// Saturated counter-channel magnitude, [0, 5].
    pub counter: f64,
}

fn support_multiplier(body: &Body, config: &SfdConfig) -> f64 {
    if body.is_benefic() {
        config.support_benefic_multiplier
    } else if matches!(body, Body::Moon | Body::Saturn) {
        config.support_stabilizer_multiplier
    } else {
        1.0
    }
}

fn counter_multiplier(body: &Body, config: &SfdConfig) -> f64 {
    match body {
        Body::Mars => config.counter_aggressor_multiplier,
        Body::Saturn | Body::Pluto | Body::Chiron => config.counter_heavy_multiplier,
        Body::Neptune => config.counter_diffuse_multiplier,
        _ => 1.0,
    }
}

/// Symmetric sensitivity for the differential channel.
fn sensitivity(aspect: &ClassifiedAspect, config: &SfdConfig) -> f64 {
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
    s
}

fn base_support_weight(aspect: &ClassifiedAspect, config: &SfdConfig) -> f64 {
    match &aspect.aspect {
        AspectType::Trine => config.trine_weight,
        AspectType::Sextile => config.sextile_weight,
        AspectType::Conjunction
            if aspect.moving.is_benefic() || aspect.fixed.is_benefic() =>
        {
            config.benefic_conjunction_weight
        }
        AspectType::Quintile | AspectType::Biquintile
            if aspect.orb <= config.harmonic_orb =>
        {
            config.harmonic_weight
        }
        _ => 0.0,
    }
}

/// Count same-day soft aspects inside the compensation band that touch
/// the given benefic.
fn compensating_softs(aspects: &[ClassifiedAspect], benefic: &Body, config: &SfdConfig) -> usize {
    aspects
        .iter()
        .filter(|a| {
            a.aspect.is_soft()
                && a.orb <= config.compensation_orb
                && (a.moving == *benefic || a.fixed == *benefic)
        })
        .count()
}

/// Compute the support-friction differential for one day.
pub fn compute_sfd(aspects: &[ClassifiedAspect], config: &SfdConfig) -> SfdBreakdown {
    let mut support_total = 0.0;
    let mut support_nodes: HashSet<Body> = HashSet::new();

    // Pass 1: support.
    for aspect in aspects {
        let base = base_support_weight(aspect, config);
        if base <= 0.0 {
            continue;
        }
        let contribution = base
            * support_multiplier(&aspect.moving, config)
            * support_multiplier(&aspect.fixed, config)
            * orb_decay(aspect.orb, aspect.cap)
            * sensitivity(aspect, config);
        if contribution > 0.0 {
            support_total += contribution;
            support_nodes.insert(aspect.moving.clone());
            support_nodes.insert(aspect.fixed.clone());
        }
    }

    // Pass 2: counter-forces.
    let mut counter_total = 0.0;
    for aspect in aspects {
        let benefic_involved = aspect.moving.is_benefic() || aspect.fixed.is_benefic();
        let on_support_node = support_nodes.contains(&aspect.moving)
            || support_nodes.contains(&aspect.fixed);

        let mut weight = 0.0;
        if aspect.aspect.is_hard() {
            if benefic_involved {
                weight = config.hard_on_benefic_weight;
            } else if on_support_node {
                weight = config.hard_on_support_weight;
            }
        } else if aspect.aspect == AspectType::Conjunction && benefic_involved {
            let heavy_involved = aspect.moving.is_heavy() || aspect.fixed.is_heavy();
            if heavy_involved {
                weight = config.heavy_conjunction_weight;
                let benefic = if aspect.moving.is_benefic() {
                    &aspect.moving
                } else {
                    &aspect.fixed
                };
                match compensating_softs(aspects, benefic, config) {
                    0 => {}
                    1 => weight *= 0.5,
                    _ => weight = 0.0,
                }
            }
        }
        if weight == 0.0 {
            continue;
        }

        let mut contribution = weight
            * counter_multiplier(&aspect.moving, config)
            * counter_multiplier(&aspect.fixed, config)
            * orb_decay(aspect.orb, aspect.cap)
            * sensitivity(aspect, config);

        if !on_support_node {
            contribution *= config.locality_dampening;
        }
        counter_total += contribution;
    }

    // Soft saturation into unsigned channel magnitudes, then the single
    // clamp of the differential.
    let support = 5.0 * (support_total / config.saturation_knee).tanh();
    let counter = 5.0 * (counter_total / config.saturation_knee).tanh();
    let sfd = (support - counter).clamp(-5.0, 5.0);

    debug!(support_total, counter_total, sfd, "support-friction differential");
    SfdBreakdown {
        sfd: round_half_up(sfd, 2),
        support: round_half_up(support, 2),
        counter: round_half_up(counter, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::RawAspect;
    use crate::classify::classify_day;
    use crate::config::SeismographConfig;

    fn classified(raws: &[RawAspect]) -> Vec<ClassifiedAspect> {
        classify_day(raws, &SeismographConfig::default()).accepted
    }

    #[test]
    fn test_empty_day_is_neutral() {
        let breakdown = compute_sfd(&[], &SfdConfig::default());
        assert_eq!(breakdown.sfd, 0.0);
        assert_eq!(breakdown.support, 0.0);
        assert_eq!(breakdown.counter, 0.0);
    }

    #[test]
    fn test_supportive_day_is_positive() {
        let aspects = classified(&[
            RawAspect::new("Jupiter", "Sun", "trine", 1.0),
            RawAspect::new("Venus", "Moon", "sextile", 0.5),
        ]);
        let breakdown = compute_sfd(&aspects, &SfdConfig::default());
        assert!(breakdown.support > 0.0);
        assert_eq!(breakdown.counter, 0.0);
        assert!(breakdown.sfd > 0.0);
    }

    #[test]
    fn test_hard_aspect_on_support_node_counts_as_counter() {
        let aspects = classified(&[
            RawAspect::new("Jupiter", "Sun", "trine", 1.0),
            // Saturn squares the Sun, which the trine just marked supportive.
            RawAspect::new("Saturn", "Sun", "square", 1.0),
        ]);
        let breakdown = compute_sfd(&aspects, &SfdConfig::default());
        assert!(breakdown.counter > 0.0);
    }

    #[test]
    fn test_disjoint_counter_is_dampened() {
        let config = SfdConfig::default();
        // Support between Jupiter and Sun; friction between Venus and Pluto
        // (touches a benefic so it counts, but shares no support node).
        let local = classified(&[
            RawAspect::new("Jupiter", "Venus", "trine", 1.0),
            RawAspect::new("Mars", "Venus", "square", 1.0),
        ]);
        let disjoint = classified(&[
            RawAspect::new("Jupiter", "Sun", "trine", 1.0),
            RawAspect::new("Mars", "Venus", "square", 1.0),
        ]);
        let on_node = compute_sfd(&local, &config);
        let off_node = compute_sfd(&disjoint, &config);
        assert!(off_node.counter < on_node.counter);
    }

    #[test]
    fn test_heavy_conjunction_compensation() {
        let config = SfdConfig::default();
        let bare = classified(&[RawAspect::new("Saturn", "Venus", "conjunction", 0.5)]);
        let one_soft = classified(&[
            RawAspect::new("Saturn", "Venus", "conjunction", 0.5),
            RawAspect::new("Moon", "Venus", "trine", 1.0),
        ]);
        let two_softs = classified(&[
            RawAspect::new("Saturn", "Venus", "conjunction", 0.5),
            RawAspect::new("Moon", "Venus", "trine", 1.0),
            RawAspect::new("Mercury", "Venus", "sextile", 0.8),
        ]);

        let bare = compute_sfd(&bare, &config);
        let halved = compute_sfd(&one_soft, &config);
        let cancelled = compute_sfd(&two_softs, &config);

        assert!(bare.counter > 0.0);
        assert!(halved.counter < bare.counter);
        assert!(halved.counter > 0.0);
        assert_eq!(cancelled.counter, 0.0);
    }

    #[test]
    fn test_sfd_is_bounded() {
        let mut raws = Vec::new();
        for fixed in ["Sun", "Moon", "Mercury", "Mars", "Ascendant"] {
            raws.push(RawAspect::new("Jupiter", fixed, "trine", 0.1));
            raws.push(RawAspect::new("Venus", fixed, "sextile", 0.1));
        }
        let breakdown = compute_sfd(&classified(&raws), &SfdConfig::default());
        assert!(breakdown.sfd <= 5.0 && breakdown.sfd >= -5.0);
        assert!(breakdown.support <= 5.0);
    }
}
