//! Hook selection.
//!
//! Picks a bounded, priority-ranked subset of the day's accepted aspects
//! for downstream narrative emphasis. Each aspect lands in at most one of
//! four ordered categories; candidates are scored for tie-breaking and
//! selected greedily up to the mode bound, with backfill up to the
//! minimum and an explicit no-signal marker when nothing qualifies.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::aspect::AspectClass;
use crate::bodies::Body;
use crate::config::HookConfig;
use crate::scoring::{is_effectively_hard, ScoredAspect};

/// Evaluation context; paired charts surface more hooks than solo ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookMode {
    Solo,
    Paired,
}

/// Selection category, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookCategory {
    /// A: tight contact to a primary reference point.
    TightPrimary,
    /// B: hard aspect bridging a personal body and a slow outer body.
    HardBridge,
    /// C: soft benefic contact onto a primary point or hard-anchored body.
    BeneficGateway,
    /// D: minor or harmonic contact anchored to a primary or
    /// hard-anchored body.
    MinorEcho,
    /// Backfill: uncategorized candidate promoted to reach the minimum.
    Backfill,
}

/// One selected hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hook {
    pub moving: String,
    pub fixed: String,
    pub aspect: String,
    pub orb: f64,
    pub score: f64,
    pub category: HookCategory,
    /// Selection rank score used for ordering.
    pub rank: f64,
}

/// Per-category selection counts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HookCounts {
    pub tight_primary: usize,
    pub hard_bridge: usize,
    pub benefic_gateway: usize,
    pub minor_echo: usize,
    pub backfill: usize,
}

/// The day's hook packet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookSelection {
    pub hooks: Vec<Hook>,
    pub counts: HookCounts,
    /// Set when no aspect qualified at all; distinguishes "quiet day"
    /// from a missing packet.
    pub no_signal: bool,
}

fn categorize(
    scored: &ScoredAspect,
    hard_anchored: &HashSet<Body>,
    config: &HookConfig,
) -> Option<HookCategory> {
    let aspect = &scored.aspect;
    let primary_involved = aspect.moving.is_primary() || aspect.fixed.is_primary();

    // A: tight aspect to a primary reference point.
    if primary_involved && aspect.orb <= config.tight_orb {
        return Some(HookCategory::TightPrimary);
    }

    // B: hard aspect bridging personal and outer.
    let bridges = (aspect.moving.is_personal_fast() && aspect.fixed.is_outer_slow())
        || (aspect.moving.is_outer_slow() && aspect.fixed.is_personal_fast());
    if is_effectively_hard(scored) && bridges {
        return Some(HookCategory::HardBridge);
    }

    // C: soft benefic contact onto a primary point or a body already
    // anchoring a hard aspect. Gated by orb.
    let benefic_involved = aspect.moving.is_benefic() || aspect.fixed.is_benefic();
    let anchored = hard_anchored.contains(&aspect.moving) || hard_anchored.contains(&aspect.fixed);
    if aspect.aspect.is_soft()
        && benefic_involved
        && (primary_involved || anchored)
        && aspect.orb <= config.soft_gate_orb
    {
        return Some(HookCategory::BeneficGateway);
    }

    // D: minor/harmonic contact on a primary or hard-anchored body.
    // Gated by orb.
    if matches!(
        aspect.aspect_class,
        AspectClass::Minor | AspectClass::Harmonic
    ) && (primary_involved || anchored)
        && aspect.orb <= config.minor_gate_orb
    {
        return Some(HookCategory::MinorEcho);
    }

    None
}

fn rank(
    scored: &ScoredAspect,
    previous: &HashSet<(String, String, String)>,
    config: &HookConfig,
) -> f64 {
    let aspect = &scored.aspect;
    let tightness = (1.0 - aspect.orb / aspect.cap).max(0.0);
    let mut rank = tightness;
    if aspect.moving.is_primary() || aspect.fixed.is_primary() {
        rank += config.primary_bonus;
    }
    rank += match aspect.aspect_class {
        AspectClass::Major => config.major_bonus,
        AspectClass::Harmonic => config.harmonic_bonus,
        AspectClass::Minor => config.minor_bonus,
        AspectClass::Other => 0.0,
    };
    if previous.contains(&aspect.identity_key()) {
        rank += config.continuity_bonus;
    }
    rank
}

/// Select the day's hooks.
///
/// `previous` carries the identity keys of yesterday's selection for the
/// continuity bonus.
pub fn select_hooks(
    scored: &[ScoredAspect],
    mode: HookMode,
    previous: &HashSet<(String, String, String)>,
    config: &HookConfig,
) -> HookSelection {
    let limits = match mode {
        HookMode::Solo => config.solo,
        HookMode::Paired => config.paired,
    };

    let hard_anchored: HashSet<Body> = scored
        .iter()
        .filter(|a| is_effectively_hard(a))
        .flat_map(|a| [a.aspect.moving.clone(), a.aspect.fixed.clone()])
        .collect();

    let mut candidates: Vec<(HookCategory, f64, &ScoredAspect)> = Vec::new();
    let mut leftovers: Vec<(f64, &ScoredAspect)> = Vec::new();
    for aspect in scored {
        let rank = rank(aspect, previous, config);
        match categorize(aspect, &hard_anchored, config) {
            Some(category) => candidates.push((category, rank, aspect)),
            None => leftovers.push((rank, aspect)),
        }
    }

    // Category priority, then rank descending, then orb ascending.
    candidates.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then(b.1.total_cmp(&a.1))
            .then(a.2.aspect.orb.total_cmp(&b.2.aspect.orb))
    });
    leftovers.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.aspect.orb.total_cmp(&b.1.aspect.orb)));

    let mut counts = HookCounts::default();
    let mut hooks: Vec<Hook> = Vec::new();

    let push = |hooks: &mut Vec<Hook>, counts: &mut HookCounts, category: HookCategory, rank: f64, scored: &ScoredAspect| {
        match category {
            HookCategory::TightPrimary => counts.tight_primary += 1,
            HookCategory::HardBridge => counts.hard_bridge += 1,
            HookCategory::BeneficGateway => counts.benefic_gateway += 1,
            HookCategory::MinorEcho => counts.minor_echo += 1,
            HookCategory::Backfill => counts.backfill += 1,
        }
        hooks.push(Hook {
            moving: scored.aspect.moving.name().to_string(),
            fixed: scored.aspect.fixed.name().to_string(),
            aspect: scored.aspect.aspect.name().to_string(),
            orb: scored.aspect.orb,
            score: scored.score,
            category,
            rank,
        });
    };

    for &(category, rank, aspect) in &candidates {
        if hooks.len() >= limits.max {
            break;
        }
        push(&mut hooks, &mut counts, category, rank, aspect);
    }

    // Backfill toward the minimum from uncategorized candidates.
    if hooks.len() < limits.min {
        for &(rank, aspect) in &leftovers {
            if hooks.len() >= limits.min {
                break;
            }
            push(&mut hooks, &mut counts, HookCategory::Backfill, rank, aspect);
        }
    }

    let no_signal = hooks.is_empty();
    HookSelection {
        hooks,
        counts,
        no_signal,
    }
}
