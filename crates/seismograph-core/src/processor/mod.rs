//! The seismograph processor.
//!
//! Orchestrates the per-day pipeline — classify, score, aggregate,
//! normalize, differential, hooks — and folds it across a window of
//! sorted dates. All cross-day state lives in a caller-owned
//! [`WindowState`]; evaluating different subjects or windows concurrently
//! just means owning separate states.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{aggregate_day, volatility, DayContext};
use crate::aspect::RawAspect;
use crate::bands::band_day;
use crate::classify::classify_day;
use crate::config::SeismographConfig;
use crate::error::{SeismographError, SeismographResult};
use crate::hooks::{select_hooks, HookMode, HookSelection};
use crate::indices::{DailyIndices, RawAxes};
use crate::labels::{BiasSeverity, MagnitudeLabel, Polarity, VolatilityLabel};
use crate::normalize::{scale_bias, scale_magnitude, ClampEvent, RollingHistory};
use crate::scoring::{apply_crisis_cap, score_day};
use crate::sfd::compute_sfd;
use crate::summary::{summarize, PeriodSummary};

/// Display magnitude at or above this reads as saturated.
const SATURATION_EDGE: f64 = 4.95;

/// Cross-day evaluation state. One instance per subject per window;
/// threaded explicitly into each day's evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowState {
    rolling: RollingHistory,
    prev: Option<DayContext>,
    prev_hooks: HashSet<(String, String, String)>,
}

impl WindowState {
    /// Fresh state sized to the configured rolling window.
    pub fn new(config: &SeismographConfig) -> Self {
        Self {
            rolling: RollingHistory::new(config.normalizer.window_size),
            prev: None,
            prev_hooks: HashSet::new(),
        }
    }

    /// Number of days recorded in the rolling history.
    pub fn history_len(&self) -> usize {
        self.rolling.len()
    }

    /// Whether a previous day's context is available.
    pub fn has_previous_day(&self) -> bool {
        self.prev.is_some()
    }
}

/// The full result for one evaluated window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowReport {
    pub daily: BTreeMap<NaiveDate, DailyIndices>,
    pub summary: PeriodSummary,
}

/// The seismograph engine. Holds the immutable configuration; all
/// per-window state is owned by the caller.
#[derive(Debug, Clone)]
pub struct Seismograph {
    config: SeismographConfig,
    mode: HookMode,
}

impl Seismograph {
    /// Create an engine, validating the configuration.
    pub fn new(config: SeismographConfig) -> SeismographResult<Self> {
        config.validate().map_err(SeismographError::Config)?;
        Ok(Self {
            config,
            mode: HookMode::Solo,
        })
    }

    /// Engine with the standard calibration.
    pub fn with_defaults() -> Self {
        Self {
            config: SeismographConfig::default(),
            mode: HookMode::Solo,
        }
    }

    /// Select the hook bounds for paired-chart evaluation.
    pub fn with_mode(mut self, mode: HookMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(&self) -> &SeismographConfig {
        &self.config
    }

    /// Evaluate one day and advance the state.
    ///
    /// Never fails: malformed aspects become rejections, an empty day
    /// produces zeroed indices with the `empty_input` flag set.
    pub fn evaluate_day(
        &self,
        date: NaiveDate,
        raw_aspects: &[RawAspect],
        state: &mut WindowState,
    ) -> DailyIndices {
        let outcome = classify_day(raw_aspects, &self.config);

        let mut scored = score_day(&outcome.accepted, &self.config.scoring);
        apply_crisis_cap(&mut scored, &self.config.scoring);

        let aggregate = aggregate_day(&scored, &self.config.normalizer);

        let (magnitude, provenance) =
            scale_magnitude(aggregate.magnitude_energy, &state.rolling, &self.config.normalizer);
        let bias = scale_bias(aggregate.bias_energy, magnitude.value, &self.config.normalizer);

        let mut clamp_events = Vec::new();
        if magnitude.hit_min || magnitude.hit_max {
            clamp_events.push(ClampEvent {
                axis: "magnitude".to_string(),
                raw: magnitude.raw,
                clamped: magnitude.value,
            });
        }
        if bias.hit_min || bias.hit_max {
            clamp_events.push(ClampEvent {
                axis: "directional_bias".to_string(),
                raw: bias.raw,
                clamped: bias.value,
            });
        }

        let signals = volatility(
            &scored,
            aggregate.raw_bias,
            state.prev.as_ref(),
            &self.config.volatility,
        );

        let sfd = compute_sfd(&outcome.accepted, &self.config.sfd);

        let hooks: HookSelection =
            select_hooks(&scored, self.mode, &state.prev_hooks, &self.config.hooks);

        let bands = band_day(&scored, state.prev.as_ref().map(|p| p.scored.as_slice()));

        let indices = DailyIndices {
            date,
            magnitude: magnitude.value,
            magnitude_label: MagnitudeLabel::for_value(magnitude.value),
            directional_bias: bias.value,
            polarity: Polarity::for_value(bias.value),
            bias_severity: BiasSeverity::for_value(bias.value),
            volatility: signals.total,
            volatility_label: VolatilityLabel::for_value(f64::from(signals.total)),
            volatility_signals: signals,
            sfd,
            raw: RawAxes {
                magnitude: aggregate.raw_magnitude,
                bias: aggregate.raw_bias,
                magnitude_energy: aggregate.magnitude_energy,
                bias_energy: aggregate.bias_energy,
            },
            scaling: provenance,
            clamp_events,
            saturated: magnitude.value >= SATURATION_EDGE,
            empty_input: raw_aspects.is_empty(),
            rejections: outcome.rejections,
            hooks,
            bands,
            aspects: scored.clone(),
        };

        debug!(
            date = %date,
            magnitude = indices.magnitude,
            bias = indices.directional_bias,
            volatility = indices.volatility,
            sfd = indices.sfd.sfd,
            "evaluated day"
        );

        // Advance the carried state: rolling history takes the raw
        // pre-normalization energy; the day context takes the scored set
        // and displayed bias; hook keys feed tomorrow's continuity bonus.
        state.rolling.push(aggregate.magnitude_energy);
        state.prev_hooks = indices
            .hooks
            .hooks
            .iter()
            .map(|h| (h.moving.clone(), h.fixed.clone(), h.aspect.clone()))
            .collect();
        state.prev = Some(DayContext {
            scored,
            bias: indices.directional_bias,
        });

        indices
    }

    /// Evaluate a whole window: a sequential fold over the sorted dates.
    ///
    /// # Errors
    ///
    /// Returns [`SeismographError::InvalidWindow`] when the window is
    /// empty. Dates in a `BTreeMap` are sorted and unique by construction.
    pub fn evaluate_window(
        &self,
        window: &BTreeMap<NaiveDate, Vec<RawAspect>>,
    ) -> SeismographResult<WindowReport> {
        if window.is_empty() {
            return Err(SeismographError::InvalidWindow(
                "window contains no dates".to_string(),
            ));
        }

        let mut state = WindowState::new(&self.config);
        let mut daily = BTreeMap::new();
        for (date, raw_aspects) in window {
            let indices = self.evaluate_day(*date, raw_aspects, &mut state);
            daily.insert(*date, indices);
        }

        let ordered: Vec<&DailyIndices> = daily.values().collect();
        let summary = summarize(&ordered);
        Ok(WindowReport { daily, summary })
    }

    /// Evaluate a window supplied as a date/aspect list.
    ///
    /// # Errors
    ///
    /// Returns [`SeismographError::InvalidWindow`] when the list is empty,
    /// out of order, or contains duplicate dates.
    pub fn evaluate_days(
        &self,
        days: &[(NaiveDate, Vec<RawAspect>)],
    ) -> SeismographResult<WindowReport> {
        for pair in days.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(SeismographError::InvalidWindow(format!(
                    "dates must be strictly ascending, got {} before {}",
                    pair[0].0, pair[1].0
                )));
            }
        }
        let window: BTreeMap<NaiveDate, Vec<RawAspect>> = days.iter().cloned().collect();
        self.evaluate_window(&window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::ScalingStrategy;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 10, day).expect("valid date")
    }

    fn busy_day() -> Vec<RawAspect> {
        vec![
            RawAspect::new("Saturn", "Sun", "square", 1.0),
            RawAspect::new("Pluto", "Moon", "opposition", 2.0),
            RawAspect::new("Jupiter", "Venus", "trine", 1.5),
            RawAspect::new("Uranus", "Mercury", "square", 2.5),
        ]
    }

    #[test]
    fn test_empty_day_produces_flagged_zeroes() {
        let engine = Seismograph::with_defaults();
        let mut state = WindowState::new(engine.config());
        let indices = engine.evaluate_day(date(1), &[], &mut state);
        assert_eq!(indices.magnitude, 0.0);
        assert_eq!(indices.directional_bias, 0.0);
        assert_eq!(indices.volatility, 0);
        assert!(indices.empty_input);
        assert!(indices.hooks.no_signal);
    }

    #[test]
    fn test_all_rejected_day_is_not_flagged_empty() {
        let engine = Seismograph::with_defaults();
        let mut state = WindowState::new(engine.config());
        let raws = vec![RawAspect::new("Mars", "Sun", "square", 30.0)];
        let indices = engine.evaluate_day(date(1), &raws, &mut state);
        assert_eq!(indices.magnitude, 0.0);
        assert!(!indices.empty_input);
        assert_eq!(indices.rejections.len(), 1);
    }

    #[test]
    fn test_state_advances_across_days() {
        let engine = Seismograph::with_defaults();
        let mut state = WindowState::new(engine.config());
        assert!(!state.has_previous_day());
        engine.evaluate_day(date(1), &busy_day(), &mut state);
        assert!(state.has_previous_day());
        assert_eq!(state.history_len(), 1);
        engine.evaluate_day(date(2), &busy_day(), &mut state);
        assert_eq!(state.history_len(), 2);
    }

    #[test]
    fn test_strategy_schedule_over_window() {
        let engine = Seismograph::with_defaults();
        let days: Vec<(NaiveDate, Vec<RawAspect>)> =
            (1..=20).map(|d| (date(d), busy_day())).collect();
        let report = engine.evaluate_days(&days).unwrap();

        let first = &report.daily[&date(1)];
        assert_eq!(first.scaling.strategy, ScalingStrategy::Prior);
        assert_eq!(first.scaling.confidence, 0.0);

        let fifth = &report.daily[&date(5)];
        assert_eq!(fifth.scaling.strategy, ScalingStrategy::Blended);

        let late = &report.daily[&date(20)];
        assert_eq!(late.scaling.strategy, ScalingStrategy::Rolling);
        assert_eq!(late.scaling.confidence, 1.0);
    }

    #[test]
    fn test_empty_window_is_invalid() {
        let engine = Seismograph::with_defaults();
        let window = BTreeMap::new();
        assert!(matches!(
            engine.evaluate_window(&window),
            Err(SeismographError::InvalidWindow(_))
        ));
    }

    #[test]
    fn test_unsorted_days_are_invalid() {
        let engine = Seismograph::with_defaults();
        let days = vec![(date(2), vec![]), (date(1), vec![])];
        assert!(matches!(
            engine.evaluate_days(&days),
            Err(SeismographError::InvalidWindow(_))
        ));
        let duplicated = vec![(date(1), vec![]), (date(1), vec![])];
        assert!(matches!(
            engine.evaluate_days(&duplicated),
            Err(SeismographError::InvalidWindow(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected_at_boundary() {
        let mut config = SeismographConfig::default();
        config.normalizer.prior_divisor = -1.0;
        assert!(matches!(
            Seismograph::new(config),
            Err(SeismographError::Config(_))
        ));
    }

    #[test]
    fn test_summary_carries_version_tags() {
        let engine = Seismograph::with_defaults();
        let days = vec![(date(1), busy_day()), (date(2), busy_day())];
        let report = engine.evaluate_days(&days).unwrap();
        assert_eq!(report.summary.versions.aggregation, crate::versions::AGGREGATION_VERSION);
        assert_eq!(report.summary.versions.differential, crate::versions::DIFFERENTIAL_VERSION);
        assert_eq!(
            report.summary.versions.normalization,
            crate::versions::NORMALIZATION_VERSION
        );
    }

    #[test]
    fn test_independent_states_do_not_interact() {
        let engine = Seismograph::with_defaults();
        let mut state_a = WindowState::new(engine.config());
        let mut state_b = WindowState::new(engine.config());

        for d in 1..=5 {
            engine.evaluate_day(date(d), &busy_day(), &mut state_a);
        }
        let fresh = engine.evaluate_day(date(1), &busy_day(), &mut state_b);
        assert_eq!(fresh.scaling.strategy, ScalingStrategy::Prior);
        assert_eq!(state_b.history_len(), 1);
        assert_eq!(state_a.history_len(), 5);
    }
}
