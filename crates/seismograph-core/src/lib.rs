//! Symbolic seismograph computation engine.
//!
//! Converts per-day lists of geometric aspect records into bounded,
//! time-indexed scalar indices: aggregate pressure (magnitude, 0-5),
//! directional lean (bias, -5..5), day-over-day instability (volatility)
//! and a support-friction differential (SFD, -5..5).
//!
//! # Modules
//!
//! - [`bodies`] / [`aspect`]: closed taxonomies, built once at the
//!   classification boundary
//! - [`config`]: immutable calibration, per-subsystem, with presets
//! - [`classify`]: validation, tagging and rejection with named reasons
//! - [`scoring`]: pure per-aspect scoring with geometry amplification
//! - [`aggregate`]: daily sums, compressed energies, volatility signals
//! - [`normalize`]: rolling-window scaling with strategy provenance
//! - [`sfd`]: two-pass support/counter differential
//! - [`hooks`]: bounded, priority-ranked aspect selection
//! - [`bands`] / [`labels`]: orb banding and categorical label bands
//! - [`summary`]: period means and calibration version stamping
//! - [`processor`]: the day fold threading caller-owned state
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use seismograph_core::aspect::RawAspect;
//! use seismograph_core::processor::Seismograph;
//! use std::collections::BTreeMap;
//!
//! let engine = Seismograph::with_defaults();
//! let mut window = BTreeMap::new();
//! window.insert(
//!     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
//!     vec![RawAspect::new("Saturn", "Sun", "square", 0.8)],
//! );
//!
//! let report = engine.evaluate_window(&window).unwrap();
//! let day = report.daily.values().next().unwrap();
//! assert!(day.magnitude >= 0.0 && day.magnitude <= 5.0);
//! assert!(day.directional_bias <= 0.0);
//! ```
//!
//! The core is pure and synchronous. All cross-day state (the rolling
//! magnitude history and the previous day's context) lives in a
//! caller-owned [`processor::WindowState`]; evaluating independent
//! subjects concurrently requires nothing more than independent states.

pub mod aggregate;
pub mod aspect;
pub mod bands;
pub mod bodies;
pub mod classify;
pub mod config;
pub mod error;
pub mod hooks;
pub mod indices;
pub mod labels;
pub mod normalize;
pub mod processor;
pub mod scoring;
pub mod sfd;
pub mod summary;
pub mod versions;

pub use aspect::RawAspect;
pub use config::SeismographConfig;
pub use error::{SeismographError, SeismographResult};
pub use indices::DailyIndices;
pub use processor::{Seismograph, WindowReport, WindowState};
pub use summary::PeriodSummary;
