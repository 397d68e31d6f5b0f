#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Real-time frame pacing.
//!
//! Keeps a simulated clock (emulated frames, ticks of a device model) in step with
//! the wall clock at a target rate that may differ from free-running speed. All time
//! and sleep go through `pacer_traits::Clock`; speed changes are announced through
//! `pacer_traits::SpeedSink`.
//!
//! ## Architecture
//!
//! - **Pacer**: rate state, schedule anchor and per-frame drift correction (`core` module)
//! - **Smoothing**: fixed three-sample ring of recent corrections (`history` module)
//! - **Limits**: asymmetric drift window and report cadence (`config` module)
//! - **Builder**: validated construction from config (`builder` module)
//!
//! ## Drift
//!
//! Drift is `expected - actual` elapsed microseconds since the anchor. Positive drift
//! means the host is ahead and should sleep; negative means it is already late.
//! Drift outside `[min_us, max_us * speed/base]` abandons the schedule and the
//! following tick starts a new one.

pub mod builder;
pub mod config;
pub mod conversions;
pub mod core;
pub mod error;
pub mod history;
pub mod mocks;
pub mod sink;
pub mod status;
pub mod types;
pub mod util;

/// Default target and base rate (frames per second).
pub const DEFAULT_SPEED: u32 = 60;
/// Number of corrections averaged before sleeping.
pub const AVERAGE_SAMPLES: usize = 3;
/// Lower drift bound (µs); never scaled.
pub const MIN_DRIFT_US: i64 = -50_000;
/// Upper drift bound (µs) at base speed.
pub const MAX_DRIFT_US: i64 = 50_000;
/// Interval between measured-rate reports (µs).
pub const REPORT_INTERVAL_US: u64 = 1_000_000;

pub use crate::builder::PacerBuilder;
pub use crate::config::{DriftLimits, PacerCfg};
pub use crate::core::Pacer;
pub use crate::error::{BuildError, PacerError, Result};
pub use crate::history::CorrectionHistory;
pub use crate::sink::ChannelSink;
pub use crate::status::TickStats;
pub use crate::types::SpeedChange;
