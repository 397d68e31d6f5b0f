//! Diagnostics captured on every pacing tick.

use std::time::Duration;

/// What the most recent `Pacer::tick` observed and did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// This tick started a fresh schedule.
    pub anchored: bool,
    /// Frames elapsed since the current anchor.
    pub frames: u64,
    /// Expected minus actual elapsed time (µs); positive means ahead of the wall clock.
    pub drift_us: i64,
    /// Mean of the correction history after recording `drift_us`.
    pub average_us: i64,
    /// Sleep requested from the clock, if any.
    pub slept: Option<Duration>,
    /// Drift fell outside the window; the next tick re-anchors.
    pub reanchor_pending: bool,
    /// Measured rate reported by this tick.
    pub rate: Option<u32>,
}
