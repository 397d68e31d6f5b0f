//! The frame pacer (`Pacer`).
//!
//! Holds the target-rate state, the schedule anchor and the correction history.
//! Each `tick` compares the time that should have elapsed for the frames counted
//! since the anchor against the time that actually elapsed, then sleeps off the
//! smoothed difference when the host is running ahead.

use std::time::{Duration, Instant};

use pacer_traits::clock::{Clock, MonotonicClock};
use pacer_traits::{NoopSink, SpeedSink};

use crate::AVERAGE_SAMPLES;
use crate::config::{DriftLimits, PacerCfg};
use crate::history::CorrectionHistory;
use crate::status::TickStats;
use crate::types::SpeedChange;
use crate::util::{MICROS_PER_MILLI, MICROS_PER_SEC, duration_us, period_us};

/// Speeds at or above this (and below base) step by 5; below it, by 1.
const FINE_STEP_FLOOR: u32 = 15;

/// Real-time frame pacer.
///
/// Single-threaded: drive `tick` and the rate mutators from the same thread.
pub struct Pacer<C: Clock = MonotonicClock> {
    pub(crate) clock: C,
    pub(crate) sink: Box<dyn SpeedSink + Send>,
    pub(crate) limits: DriftLimits,

    pub(crate) speed: u32,
    pub(crate) base_speed: u32,
    pub(crate) us_per_frame: u64,
    pub(crate) frames: u64,

    pub(crate) schedule_start: Option<Instant>,
    pub(crate) last_us_per_frame: u64,
    pub(crate) reanchor_pending: bool,
    pub(crate) history: CorrectionHistory<AVERAGE_SAMPLES>,

    pub(crate) last_report: Option<Instant>,
    pub(crate) frames_at_last_report: u64,
    pub(crate) last: TickStats,
}

impl<C: Clock> core::fmt::Debug for Pacer<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pacer")
            .field("speed", &self.speed)
            .field("base_speed", &self.base_speed)
            .field("us_per_frame", &self.us_per_frame)
            .field("frames", &self.frames)
            .field("reanchor_pending", &self.reanchor_pending)
            .finish()
    }
}

impl Pacer<MonotonicClock> {
    /// Pacer on the real monotonic clock at the default 60 Hz.
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }

    /// Start building a Pacer.
    pub fn builder() -> crate::builder::PacerBuilder<MonotonicClock> {
        crate::builder::PacerBuilder::new()
    }
}

impl Default for Pacer<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Pacer<C> {
    /// Pacer on `clock` at the default 60 Hz with default limits and no sink.
    pub fn with_clock(clock: C) -> Self {
        Self::from_parts(clock, Box::new(NoopSink), PacerCfg::default())
    }

    pub(crate) fn from_parts(clock: C, sink: Box<dyn SpeedSink + Send>, cfg: PacerCfg) -> Self {
        let hz = cfg.hertz.max(1);
        Self {
            clock,
            sink,
            limits: cfg.limits,
            speed: hz,
            base_speed: hz,
            us_per_frame: period_us(hz),
            frames: 0,
            schedule_start: None,
            last_us_per_frame: 0,
            reanchor_pending: false,
            history: CorrectionHistory::new(),
            last_report: None,
            frames_at_last_report: 0,
            last: TickStats::default(),
        }
    }

    /// Replace the speed-change sink.
    pub fn set_sink(&mut self, sink: impl SpeedSink + Send + 'static) {
        self.sink = Box::new(sink);
    }

    /// Hard re-baseline: sets both speed and base speed. Does not notify the sink.
    pub fn set_hertz(&mut self, hertz: u32) {
        let hz = hertz.max(1);
        self.speed = hz;
        self.base_speed = hz;
        tracing::debug!(hertz = hz, "pacer re-baselined");
        self.fix_speed_ratio();
    }

    /// Set the target speed, clamped to at least 1. Base speed is unchanged.
    pub fn set_speed(&mut self, speed: i64) {
        self.speed = speed.clamp(1, i64::from(u32::MAX)) as u32;
        self.notify_speed();
        self.fix_speed_ratio();
    }

    /// Step the target speed up or down.
    ///
    /// Steps by 10 at or above base speed, by 5 from 15 up to base, and by 1 below 15.
    /// Decreasing at speed 1 leaves it unchanged; the sink is notified either way.
    pub fn alter_speed(&mut self, change: SpeedChange) {
        let step: i64 = if self.speed >= self.base_speed {
            10
        } else if self.speed >= FINE_STEP_FLOOR {
            5
        } else if self.speed > 1 || change == SpeedChange::Increase {
            1
        } else {
            0
        };
        let next = i64::from(self.speed) + step * change.sign();
        self.speed = next.clamp(1, i64::from(u32::MAX)) as u32;
        self.notify_speed();
        self.fix_speed_ratio();
    }

    #[inline]
    pub fn speed(&self) -> u32 {
        self.speed
    }

    #[inline]
    pub fn base_speed(&self) -> u32 {
        self.base_speed
    }

    /// Frame period derived from the current speed.
    #[inline]
    pub fn us_per_frame(&self) -> u64 {
        self.us_per_frame
    }

    /// Frames counted since the current anchor.
    #[inline]
    pub fn frames_elapsed(&self) -> u64 {
        self.frames
    }

    /// Number of samples currently in the smoothing window.
    #[inline]
    pub fn correction_samples(&self) -> usize {
        self.history.valid()
    }

    #[inline]
    pub fn limits(&self) -> &DriftLimits {
        &self.limits
    }

    /// Diagnostics from the most recent tick.
    #[inline]
    pub fn last_tick(&self) -> &TickStats {
        &self.last
    }

    /// Ratio of current to base speed; widens the upper drift bound when sped up.
    #[inline]
    pub fn speed_factor(&self) -> f64 {
        f64::from(self.speed) / f64::from(self.base_speed)
    }

    /// Account for one completed frame and sleep off any lead over the wall clock.
    ///
    /// Returns the measured frame rate when a report interval has elapsed.
    pub fn tick(&mut self) -> Option<u32> {
        let now = self.clock.now();

        let (start, anchored) = match self.schedule_start {
            Some(start)
                if !self.reanchor_pending && self.last_us_per_frame == self.us_per_frame =>
            {
                self.frames = self.frames.saturating_add(1);
                (start, false)
            }
            _ => {
                self.anchor(now);
                (now, true)
            }
        };
        self.last_us_per_frame = self.us_per_frame;

        let expected =
            i64::try_from(self.us_per_frame.saturating_mul(self.frames)).unwrap_or(i64::MAX);
        let actual =
            i64::try_from(duration_us(now.saturating_duration_since(start))).unwrap_or(i64::MAX);
        let drift = expected.saturating_sub(actual);

        let factor = self.speed_factor();
        if self.limits.out_of_window(drift, factor) {
            tracing::debug!(
                drift_us = drift,
                speed = self.speed,
                frames = self.frames,
                "drift outside window; re-anchoring on next tick"
            );
            self.reanchor_pending = true;
        }

        self.history.push(drift);
        let average = self.history.mean().unwrap_or(drift);

        let slept = if average > 0 && (average as f64) < self.limits.sleep_ceiling(factor) {
            let d = Duration::from_millis(average.unsigned_abs() / MICROS_PER_MILLI);
            self.clock.sleep(d);
            Some(d)
        } else {
            None
        };

        let rate = self.report(now);

        self.last = TickStats {
            anchored,
            frames: self.frames,
            drift_us: drift,
            average_us: average,
            slept,
            reanchor_pending: self.reanchor_pending,
            rate,
        };
        rate
    }

    fn anchor(&mut self, now: Instant) {
        if self.schedule_start.is_some() {
            tracing::trace!(speed = self.speed, "schedule re-anchored");
        }
        self.schedule_start = Some(now);
        self.last_report = Some(now);
        self.frames = 0;
        self.frames_at_last_report = 0;
        self.reanchor_pending = false;
    }

    fn report(&mut self, now: Instant) -> Option<u32> {
        let since = self.last_report.unwrap_or(now);
        let interval_us = duration_us(now.saturating_duration_since(since));
        if interval_us < self.limits.report_interval_us {
            return None;
        }
        let frames = self.frames.saturating_sub(self.frames_at_last_report);
        let secs = interval_us as f64 / MICROS_PER_SEC as f64;
        let rate = (frames as f64 / secs).round() as u32;
        self.last_report = Some(now);
        self.frames_at_last_report = self.frames;
        Some(rate)
    }

    fn notify_speed(&self) {
        tracing::debug!(speed = self.speed, base = self.base_speed, "target speed changed");
        self.sink.speed_changed(self.speed);
    }

    /// Recompute the frame period and restart the frame count; the next tick re-anchors.
    fn fix_speed_ratio(&mut self) {
        self.us_per_frame = period_us(self.speed);
        self.frames = 0;
        self.reanchor_pending = true;
    }
}
