//! Builder for `Pacer`.
//!
//! Collects the clock, speed sink and configuration, validating the drift limits
//! in `build()`. The rate itself is clamped rather than rejected.

use pacer_traits::SpeedSink;
use pacer_traits::clock::{Clock, MonotonicClock};

use crate::config::{DriftLimits, PacerCfg};
use crate::core::Pacer;
use crate::error::Result;

pub struct PacerBuilder<C: Clock = MonotonicClock> {
    clock: C,
    sink: Option<Box<dyn SpeedSink + Send>>,
    cfg: PacerCfg,
}

impl Default for PacerBuilder<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl PacerBuilder<MonotonicClock> {
    pub fn new() -> Self {
        Self {
            clock: MonotonicClock::new(),
            sink: None,
            cfg: PacerCfg::default(),
        }
    }
}

impl<C: Clock> PacerBuilder<C> {
    /// Swap the clock (e.g. a `ManualClock` in tests).
    pub fn with_clock<K: Clock>(self, clock: K) -> PacerBuilder<K> {
        PacerBuilder {
            clock,
            sink: self.sink,
            cfg: self.cfg,
        }
    }

    pub fn with_sink(mut self, sink: impl SpeedSink + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    pub fn with_config(mut self, cfg: PacerCfg) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn with_hertz(mut self, hertz: u32) -> Self {
        self.cfg.hertz = hertz;
        self
    }

    pub fn with_limits(mut self, limits: DriftLimits) -> Self {
        self.cfg.limits = limits;
        self
    }

    /// Validate and build.
    pub fn build(self) -> Result<Pacer<C>> {
        self.cfg.limits.validate().map_err(eyre::Report::new)?;
        if self.cfg.hertz == 0 {
            tracing::warn!("hertz 0 requested; clamping to 1");
        }
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(pacer_traits::NoopSink) as Box<dyn SpeedSink + Send>);
        Ok(Pacer::from_parts(self.clock, sink, self.cfg))
    }
}
