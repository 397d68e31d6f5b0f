//! `From` implementations bridging `pacer_config` types to `pacer_core` types.

use crate::config::{DriftLimits, PacerCfg};

// ── DriftLimits ──────────────────────────────────────────────────────────────

impl From<&pacer_config::Config> for DriftLimits {
    fn from(c: &pacer_config::Config) -> Self {
        Self {
            min_us: c.drift.min_us,
            max_us: c.drift.max_us,
            report_interval_us: c.report.interval_us,
        }
    }
}

// ── PacerCfg ─────────────────────────────────────────────────────────────────

impl From<&pacer_config::Config> for PacerCfg {
    fn from(c: &pacer_config::Config) -> Self {
        Self {
            hertz: c.pacer.hertz,
            limits: c.into(),
        }
    }
}
