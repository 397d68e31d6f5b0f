//! Configuration types for the pacer.
//!
//! These are the runtime configuration structs used by `Pacer`.
//! They are separate from the TOML-deserialized config in `pacer_config`.

use crate::error::BuildError;
use crate::{DEFAULT_SPEED, MAX_DRIFT_US, MIN_DRIFT_US, REPORT_INTERVAL_US};

/// Drift tolerance and reporting cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriftLimits {
    /// Lower drift bound (µs). Not scaled by speed.
    pub min_us: i64,
    /// Upper drift bound (µs) at base speed. Scaled by `speed / base_speed`.
    pub max_us: i64,
    /// Minimum interval between measured-rate reports (µs).
    pub report_interval_us: u64,
}

impl Default for DriftLimits {
    fn default() -> Self {
        Self {
            min_us: MIN_DRIFT_US,
            max_us: MAX_DRIFT_US,
            report_interval_us: REPORT_INTERVAL_US,
        }
    }
}

impl DriftLimits {
    /// True when `drift_us` falls outside `[min_us, max_us * speed_factor]`.
    ///
    /// Only the upper bound scales with speed; a schedule that is behind by more
    /// than `min_us` is abandoned regardless of the target rate.
    #[inline]
    pub fn out_of_window(&self, drift_us: i64, speed_factor: f64) -> bool {
        drift_us < self.min_us || drift_us as f64 > self.sleep_ceiling(speed_factor)
    }

    /// Largest mean correction (exclusive) that may still be slept off.
    #[inline]
    pub fn sleep_ceiling(&self, speed_factor: f64) -> f64 {
        self.max_us as f64 * speed_factor
    }

    pub fn validate(&self) -> Result<(), BuildError> {
        if self.min_us >= 0 {
            return Err(BuildError::InvalidConfig("min drift must be negative"));
        }
        if self.max_us <= 0 {
            return Err(BuildError::InvalidConfig("max drift must be positive"));
        }
        if self.report_interval_us == 0 {
            return Err(BuildError::InvalidConfig("report interval must be > 0"));
        }
        Ok(())
    }
}

/// Pacer configuration: initial base rate plus drift limits.
#[derive(Debug, Clone, Copy)]
pub struct PacerCfg {
    /// Base rate in Hz; clamped to at least 1 when applied.
    pub hertz: u32,
    pub limits: DriftLimits,
}

impl Default for PacerCfg {
    fn default() -> Self {
        Self {
            hertz: DEFAULT_SPEED,
            limits: DriftLimits::default(),
        }
    }
}
