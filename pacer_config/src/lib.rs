#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the frame pacer.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - Every section is optional; missing sections fall back to the pacer defaults
//!   (60 Hz, a -50 ms / +50 ms drift window, one-second rate reports).
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PacerCfg {
    /// Base rate in frames per second; also the initial target speed.
    pub hertz: u32,
}

impl Default for PacerCfg {
    fn default() -> Self {
        Self { hertz: 60 }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DriftCfg {
    /// Lower drift bound (µs). Running further behind than this re-anchors the schedule.
    pub min_us: i64,
    /// Upper drift bound (µs) at base speed; scaled by speed/base at runtime.
    pub max_us: i64,
}

impl Default for DriftCfg {
    fn default() -> Self {
        Self {
            min_us: -50_000,
            max_us: 50_000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ReportCfg {
    /// Minimum wall-clock interval between measured-rate reports (µs).
    pub interval_us: u64,
}

impl Default for ReportCfg {
    fn default() -> Self {
        Self {
            interval_us: 1_000_000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SimCfg {
    /// Number of frames the CLI host drives through the pacer.
    pub frames: u64,
    /// Simulated work per frame (µs) before each tick.
    pub work_us: u64,
}

impl Default for SimCfg {
    fn default() -> Self {
        Self {
            frames: 600,
            work_us: 2_000,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub pacer: PacerCfg,
    pub drift: DriftCfg,
    pub report: ReportCfg,
    pub sim: SimCfg,
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

/// Read, parse and validate a config file.
pub fn load_file(path: &Path) -> eyre::Result<Config> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("read config {:?}: {}", path, e))?;
    let cfg = load_toml(&text).map_err(|e| eyre::eyre!("invalid configuration: {e}"))?;
    cfg.validate()?;
    Ok(cfg)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        // Pacer
        if self.pacer.hertz == 0 {
            eyre::bail!("pacer.hertz must be > 0");
        }

        // Drift window
        if self.drift.min_us >= 0 {
            eyre::bail!("drift.min_us must be < 0");
        }
        if self.drift.max_us <= 0 {
            eyre::bail!("drift.max_us must be > 0");
        }

        // Reports
        if self.report.interval_us == 0 {
            eyre::bail!("report.interval_us must be >= 1");
        }

        // Simulation
        if self.sim.work_us >= 1_000_000 {
            eyre::bail!("sim.work_us is unreasonably large (>= 1s per frame)");
        }

        // Logging
        if let Some(rot) = self.logging.rotation.as_deref()
            && !matches!(rot, "never" | "daily" | "hourly")
        {
            eyre::bail!("logging.rotation must be one of never|daily|hourly, got {rot}");
        }

        Ok(())
    }
}
