//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "pacer", version, about = "Frame pacer host")]
pub struct Cli {
    /// Path to config TOML; built-in defaults are used when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit reports and errors as JSON lines
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Stepped speed adjustment requested on the command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Alter {
    Increase,
    Decrease,
}

impl From<Alter> for pacer_core::SpeedChange {
    fn from(a: Alter) -> Self {
        match a {
            Alter::Increase => pacer_core::SpeedChange::Increase,
            Alter::Decrease => pacer_core::SpeedChange::Decrease,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drive a simulated frame loop through the pacer
    Run {
        /// Base rate in Hz (overrides pacer.hertz)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        hertz: Option<u32>,
        /// Frames to simulate (overrides sim.frames)
        #[arg(long, value_name = "N")]
        frames: Option<u64>,
        /// Simulated work per frame in µs (overrides sim.work_us)
        #[arg(long, value_name = "US")]
        work_us: Option<u64>,
        /// Target speed applied after the base rate; clamped to >= 1
        #[arg(long, allow_negative_numbers = true)]
        speed: Option<i64>,
        /// Step the speed up or down; repeatable, applied in order after --speed
        #[arg(long, value_enum, action = ArgAction::Append)]
        alter: Vec<Alter>,
        /// Print sleep statistics on completion
        #[arg(long, action = ArgAction::SetTrue)]
        stats: bool,
    },
    /// Validate config and construct a pacer
    SelfCheck,
}
