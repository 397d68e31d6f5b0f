mod cli;
mod error_fmt;
mod logging;
mod run;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use eyre::Result;
use pacer_core::error::PacerError;

use crate::cli::{Cli, Commands, JSON_MODE};
use crate::error_fmt::{exit_code_for_error, format_error_json, humanize};
use crate::run::{RunParams, build_pacer, print_stats, print_summary, run_frames};

fn main() {
    let cli = Cli::parse();
    let _ = JSON_MODE.set(cli.json);

    if let Err(err) = real_main(cli) {
        if JSON_MODE.get().copied().unwrap_or(false) {
            eprintln!("{}", format_error_json(&err));
        } else {
            eprintln!("{}", humanize(&err));
        }
        tracing::error!(error = %err, "exiting with error");
        std::process::exit(exit_code_for_error(&err));
    }
}

fn load_config(cli: &Cli) -> Result<pacer_config::Config> {
    match &cli.config {
        Some(path) => {
            let cfg = pacer_config::load_file(path)
                .map_err(|e| PacerError::Config(format!("{e:#}")))?;
            Ok(cfg)
        }
        None => Ok(pacer_config::Config::default()),
    }
}

fn real_main(cli: Cli) -> Result<()> {
    let cfg = load_config(&cli)?;
    logging::init(cli.json, &cli.log_level, &cfg.logging)?;

    match cli.cmd {
        Commands::Run {
            hertz,
            frames,
            work_us,
            speed,
            alter,
            stats,
        } => {
            let shutdown = Arc::new(AtomicBool::new(false));
            let flag = Arc::clone(&shutdown);
            if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
                tracing::warn!(error = %e, "failed to install Ctrl-C handler");
            }

            let params = RunParams {
                hertz,
                frames: frames.unwrap_or(cfg.sim.frames),
                work_us: work_us.unwrap_or(cfg.sim.work_us),
                speed,
                alter,
                json: cli.json,
            };
            let summary = run_frames(&cfg, &params, shutdown)?;
            print_summary(cli.json, &summary);
            if stats {
                print_stats(&summary);
            }
        }
        Commands::SelfCheck => {
            let pacer = build_pacer(&cfg, None)?;
            tracing::debug!(?pacer, "self-check pacer built");
            if cli.json {
                println!(
                    "{}",
                    serde_json::json!({
                        "status": "ok",
                        "hertz": pacer.base_speed(),
                        "us_per_frame": pacer.us_per_frame(),
                    })
                );
            } else {
                println!(
                    "ok hertz={} us_per_frame={}",
                    pacer.base_speed(),
                    pacer.us_per_frame()
                );
            }
        }
    }
    Ok(())
}
