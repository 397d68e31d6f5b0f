//! Simulated frame loop: config mapping, pacer assembly, and report output.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use pacer_core::error::Result as CoreResult;
use pacer_core::{Pacer, PacerCfg};
use serde_json::json;

use crate::cli::Alter;

/// Effective knobs for one `run` invocation after CLI overrides.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub hertz: Option<u32>,
    pub frames: u64,
    pub work_us: u64,
    pub speed: Option<i64>,
    pub alter: Vec<Alter>,
    pub json: bool,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub frames: u64,
    pub speed: u32,
    pub base_speed: u32,
    pub reports: Vec<u32>,
    pub sleeps: Vec<Duration>,
    pub reanchors: u64,
    pub interrupted: bool,
}

/// Build a pacer from config plus overrides, without running it.
pub fn build_pacer(cfg: &pacer_config::Config, hertz: Option<u32>) -> CoreResult<Pacer> {
    let mut core_cfg: PacerCfg = cfg.into();
    if let Some(hz) = hertz {
        core_cfg.hertz = hz;
    }
    Pacer::builder()
        .with_config(core_cfg)
        .with_sink(|speed: u32| tracing::info!(speed, "target speed changed"))
        .build()
}

pub fn run_frames(
    cfg: &pacer_config::Config,
    params: &RunParams,
    shutdown: Arc<AtomicBool>,
) -> CoreResult<RunSummary> {
    let mut pacer = build_pacer(cfg, params.hertz)?;
    if let Some(speed) = params.speed {
        pacer.set_speed(speed);
    }
    for a in &params.alter {
        pacer.alter_speed((*a).into());
    }

    tracing::info!(
        base_speed = pacer.base_speed(),
        speed = pacer.speed(),
        us_per_frame = pacer.us_per_frame(),
        frames = params.frames,
        work_us = params.work_us,
        "run start"
    );

    let work = Duration::from_micros(params.work_us);
    let mut summary = RunSummary::default();
    for frame in 1..=params.frames {
        if shutdown.load(Ordering::Relaxed) {
            tracing::warn!(frame, "interrupted; stopping frame loop");
            summary.interrupted = true;
            break;
        }

        // Stand-in for emulating one frame
        if !work.is_zero() {
            std::thread::sleep(work);
        }

        let rate = pacer.tick();
        let tick = *pacer.last_tick();
        if tick.anchored && frame > 1 {
            summary.reanchors += 1;
        }
        if let Some(d) = tick.slept {
            summary.sleeps.push(d);
        }
        if let Some(fps) = rate {
            summary.reports.push(fps);
            print_report(params.json, fps, pacer.speed(), frame);
        }
        summary.frames = frame;
    }

    summary.speed = pacer.speed();
    summary.base_speed = pacer.base_speed();
    tracing::info!(
        frames = summary.frames,
        reports = summary.reports.len(),
        reanchors = summary.reanchors,
        "run complete"
    );
    Ok(summary)
}

fn print_report(json: bool, fps: u32, speed: u32, frame: u64) {
    if json {
        println!(
            "{}",
            json!({ "event": "fps", "fps": fps, "speed": speed, "frame": frame })
        );
    } else {
        println!("fps={fps} speed={speed} frame={frame}");
    }
}

pub fn print_summary(json: bool, s: &RunSummary) {
    let status = if s.interrupted { "interrupted" } else { "complete" };
    if json {
        println!(
            "{}",
            json!({
                "event": status,
                "frames": s.frames,
                "speed": s.speed,
                "base_speed": s.base_speed,
                "reports": s.reports,
                "reanchors": s.reanchors,
            })
        );
    } else {
        println!(
            "{status} frames={} speed={} base={} reports={} reanchors={}",
            s.frames,
            s.speed,
            s.base_speed,
            s.reports.len(),
            s.reanchors
        );
    }
}

/// Print sleep stats to stderr.
pub fn print_stats(s: &RunSummary) {
    let ms: Vec<u128> = s.sleeps.iter().map(Duration::as_millis).collect();
    let min = ms.iter().min().copied().unwrap_or(0);
    let max = ms.iter().max().copied().unwrap_or(0);
    let avg = if ms.is_empty() {
        0.0
    } else {
        ms.iter().sum::<u128>() as f64 / ms.len() as f64
    };
    eprintln!("\n--- Pacer Stats ---");
    eprintln!("Frames: {}", s.frames);
    eprintln!("Sleeps: {}", ms.len());
    eprintln!("Sleep min/avg/max (ms): {min} / {avg:.1} / {max}");
    eprintln!("Re-anchors: {}", s.reanchors);
    eprintln!("-------------------\n");
}
