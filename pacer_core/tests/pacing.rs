use std::time::Duration;

use pacer_core::{DriftLimits, Pacer};
use pacer_traits::ManualClock;

const FRAME_US: u64 = 16_666;

fn manual_pacer() -> (Pacer<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (Pacer::with_clock(clock.clone()), clock)
}

#[test]
fn first_tick_anchors_without_sleeping() {
    let (mut pacer, clock) = manual_pacer();
    assert_eq!(pacer.tick(), None);

    let t = pacer.last_tick();
    assert!(t.anchored);
    assert_eq!(t.frames, 0);
    assert_eq!(t.drift_us, 0);
    assert_eq!(t.slept, None);
    assert!(!t.reanchor_pending);
    assert_eq!(pacer.correction_samples(), 1);
    assert!(clock.sleeps().is_empty());
}

#[test]
fn steady_pace_never_sleeps() {
    let (mut pacer, clock) = manual_pacer();
    pacer.tick();
    for n in 1..=30 {
        clock.advance_us(FRAME_US);
        pacer.tick();
        let t = pacer.last_tick();
        assert!(!t.anchored);
        assert_eq!(t.frames, n);
        assert_eq!(t.drift_us, 0);
    }
    assert!(clock.sleeps().is_empty());
}

#[test]
fn sleeps_the_smoothed_lead() {
    let (mut pacer, clock) = manual_pacer();
    pacer.tick();

    // 6.666 ms into a 16.666 ms frame: 10 ms ahead; window [0, 10000] → 5000
    clock.advance_us(6_666);
    pacer.tick();
    assert_eq!(pacer.last_tick().drift_us, 10_000);
    assert_eq!(pacer.last_tick().average_us, 5_000);
    assert_eq!(pacer.last_tick().slept, Some(Duration::from_millis(5)));

    // now = 11_666 + 10_000; expected 33_332 → drift 11_666; window of 3 → 7222
    clock.advance_us(10_000);
    pacer.tick();
    assert_eq!(pacer.last_tick().drift_us, 11_666);
    assert_eq!(pacer.last_tick().average_us, 7_222);
    assert_eq!(pacer.correction_samples(), 3);

    // now = 28_666 + 10_000; expected 49_998 → drift 11_332; oldest (0) dropped
    clock.advance_us(10_000);
    pacer.tick();
    assert_eq!(pacer.last_tick().drift_us, 11_332);
    assert_eq!(pacer.last_tick().average_us, 10_999);
    assert_eq!(pacer.correction_samples(), 3);

    assert_eq!(
        clock.sleeps(),
        vec![
            Duration::from_millis(5),
            Duration::from_millis(7),
            Duration::from_millis(10),
        ]
    );
}

#[test]
fn sub_millisecond_lead_requests_zero_sleep() {
    let (mut pacer, clock) = manual_pacer();
    pacer.tick();
    // 1 ms ahead → mean 500 µs → 0 ms
    clock.advance_us(FRAME_US - 1_000);
    pacer.tick();
    assert_eq!(pacer.last_tick().average_us, 500);
    assert_eq!(pacer.last_tick().slept, Some(Duration::ZERO));
    assert_eq!(clock.offset(), Duration::from_micros(FRAME_US - 1_000));
}

#[test]
fn stall_behind_schedule_reanchors_next_tick() {
    let (mut pacer, clock) = manual_pacer();
    pacer.tick();

    // 60 ms late on the first frame
    clock.advance_us(FRAME_US + 60_000);
    pacer.tick();
    let t = *pacer.last_tick();
    assert_eq!(t.drift_us, -60_000);
    assert!(t.reanchor_pending);
    assert!(!t.anchored);
    assert_eq!(t.slept, None);
    assert_eq!(pacer.frames_elapsed(), 1);

    clock.advance_us(FRAME_US);
    pacer.tick();
    let t = *pacer.last_tick();
    assert!(t.anchored);
    assert_eq!(t.frames, 0);
    assert_eq!(t.drift_us, 0);
    assert!(!t.reanchor_pending);

    // Fresh schedule: on-time frame measures zero drift
    clock.advance_us(FRAME_US);
    pacer.tick();
    assert_eq!(pacer.last_tick().frames, 1);
    assert_eq!(pacer.last_tick().drift_us, 0);
    assert!(clock.sleeps().is_empty());
}

#[test]
fn small_lag_keeps_schedule() {
    let (mut pacer, clock) = manual_pacer();
    pacer.tick();
    clock.advance_us(FRAME_US + 50_000);
    pacer.tick();
    // exactly at the lower bound is still inside the window
    assert_eq!(pacer.last_tick().drift_us, -50_000);
    assert!(!pacer.last_tick().reanchor_pending);
    clock.advance_us(FRAME_US);
    pacer.tick();
    assert!(!pacer.last_tick().anchored);
    assert_eq!(pacer.last_tick().frames, 2);
}

#[test]
fn lead_at_ceiling_is_not_slept() {
    let clock = ManualClock::new();
    let mut pacer = Pacer::builder()
        .with_clock(clock.clone())
        .with_limits(DriftLimits {
            max_us: 5_000,
            ..DriftLimits::default()
        })
        .build()
        .unwrap();
    pacer.tick();
    // drift 10_000 > 5_000 → reset pending; mean 5_000 is not below the ceiling
    clock.advance_us(6_666);
    pacer.tick();
    let t = pacer.last_tick();
    assert_eq!(t.average_us, 5_000);
    assert!(t.reanchor_pending);
    assert_eq!(t.slept, None);
    assert!(clock.sleeps().is_empty());
}

#[test]
fn speed_change_reanchors_next_tick() {
    let (mut pacer, clock) = manual_pacer();
    pacer.tick();
    for _ in 0..5 {
        clock.advance_us(FRAME_US);
        pacer.tick();
    }
    assert_eq!(pacer.frames_elapsed(), 5);

    pacer.set_speed(120);
    assert_eq!(pacer.frames_elapsed(), 0);
    assert_eq!(pacer.us_per_frame(), 8_333);

    clock.advance_us(FRAME_US);
    pacer.tick();
    assert!(pacer.last_tick().anchored);
    clock.advance_us(8_333);
    pacer.tick();
    assert_eq!(pacer.last_tick().frames, 1);
    assert_eq!(pacer.last_tick().drift_us, 0);
}

#[test]
fn same_period_speed_change_still_reanchors() {
    let (mut pacer, clock) = manual_pacer();
    pacer.tick();
    clock.advance_us(FRAME_US);
    pacer.tick();
    // 60 → 60: period unchanged, schedule still restarts
    pacer.set_speed(60);
    clock.advance_us(FRAME_US);
    pacer.tick();
    assert!(pacer.last_tick().anchored);
    assert_eq!(pacer.last_tick().frames, 0);
}

#[test]
fn reports_measured_rate_each_second() {
    let (mut pacer, clock) = manual_pacer();
    assert_eq!(pacer.tick(), None);

    let mut reports = Vec::new();
    for n in 1..=122u64 {
        clock.advance_us(FRAME_US);
        if let Some(rate) = pacer.tick() {
            assert_eq!(pacer.last_tick().rate, Some(rate));
            reports.push((n, rate));
        }
    }
    // 61 frames span 1_016_626 µs; 60 frames fall 40 µs short of a second
    assert_eq!(reports, vec![(61, 60), (122, 60)]);
}

#[test]
fn slow_host_falls_out_of_window() {
    let (mut pacer, clock) = manual_pacer();
    pacer.set_hertz(10);
    pacer.tick();
    // 10 Hz target, host delivers a frame every 125 ms: 25 ms late per frame
    let mut rate = None;
    for _ in 0..8 {
        clock.advance_us(125_000);
        if let Some(r) = pacer.tick() {
            rate = Some(r);
        }
        if pacer.last_tick().reanchor_pending {
            break;
        }
    }
    // Two frames in: 50 ms late, still inside the window. The third pushes past it.
    assert!(pacer.last_tick().reanchor_pending);
    assert_eq!(pacer.last_tick().frames, 3);
    assert_eq!(rate, None);
}

#[test]
fn drift_window_is_asymmetric() {
    let limits = DriftLimits::default();
    // lower bound never scales
    assert!(limits.out_of_window(-50_001, 1.0));
    assert!(limits.out_of_window(-50_001, 2.0));
    assert!(!limits.out_of_window(-50_000, 0.5));
    // upper bound scales with speed factor
    assert!(limits.out_of_window(50_001, 1.0));
    assert!(!limits.out_of_window(50_001, 2.0));
    assert!(!limits.out_of_window(100_000, 2.0));
    assert!(limits.out_of_window(100_001, 2.0));
    assert!(limits.out_of_window(25_001, 0.5));
    assert_eq!(limits.sleep_ceiling(0.5), 25_000.0);
}

#[test]
fn speed_factor_tracks_speed_over_base() {
    let (mut pacer, _clock) = manual_pacer();
    assert_eq!(pacer.speed_factor(), 1.0);
    pacer.set_speed(120);
    assert_eq!(pacer.speed_factor(), 2.0);
    pacer.set_speed(30);
    assert_eq!(pacer.speed_factor(), 0.5);
}
