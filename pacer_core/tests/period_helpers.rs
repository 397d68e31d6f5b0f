// Focused tests for period helpers.
use pacer_core::util::{duration_us, period_us};
use std::time::Duration;

#[test]
fn period_us_uses_integer_division() {
    // hz=1 → 1s
    assert_eq!(period_us(1), 1_000_000);
    assert_eq!(period_us(60), 16_666);
    assert_eq!(period_us(50), 20_000);
    assert_eq!(period_us(7), 142_857);
    // Above 1 MHz the period truncates to zero
    assert_eq!(period_us(1_000_001), 0);
}

#[test]
fn period_us_clamps_zero_hz() {
    assert_eq!(period_us(0), 1_000_000);
}

#[test]
fn duration_us_saturates() {
    assert_eq!(duration_us(Duration::from_millis(3)), 3_000);
    assert_eq!(duration_us(Duration::MAX), u64::MAX);
}
