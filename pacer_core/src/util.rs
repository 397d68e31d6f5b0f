//! Common time/period helpers for pacer_core.

/// Number of microseconds in one second.
pub const MICROS_PER_SEC: u64 = 1_000_000;
/// Number of microseconds in one millisecond.
pub const MICROS_PER_MILLI: u64 = 1_000;

/// Frame period in microseconds for a given rate in Hz.
/// - Clamps `hz` to at least 1 to avoid division by zero.
/// - Plain integer division otherwise; rates above 1 MHz yield 0.
#[inline]
pub fn period_us(hz: u32) -> u64 {
    MICROS_PER_SEC / u64::from(hz.max(1))
}

/// Saturating conversion of a `Duration` to whole microseconds.
#[inline]
pub fn duration_us(d: std::time::Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}
