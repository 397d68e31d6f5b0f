pub mod clock;

pub use clock::{Clock, ManualClock, MonotonicClock};

/// Receiver of target-speed change notifications (status bars, OSD, logs).
///
/// Fire-and-forget: the pacer never inspects a result and calls it synchronously
/// from the thread that mutated the speed.
pub trait SpeedSink {
    fn speed_changed(&self, speed: u32);
}

impl<F> SpeedSink for F
where
    F: Fn(u32),
{
    fn speed_changed(&self, speed: u32) {
        self(speed);
    }
}

/// Sink that drops every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl SpeedSink for NoopSink {
    fn speed_changed(&self, _speed: u32) {}
}
