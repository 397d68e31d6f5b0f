//! Speed-change sinks backed by channels.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use pacer_traits::SpeedSink;

/// Forwards speed changes to a UI/status consumer over a channel.
///
/// Never blocks: a full or disconnected channel drops the notification.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<u32>,
}

impl ChannelSink {
    pub fn new(tx: Sender<u32>) -> Self {
        Self { tx }
    }

    /// Convenience pair over an unbounded channel.
    pub fn unbounded() -> (Self, Receiver<u32>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }
}

impl SpeedSink for ChannelSink {
    fn speed_changed(&self, speed: u32) {
        match self.tx.try_send(speed) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::trace!(speed, "speed sink channel full; dropping notification");
            }
            Err(TrySendError::Disconnected(_)) => {
                tracing::trace!(speed, "speed sink receiver gone");
            }
        }
    }
}
