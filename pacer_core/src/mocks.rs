//! Test and helper mocks for pacer_core

use std::sync::{Arc, Mutex};

/// A sink that records every speed notification; clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    seen: Arc<Mutex<Vec<u32>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications received so far, oldest first.
    pub fn seen(&self) -> Vec<u32> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl pacer_traits::SpeedSink for RecordingSink {
    fn speed_changed(&self, speed: u32) {
        if let Ok(mut v) = self.seen.lock() {
            v.push(speed);
        }
    }
}
