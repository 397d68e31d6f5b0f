//! Fixed-capacity ring of recent drift-correction samples.

/// Ring buffer of the last `N` signed corrections (µs).
///
/// The valid count is derived from the total number of writes, so a partially
/// filled ring averages only what it has seen.
#[derive(Debug, Clone, Copy)]
pub struct CorrectionHistory<const N: usize> {
    samples: [i64; N],
    writes: u64,
}

impl<const N: usize> Default for CorrectionHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> CorrectionHistory<N> {
    pub const fn new() -> Self {
        Self {
            samples: [0; N],
            writes: 0,
        }
    }

    /// Overwrite the oldest slot with `sample`.
    #[inline]
    pub fn push(&mut self, sample: i64) {
        if N == 0 {
            return;
        }
        let idx = (self.writes % N as u64) as usize;
        self.samples[idx] = sample;
        self.writes = self.writes.saturating_add(1);
    }

    /// Number of samples currently contributing to the mean: min(writes, N).
    #[inline]
    pub fn valid(&self) -> usize {
        usize::try_from(self.writes).map_or(N, |w| w.min(N))
    }

    /// Total samples ever pushed.
    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Mean of the valid samples, truncated toward zero. `None` before the first push.
    pub fn mean(&self) -> Option<i64> {
        let n = self.valid();
        if n == 0 {
            return None;
        }
        let sum: i128 = self.samples[..n].iter().map(|&s| i128::from(s)).sum();
        Some((sum / n as i128) as i64)
    }
}
