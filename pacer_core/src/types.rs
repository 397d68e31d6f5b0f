/// Direction for a stepped speed adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedChange {
    Increase,
    Decrease,
}

impl SpeedChange {
    #[inline]
    pub(crate) fn sign(self) -> i64 {
        match self {
            SpeedChange::Increase => 1,
            SpeedChange::Decrease => -1,
        }
    }
}
