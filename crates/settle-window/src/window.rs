//! The event window: an inclusive epoch interval from the run log

use serde::Serialize;
use settle_core::{Error, Result};

/// An inclusive `[start, end]` interval in integer epoch seconds
///
/// The markers come from the run log (`START_EPOCH`, `END_EPOCH`, phase
/// markers such as `DELETE_COMPLETE_EPOCH`); parsing that log is a caller
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventWindow {
    start: i64,
    end: i64,
}

impl EventWindow {
    /// Build a window, validating `start <= end`
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidParameter(format!(
                "event window start {start} after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Start epoch (inclusive)
    pub fn start(&self) -> i64 {
        self.start
    }

    /// End epoch (inclusive)
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Window length in seconds
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether an epoch-second timestamp falls inside the window
    pub fn contains(&self, t: f64) -> bool {
        t >= self.start as f64 && t <= self.end as f64
    }
}
