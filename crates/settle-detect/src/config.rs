//! Convergence detection parameters

use serde::Serialize;

/// Parameters shared by [`crate::plateau_time`] and [`crate::stable_time`]
///
/// The defaults are the values used throughout the benchmarking harness;
/// pass the struct explicitly rather than hard-coding per call site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConvergenceConfig {
    /// Samples from the end of the series whose median estimates the
    /// plateau (robust against trailing noise, unlike a mean)
    pub tail_window: usize,

    /// Tolerance band half-width as a fraction of the initial-to-plateau
    /// span
    pub tolerance_ratio: f64,

    /// Sustained in-tolerance samples required before declaring
    /// convergence, rejecting single-sample noise dips
    pub consecutive: usize,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            tail_window: 12,
            tolerance_ratio: 0.05,
            consecutive: 3,
        }
    }
}

impl ConvergenceConfig {
    /// Tighter tolerance and longer debounce, for low-noise metrics
    pub fn strict() -> Self {
        Self {
            tail_window: 20,
            tolerance_ratio: 0.02,
            consecutive: 5,
        }
    }

    /// Looser tolerance and shorter debounce, for noisy metrics
    pub fn relaxed() -> Self {
        Self {
            tail_window: 8,
            tolerance_ratio: 0.10,
            consecutive: 2,
        }
    }

    /// Minimum series length [`crate::plateau_time`] requires
    pub fn min_plateau_len(&self) -> usize {
        self.tail_window.max(3)
    }

    /// Minimum grid length [`crate::stable_time`] requires
    pub fn min_stable_len(&self) -> usize {
        self.tail_window.max(self.consecutive + 1)
    }
}
