//! Clipping a series to an event window, with an observable fallback
//!
//! Event markers sometimes fall outside the exported capture window (the
//! export may start late or end early). Rather than failing the whole run,
//! a clip that retains too few samples falls back to the unclipped series;
//! the outcome reports which happened so callers and reports can tell the
//! difference.

use serde::Serialize;
use settle_core::TimeSeries;
use tracing::warn;

use crate::window::EventWindow;

/// Minimum samples a clip must retain before the fallback fires
pub const DEFAULT_MIN_POINTS: usize = 3;

/// What the clipper actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClipOutcome {
    /// The window retained enough samples; `dropped` rows fell outside it
    Clipped { dropped: usize },
    /// Fewer than `min_points` samples fell inside the window; the
    /// original series was returned instead
    FellBack { retained: usize },
}

impl ClipOutcome {
    /// True when the window was actually applied
    pub fn was_clipped(&self) -> bool {
        matches!(self, Self::Clipped { .. })
    }
}

/// Restrict a series to an inclusive event window
///
/// Bounds are inclusive on both ends. Times stay absolute; relativization
/// to a reference epoch is a separate explicit step
/// ([`TimeSeries::relative_to`]) the caller applies consistently across
/// every series compared together.
pub fn clip(series: &TimeSeries, window: &EventWindow, min_points: usize) -> (TimeSeries, ClipOutcome) {
    let kept: Vec<(f64, f64)> = series.iter().filter(|(t, _)| window.contains(*t)).collect();

    if kept.len() < min_points {
        warn!(
            start = window.start(),
            end = window.end(),
            retained = kept.len(),
            min_points,
            "window retained too few samples, returning unclipped series"
        );
        return (
            series.clone(),
            ClipOutcome::FellBack {
                retained: kept.len(),
            },
        );
    }

    let dropped = series.len() - kept.len();
    // Source is already time-sorted, so this cannot fail
    let clipped = TimeSeries::from_pairs(kept).expect("clip of a valid series");
    (clipped, ClipOutcome::Clipped { dropped })
}

/// [`clip`] with the default minimum sample count
pub fn clip_default(series: &TimeSeries, window: &EventWindow) -> (TimeSeries, ClipOutcome) {
    clip(series, window, DEFAULT_MIN_POINTS)
}
