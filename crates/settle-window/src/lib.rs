//! Event-window clipping and summary statistics
//!
//! A run's operational interval is bounded by epoch markers parsed from its
//! log. This crate restricts series to that interval (with an explicit,
//! logged fallback when the export misses the window) and computes the
//! per-window summary statistics the reporter persists.
//!
//! # Example
//!
//! ```rust
//! use settle_core::TimeSeries;
//! use settle_window::{clip_default, window_stats, EventWindow};
//!
//! let series = TimeSeries::from_pairs((0..10).map(|i| (1.6e9 + i as f64, 1.0))).unwrap();
//! let window = EventWindow::new(1_600_000_002, 1_600_000_005).unwrap();
//!
//! let (clipped, outcome) = clip_default(&series, &window);
//! assert!(outcome.was_clipped());
//!
//! let stats = window_stats(&clipped.relative_to(1.6e9));
//! assert_eq!(stats.mean, 1.0);
//! assert_eq!(stats.auc, 3.0);
//! ```

mod clip;
mod stats;
mod window;

pub use clip::{clip, clip_default, ClipOutcome, DEFAULT_MIN_POINTS};
pub use stats::{auc, window_stats, WindowStats};
pub use window::EventWindow;

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use settle_core::TimeSeries;

    proptest! {
        // The clipper never returns an empty series with the default
        // minimum: either the window kept enough samples or the fallback
        // returned the original.
        #[test]
        fn prop_clip_never_empties_a_series(
            n in 1usize..40,
            start in 0i64..1000,
            len in 0i64..1000,
        ) {
            let series = TimeSeries::from_pairs(
                (0..n).map(|i| (i as f64, i as f64)),
            ).unwrap();
            let window = EventWindow::new(start, start + len).unwrap();
            let (clipped, _) = clip_default(&series, &window);
            prop_assert!(!clipped.is_empty());
        }

        // Every sample of a successful clip lies inside the window.
        #[test]
        fn prop_clipped_samples_inside_window(
            n in 4usize..60,
            start in -20i64..80,
            len in 0i64..80,
        ) {
            let series = TimeSeries::from_pairs(
                (0..n).map(|i| (i as f64, i as f64)),
            ).unwrap();
            let window = EventWindow::new(start, start + len).unwrap();
            let (clipped, outcome) = clip_default(&series, &window);
            if outcome.was_clipped() {
                for (t, _) in clipped.iter() {
                    prop_assert!(window.contains(t));
                }
            }
        }
    }
}
