//! settle-stats: time-series normalization and event-window convergence
//! analysis for cluster benchmark runs
//!
//! A benchmarking harness repeatedly measures node resource usage (CPU,
//! RAM, disk, network) during scripted operational events and wants, per
//! run: summary statistics over the event window and the time at which the
//! node settled back to baseline. The monitoring exports feeding this are
//! messy: time columns arrive as epoch seconds, milliseconds, microseconds,
//! datetime strings, or clock-shifted epochs, and column names vary by
//! collection tool version. This workspace normalizes that mess and runs
//! the convergence analysis on top of it.
//!
//! Everything is a pure transformation from in-memory tables to scalars;
//! file retrieval, log parsing, plotting, and report writing stay with the
//! caller.
//!
//! # Pipeline
//!
//! ```rust
//! use settle_stats::{
//!     clip_default, extract, normalize_table, plateau_time, window_stats,
//!     ConvergenceConfig, EventWindow, MetricFamily, NormalizeOptions, RawTable,
//! };
//!
//! let csv = "\
//! time,used
//! 1600000000,100
//! 1600000001,50
//! 1600000002,25
//! 1600000003,12
//! 1600000004,6
//! 1600000005,3
//! 1600000006,2
//! 1600000007,2
//! 1600000008,2
//! 1600000009,2
//! 1600000010,2
//! 1600000011,2
//! 1600000012,2
//! 1600000013,2
//! ";
//! let start_epoch = 1_600_000_000i64;
//!
//! let table = RawTable::from_csv_str(csv).unwrap();
//! let normalized =
//!     normalize_table(&table, &NormalizeOptions::with_reference_epoch(start_epoch)).unwrap();
//!
//! let ram = extract(&normalized, MetricFamily::Ram).unwrap();
//! let series = ram.to_series(&normalized).unwrap();
//!
//! let window = EventWindow::new(start_epoch, start_epoch + 13).unwrap();
//! let (clipped, _) = clip_default(&series, &window);
//! let relative = clipped.relative_to(start_epoch as f64);
//!
//! let stats = window_stats(&relative);
//! assert_eq!(stats.peak, 100.0);
//!
//! let release_latency = plateau_time(&relative, &ConvergenceConfig::default());
//! assert!(release_latency.is_finite());
//! ```

pub use settle_core::{
    coerce_cell, utils, Error, NormalizedTable, RawColumn, RawTable, Result, TimeSeries,
};
pub use settle_detect::{
    plateau_time, resample_onto, stable_time, stable_time_on_grid, ConvergenceConfig,
};
pub use settle_extract::{extract, Extraction, MetricFamily, Provenance, UnitRescale};
pub use settle_normalize::{
    normalize_table, normalize_time_column, parse_datetime_cell, NormalizeOptions,
};
pub use settle_window::{
    auc, clip, clip_default, window_stats, ClipOutcome, EventWindow, WindowStats,
    DEFAULT_MIN_POINTS,
};
