//! Single-series plateau detection
//!
//! Finds when a metric settles after a perturbation, e.g. memory released
//! after a workload is torn down.

use settle_core::utils::nan_median;
use settle_core::TimeSeries;

use crate::config::ConvergenceConfig;

/// Plateau value and tolerance threshold for one series
///
/// Shared between [`plateau_time`] and the joint detector, which computes
/// it per series since different metrics have different baselines and
/// noise scales.
pub(crate) fn plateau_threshold(values: &[f64], config: &ConvergenceConfig) -> Option<f64> {
    let n = values.len();
    if n < config.min_plateau_len() {
        return None;
    }
    let tail = &values[n - config.tail_window.min(n)..];
    let plateau = nan_median(tail);
    let initial = values[0];
    if !plateau.is_finite() || !initial.is_finite() {
        return None;
    }
    let span = (initial - plateau).abs();
    Some(plateau + config.tolerance_ratio * span)
}

/// Time at which a series first reaches its own tail-median plateau
///
/// The plateau is the median of the last `tail_window` samples; the
/// threshold sits `tolerance_ratio` of the initial-to-plateau span above
/// it. Returns the time of the first finite sample at or below the
/// threshold, in whatever anchor the series carries, or NaN when the
/// series is too short, its tail or first sample is not finite, or no
/// sample qualifies.
///
/// One-sided: detects decay toward the plateau from above. A metric that
/// overshoots below its baseline and approaches from below is not
/// specially handled.
pub fn plateau_time(series: &TimeSeries, config: &ConvergenceConfig) -> f64 {
    let Some(threshold) = plateau_threshold(series.values(), config) else {
        return f64::NAN;
    };
    for (t, v) in series.iter() {
        if v.is_finite() && v <= threshold {
            return t;
        }
    }
    f64::NAN
}
