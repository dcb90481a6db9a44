//! Summary statistics over a windowed series

use serde::Serialize;
use settle_core::utils::{nan_max, nan_mean};
use settle_core::TimeSeries;

/// Mean, peak, and signed time-integral of one (series, window) pair
///
/// `mean` and `peak` ignore NaN samples. `auc` is the trapezoidal integral
/// in value-seconds over whatever time anchor the series carries; compare
/// it only across runs collected at comparable sampling intervals, since
/// no resampling happens before integration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowStats {
    pub mean: f64,
    pub peak: f64,
    pub auc: f64,
}

/// Compute [`WindowStats`] for a series
pub fn window_stats(series: &TimeSeries) -> WindowStats {
    WindowStats {
        mean: nan_mean(series.values()),
        peak: nan_max(series.values()),
        auc: auc(series),
    }
}

/// Trapezoidal area under the curve, in value-seconds
///
/// Pairs with a non-finite coordinate are dropped first; returns NaN when
/// fewer than two finite pairs remain. The integral is signed: samples
/// below zero subtract.
pub fn auc(series: &TimeSeries) -> f64 {
    let finite: Vec<(f64, f64)> = series
        .iter()
        .filter(|(t, v)| t.is_finite() && v.is_finite())
        .collect();
    if finite.len() < 2 {
        return f64::NAN;
    }
    let mut area = 0.0;
    for pair in finite.windows(2) {
        let (t0, v0) = pair[0];
        let (t1, v1) = pair[1];
        area += (v0 + v1) / 2.0 * (t1 - t0);
    }
    area
}
