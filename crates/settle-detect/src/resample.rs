//! Linear resampling onto a common time grid
//!
//! Joint convergence checks compare metrics sampled on different time
//! grids, so companions are interpolated onto one reference grid first.

use settle_core::TimeSeries;

/// Interpolate a series onto an arbitrary time grid
///
/// Non-finite (time, value) pairs are dropped before interpolation and the
/// remainder sorted by time. Grid points outside the source range clamp to
/// the endpoint values. A source with fewer than two finite pairs cannot
/// be interpolated and resamples to all-NaN.
pub fn resample_onto(grid: &[f64], series: &TimeSeries) -> Vec<f64> {
    let mut finite: Vec<(f64, f64)> = series
        .iter()
        .filter(|(t, v)| t.is_finite() && v.is_finite())
        .collect();
    if finite.len() < 2 {
        return vec![f64::NAN; grid.len()];
    }
    finite.sort_by(|a, b| a.0.total_cmp(&b.0));

    grid.iter().map(|&g| interp_at(&finite, g)).collect()
}

fn interp_at(points: &[(f64, f64)], g: f64) -> f64 {
    if !g.is_finite() {
        return f64::NAN;
    }
    let (first_t, first_v) = points[0];
    let (last_t, last_v) = points[points.len() - 1];
    if g <= first_t {
        return first_v;
    }
    if g >= last_t {
        return last_v;
    }

    // First point strictly past g; partition_point keeps duplicates stable
    let hi = points.partition_point(|&(t, _)| t <= g);
    let (t0, v0) = points[hi - 1];
    let (t1, v1) = points[hi];
    if t1 == t0 {
        return v0;
    }
    v0 + (v1 - v0) * (g - t0) / (t1 - t0)
}
