//! Joint stability detection across multiple metrics
//!
//! Declares "idle recovered" only when every metric is simultaneously
//! near its own baseline for a sustained run of samples.

use settle_core::TimeSeries;

use crate::config::ConvergenceConfig;
use crate::plateau::plateau_threshold;
use crate::resample::resample_onto;

/// Joint convergence time for series already on one common grid
///
/// Each series gets its own plateau value and threshold, computed exactly
/// as in [`crate::plateau_time`]. A sliding window of `consecutive`
/// samples scans the grid; convergence is declared at the first index
/// where every series keeps all `consecutive` samples finite and at or
/// below its own threshold. Ties resolve to the earliest index; any NaN
/// in any series' window disqualifies that index.
///
/// Returns NaN when the grid is shorter than the minimum, any series'
/// threshold cannot be computed, or no window qualifies.
pub fn stable_time_on_grid(
    grid: &[f64],
    series_values: &[Vec<f64>],
    config: &ConvergenceConfig,
) -> f64 {
    let n = grid.len();
    if series_values.is_empty() || config.consecutive == 0 || n < config.min_stable_len() {
        return f64::NAN;
    }

    let mut thresholds = Vec::with_capacity(series_values.len());
    for values in series_values {
        if values.len() != n {
            return f64::NAN;
        }
        match plateau_threshold(values, config) {
            Some(threshold) => thresholds.push(threshold),
            None => return f64::NAN,
        }
    }

    for i in 0..=(n - config.consecutive) {
        let all_in_band = series_values.iter().zip(&thresholds).all(|(values, &thr)| {
            values[i..i + config.consecutive]
                .iter()
                .all(|v| v.is_finite() && *v <= thr)
        });
        if all_in_band {
            return grid[i];
        }
    }
    f64::NAN
}

/// Joint convergence time for series on potentially different time grids
///
/// Companions are linearly resampled onto the reference series' grid (see
/// [`resample_onto`]), then scanned jointly with [`stable_time_on_grid`].
/// All series must share the reference's time anchor.
pub fn stable_time(
    reference: &TimeSeries,
    companions: &[&TimeSeries],
    config: &ConvergenceConfig,
) -> f64 {
    let grid = reference.times();
    let mut on_grid = Vec::with_capacity(companions.len() + 1);
    on_grid.push(reference.values().to_vec());
    for companion in companions {
        on_grid.push(resample_onto(grid, companion));
    }
    stable_time_on_grid(grid, &on_grid, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn step_series(n: usize, settle_at: usize) -> TimeSeries {
        TimeSeries::from_pairs(
            (0..n).map(|i| (i as f64, if i < settle_at { 100.0 } else { 0.0 })),
        )
        .unwrap()
    }

    #[test]
    fn test_joint_waits_for_slowest_series() {
        let a = step_series(30, 5);
        let b = step_series(30, 15);
        let config = ConvergenceConfig::default();

        assert_relative_eq!(stable_time(&a, &[&b], &config), 15.0);
        // Symmetric: reference choice does not change the answer on a
        // shared grid
        assert_relative_eq!(stable_time(&b, &[&a], &config), 15.0);
    }

    #[test]
    fn test_single_series_matches_its_own_settling() {
        let a = step_series(30, 7);
        let t = stable_time(&a, &[], &ConvergenceConfig::default());
        assert_relative_eq!(t, 7.0);
    }

    #[test]
    fn test_debounce_rejects_transient_dip() {
        let n = 32;
        let values: Vec<f64> = (0..n)
            .map(|i| {
                if i == 5 {
                    0.0
                } else if i < 20 {
                    100.0
                } else {
                    0.0
                }
            })
            .collect();
        let times: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let series = TimeSeries::new(times, values).unwrap();

        let t = stable_time(&series, &[], &ConvergenceConfig::default());
        assert_relative_eq!(t, 20.0);
    }

    #[test]
    fn test_nan_window_disqualifies_index() {
        let mut values: Vec<f64> = (0..30).map(|i| if i < 15 { 100.0 } else { 0.0 }).collect();
        values[16] = f64::NAN;
        let times: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let series = TimeSeries::new(times, values).unwrap();

        let t = stable_time(&series, &[], &ConvergenceConfig::default());
        assert_relative_eq!(t, 17.0);
    }

    #[test]
    fn test_companion_on_coarser_grid_is_resampled() {
        let reference = step_series(30, 5);
        // Companion sampled every 3 seconds, settling around t=15
        let companion = TimeSeries::from_pairs(
            (0..10).map(|i| (3.0 * i as f64, if 3 * i < 15 { 100.0 } else { 0.0 })),
        )
        .unwrap();

        let t = stable_time(&reference, &[&companion], &ConvergenceConfig::default());
        assert!(t.is_finite());
        assert!(t >= 15.0, "joint convergence at {t}, before companion settled");
    }

    #[test]
    fn test_short_grid_is_nan() {
        let a = step_series(8, 2);
        assert!(stable_time(&a, &[], &ConvergenceConfig::default()).is_nan());
    }

    #[test]
    fn test_two_finite_samples_is_nan() {
        let a = TimeSeries::new(vec![0.0, 1.0], vec![1.0, 1.0]).unwrap();
        assert!(stable_time(&a, &[], &ConvergenceConfig::default()).is_nan());
    }

    #[test]
    fn test_unresamplable_companion_is_nan() {
        let reference = step_series(30, 5);
        let companion = TimeSeries::new(vec![0.0], vec![f64::NAN]).unwrap();
        assert!(stable_time(&reference, &[&companion], &ConvergenceConfig::default()).is_nan());
    }

    #[test]
    fn test_never_jointly_stable_is_nan() {
        // Reference settles, companion oscillates between 0 and far above
        // its threshold so no debounced window ever qualifies
        let reference = step_series(30, 5);
        let companion = TimeSeries::from_pairs(
            (0..30).map(|i| (i as f64, if i % 2 == 0 { 100.0 } else { 0.0 })),
        )
        .unwrap();
        assert!(stable_time(&reference, &[&companion], &ConvergenceConfig::default()).is_nan());
    }

    #[test]
    fn test_mismatched_lengths_on_grid_is_nan() {
        let grid: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let t = stable_time_on_grid(
            &grid,
            &[vec![0.0; 20], vec![0.0; 19]],
            &ConvergenceConfig::default(),
        );
        assert!(t.is_nan());
    }
}
