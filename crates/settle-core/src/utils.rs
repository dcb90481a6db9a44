//! NaN-aware utility functions for working with data slices
//!
//! Monitoring exports routinely contain missing samples, so every reduction
//! here skips non-finite values instead of propagating them.

/// Sort data and return a new vector
///
/// Handles NaN values by placing them at the end.
///
/// # Examples
///
/// ```rust
/// use settle_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
    sorted
}

/// Mean of the finite values in a slice
///
/// Returns NaN when no finite value is present.
pub fn nan_mean(data: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &x in data {
        if x.is_finite() {
            sum += x;
            count += 1;
        }
    }
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Maximum of the finite values in a slice
///
/// Returns NaN when no finite value is present.
pub fn nan_max(data: &[f64]) -> f64 {
    let mut max = f64::NAN;
    for &x in data {
        if x.is_finite() && !(x <= max) {
            max = x;
        }
    }
    max
}

/// Minimum of the finite values in a slice
///
/// Returns NaN when no finite value is present.
pub fn nan_min(data: &[f64]) -> f64 {
    let mut min = f64::NAN;
    for &x in data {
        if x.is_finite() && !(x >= min) {
            min = x;
        }
    }
    min
}

/// Median of the finite values in a slice
///
/// Returns NaN when no finite value is present. Even-length inputs average
/// the two central values.
///
/// # Examples
///
/// ```rust
/// use settle_core::utils::nan_median;
///
/// assert_eq!(nan_median(&[3.0, 1.0, 2.0]), 2.0);
/// assert_eq!(nan_median(&[1.0, f64::NAN, 2.0, 4.0]), 2.0);
/// ```
pub fn nan_median(data: &[f64]) -> f64 {
    let mut finite: Vec<f64> = data.iter().copied().filter(|x| x.is_finite()).collect();
    if finite.is_empty() {
        return f64::NAN;
    }
    finite.sort_by(f64::total_cmp);
    let n = finite.len();
    if n % 2 == 0 {
        (finite[n / 2 - 1] + finite[n / 2]) / 2.0
    } else {
        finite[n / 2]
    }
}

/// Count of finite values in a slice
pub fn finite_count(data: &[f64]) -> usize {
    data.iter().filter(|x| x.is_finite()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorted_places_nan_last() {
        let out = sorted(&[2.0, f64::NAN, 1.0]);
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 2.0);
        assert!(out[2].is_nan());
    }

    #[test]
    fn test_nan_mean_skips_missing() {
        assert_relative_eq!(nan_mean(&[1.0, f64::NAN, 3.0]), 2.0);
        assert!(nan_mean(&[f64::NAN, f64::NAN]).is_nan());
        assert!(nan_mean(&[]).is_nan());
    }

    #[test]
    fn test_nan_max_min() {
        assert_eq!(nan_max(&[1.0, f64::NAN, 3.0, 2.0]), 3.0);
        assert_eq!(nan_min(&[1.0, f64::NAN, 3.0, -2.0]), -2.0);
        assert!(nan_max(&[f64::NAN]).is_nan());
        assert!(nan_min(&[]).is_nan());
    }

    #[test]
    fn test_nan_median_even_odd() {
        assert_eq!(nan_median(&[5.0, 1.0, 3.0]), 3.0);
        assert_eq!(nan_median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert!(nan_median(&[f64::NAN]).is_nan());
    }

    #[test]
    fn test_finite_count() {
        assert_eq!(finite_count(&[1.0, f64::NAN, f64::INFINITY, 2.0]), 2);
    }
}
