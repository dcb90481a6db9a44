//! The `TimeSeries` type: (epoch_seconds, value) pairs sorted by time
//!
//! Values may be NaN (missing samples); times must be finite. Duplicate
//! timestamps are permitted and left to downstream consumers to tolerate.

use crate::error::{Error, Result};

/// An ordered sequence of (epoch_seconds, value) pairs
///
/// Construction sorts pairs ascending by time (stably, so duplicate
/// timestamps keep their input order). Times are epoch seconds as f64 until
/// [`TimeSeries::relative_to`] re-anchors them.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Build a series from parallel time/value vectors
    ///
    /// Fails when the vectors differ in length or any time entry is
    /// non-finite. Pairs are sorted ascending by time.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self> {
        if times.len() != values.len() {
            return Err(Error::length_mismatch(
                times.len(),
                values.len(),
                "time series values",
            ));
        }
        if let Some(bad) = times.iter().find(|t| !t.is_finite()) {
            return Err(Error::InvalidInput(format!(
                "non-finite timestamp in series: {bad}"
            )));
        }

        let mut order: Vec<usize> = (0..times.len()).collect();
        order.sort_by(|&a, &b| times[a].total_cmp(&times[b]));
        let sorted_times = order.iter().map(|&i| times[i]).collect();
        let sorted_values = order.iter().map(|&i| values[i]).collect();
        Ok(Self {
            times: sorted_times,
            values: sorted_values,
        })
    }

    /// Build a series from (time, value) pairs
    pub fn from_pairs<I: IntoIterator<Item = (f64, f64)>>(pairs: I) -> Result<Self> {
        let (times, values) = pairs.into_iter().unzip();
        Self::new(times, values)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the series has no samples
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time coordinates, ascending
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Value coordinates, aligned with [`TimeSeries::times`]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over (time, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// First timestamp, if any
    pub fn first_time(&self) -> Option<f64> {
        self.times.first().copied()
    }

    /// Last timestamp, if any
    pub fn last_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Re-anchor times to seconds since `anchor`
    ///
    /// The anchor must be the same for every series compared in one figure
    /// or one convergence check; samples before the anchor come out
    /// negative.
    pub fn relative_to(&self, anchor: f64) -> Self {
        Self {
            times: self.times.iter().map(|t| t - anchor).collect(),
            values: self.values.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_by_time() {
        let s = TimeSeries::new(vec![3.0, 1.0, 2.0], vec![30.0, 10.0, 20.0]).unwrap();
        assert_eq!(s.times(), &[1.0, 2.0, 3.0]);
        assert_eq!(s.values(), &[10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_duplicate_timestamps_keep_input_order() {
        let s = TimeSeries::new(vec![1.0, 1.0, 0.5], vec![10.0, 20.0, 5.0]).unwrap();
        assert_eq!(s.times(), &[0.5, 1.0, 1.0]);
        assert_eq!(s.values(), &[5.0, 10.0, 20.0]);
    }

    #[test]
    fn test_nan_values_permitted_nan_times_rejected() {
        assert!(TimeSeries::new(vec![1.0, 2.0], vec![f64::NAN, 1.0]).is_ok());
        assert!(TimeSeries::new(vec![1.0, f64::NAN], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(TimeSeries::new(vec![1.0], vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_relative_to() {
        let s = TimeSeries::new(vec![100.0, 105.0, 110.0], vec![1.0, 2.0, 3.0]).unwrap();
        let rel = s.relative_to(100.0);
        assert_eq!(rel.times(), &[0.0, 5.0, 10.0]);
        assert_eq!(rel.values(), s.values());
    }

    #[test]
    fn test_empty_series() {
        let s = TimeSeries::new(vec![], vec![]).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.first_time(), None);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Construction always yields a non-decreasing time axis,
            // whatever order the export delivered rows in.
            #[test]
            fn prop_times_non_decreasing(
                pairs in proptest::collection::vec(
                    (-1.0e9f64..1.0e9, -1.0e6f64..1.0e6),
                    0..64,
                )
            ) {
                let s = TimeSeries::from_pairs(pairs).unwrap();
                for w in s.times().windows(2) {
                    prop_assert!(w[0] <= w[1]);
                }
            }
        }
    }
}
