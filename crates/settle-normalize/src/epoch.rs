//! Numeric time-column heuristics
//!
//! Numeric time columns arrive as epoch seconds, milliseconds, microseconds,
//! offsets from the run start, or epochs recorded by a clock set to a
//! different timezone. The magnitude of the median disambiguates the unit;
//! the run's reference epoch disambiguates the rest.

use settle_core::utils::nan_median;
use tracing::debug;

use crate::options::NormalizeOptions;

/// Median above this is interpreted as microseconds since the epoch
pub const MICROSECONDS_MEDIAN: f64 = 1e14;

/// Median above this (and below the microseconds bound) is milliseconds
pub const MILLISECONDS_MEDIAN: f64 = 1e11;

/// A maximum this far below any plausible epoch marks an offset-from-start
/// column
pub const OFFSET_FROM_START_MAX: f64 = 1e7;

/// First-sample distance from the reference epoch beyond which a whole-hour
/// clock misalignment is assumed
pub const HOUR_MISALIGNMENT_MIN: f64 = 3000.0;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Convert an already-coerced numeric time column to epoch seconds
///
/// Non-finite entries pass through as NaN. Applied in order: unit scaling
/// by median magnitude, offset-from-start re-anchoring, then whole-hour
/// misalignment correction (the latter two only when a reference epoch is
/// configured).
pub fn numeric_epoch_seconds(mut values: Vec<f64>, opts: &NormalizeOptions) -> Vec<f64> {
    let median = nan_median(&values);
    if median > MICROSECONDS_MEDIAN {
        debug!(median, "time column scaled from microseconds to seconds");
        for v in &mut values {
            *v /= 1e6;
        }
    } else if median > MILLISECONDS_MEDIAN {
        debug!(median, "time column scaled from milliseconds to seconds");
        for v in &mut values {
            *v /= 1e3;
        }
    }

    let Some(reference) = opts.reference_epoch else {
        return values;
    };

    let max = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NAN, f64::max);
    if max.is_finite() && max < OFFSET_FROM_START_MAX {
        debug!(max, reference, "time column re-anchored from offset-from-start");
        for v in &mut values {
            *v += reference;
        }
        return values;
    }

    if opts.fix_hour_offset {
        if let Some(first) = values.iter().copied().find(|v| v.is_finite()) {
            let delta = first - reference;
            if delta.abs() > HOUR_MISALIGNMENT_MIN {
                let offset = (delta / SECONDS_PER_HOUR).round() * SECONDS_PER_HOUR;
                if offset != 0.0 {
                    debug!(
                        offset,
                        first, reference, "whole-hour clock misalignment corrected"
                    );
                    for v in &mut values {
                        *v -= offset;
                    }
                }
            }
        }
    }

    values
}
