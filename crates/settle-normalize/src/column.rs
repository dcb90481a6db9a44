//! Time-column dispatch: numeric heuristics first, datetime strings second

use settle_core::{coerce_cell, Error, RawColumn, Result};

use crate::datetime::parse_datetime_cell;
use crate::epoch::numeric_epoch_seconds;
use crate::options::NormalizeOptions;

/// Fraction of cells a parse path must convert for the column to be
/// treated as that representation
pub const PARSE_SUCCESS_THRESHOLD: f64 = 0.9;

/// How many unparsable cells a [`Error::TimeParse`] carries as evidence
const ERROR_SAMPLE_LIMIT: usize = 3;

/// Normalize a raw time column to epoch seconds
///
/// Entries that fail the winning parse path come back as NaN; the caller
/// drops those rows. Fails with [`Error::TimeParse`] when neither the
/// numeric nor the datetime path reaches the success threshold.
pub fn normalize_time_column(column: &RawColumn, opts: &NormalizeOptions) -> Result<Vec<f64>> {
    if column.is_empty() {
        return Err(Error::empty_input());
    }

    let numeric = column.coerce_numeric();
    if success_fraction(&numeric) >= PARSE_SUCCESS_THRESHOLD {
        return Ok(numeric_epoch_seconds(numeric, opts));
    }

    let parsed: Vec<f64> = column
        .cells()
        .iter()
        .map(|c| parse_datetime_cell(c, opts.assume_tz).unwrap_or(f64::NAN))
        .collect();
    if success_fraction(&parsed) >= PARSE_SUCCESS_THRESHOLD {
        return Ok(parsed);
    }

    let samples = column
        .cells()
        .iter()
        .zip(&parsed)
        .filter(|(cell, t)| !t.is_finite() && !coerce_cell(cell).is_finite())
        .map(|(cell, _)| cell.clone())
        .take(ERROR_SAMPLE_LIMIT)
        .collect();
    Err(Error::TimeParse {
        column: column.name().to_string(),
        samples,
    })
}

fn success_fraction(values: &[f64]) -> f64 {
    let ok = values.iter().filter(|v| v.is_finite()).count();
    ok as f64 / values.len() as f64
}
