//! Whole-table normalization pipeline
//!
//! Mirrors what every analysis does to a monitoring export before deriving
//! a metric: resolve the time column, normalize it to epoch seconds, drop
//! rows whose time failed to parse, sort rows by time, and coerce the value
//! columns to f64.

use settle_core::{Error, NormalizedTable, RawTable, Result};
use tracing::debug;

use crate::column::normalize_time_column;
use crate::options::NormalizeOptions;

/// Normalize a raw export into a [`NormalizedTable`]
///
/// Value columns that contain no numeric cell at all are dropped; a table
/// left with no value columns is a broken export and fails loudly.
pub fn normalize_table(table: &RawTable, opts: &NormalizeOptions) -> Result<NormalizedTable> {
    let time_idx = table.time_column_index();
    let times = normalize_time_column(&table.columns()[time_idx], opts)?;

    let mut order: Vec<usize> = (0..times.len()).filter(|&i| times[i].is_finite()).collect();
    let dropped = times.len() - order.len();
    if dropped > 0 {
        debug!(dropped, "rows dropped for unparsable time");
    }
    order.sort_by(|&a, &b| times[a].total_cmp(&times[b]));

    let sorted_times: Vec<f64> = order.iter().map(|&i| times[i]).collect();

    let mut columns = Vec::new();
    for (idx, column) in table.columns().iter().enumerate() {
        if idx == time_idx {
            continue;
        }
        let coerced = column.coerce_numeric();
        let values: Vec<f64> = order.iter().map(|&i| coerced[i]).collect();
        if values.iter().any(|v| v.is_finite()) {
            columns.push((column.name().to_string(), values));
        } else {
            debug!(column = column.name(), "non-numeric column dropped");
        }
    }

    if columns.is_empty() {
        return Err(Error::InvalidInput(format!(
            "table has no numeric value columns (found {:?})",
            table
                .columns()
                .iter()
                .map(|c| c.name().to_string())
                .collect::<Vec<_>>()
        )));
    }

    NormalizedTable::new(sorted_times, columns)
}
