//! Heuristic time normalization for monitoring exports
//!
//! Time columns in this domain arrive in inconsistent representations: raw
//! epoch seconds, milliseconds, microseconds, ISO datetime strings, offsets
//! from the run start, or epochs recorded by a clock set to a different
//! timezone. This crate converts any of them to UTC epoch seconds as f64,
//! self-correcting rather than requiring a fixed schema.
//!
//! # Example
//!
//! ```rust
//! use settle_core::RawTable;
//! use settle_normalize::{normalize_table, NormalizeOptions};
//!
//! let table = RawTable::from_csv_str("time,used\n1600000001,41\n1600000000,40\n").unwrap();
//! let opts = NormalizeOptions::with_reference_epoch(1_600_000_000);
//! let normalized = normalize_table(&table, &opts).unwrap();
//! assert_eq!(normalized.times(), &[1.6e9, 1.6e9 + 1.0]);
//! ```

mod column;
mod datetime;
mod epoch;
mod options;
mod table;

pub use column::{normalize_time_column, PARSE_SUCCESS_THRESHOLD};
pub use datetime::parse_datetime_cell;
pub use epoch::{
    numeric_epoch_seconds, HOUR_MISALIGNMENT_MIN, MICROSECONDS_MEDIAN, MILLISECONDS_MEDIAN,
    OFFSET_FROM_START_MAX,
};
pub use options::NormalizeOptions;
pub use table::normalize_table;
