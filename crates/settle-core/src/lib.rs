//! Core types and utilities for benchmark run analysis
//!
//! This crate provides the shared vocabulary of the settle-stats workspace:
//! raw and normalized monitoring-export tables, the [`TimeSeries`] type all
//! statistics operate on, the unified [`Error`] type, and NaN-aware slice
//! reductions.
//!
//! # Example
//!
//! ```rust
//! use settle_core::{RawTable, TimeSeries, utils};
//!
//! let table = RawTable::from_csv_str("time,used\n100,40\n101,40\n").unwrap();
//! assert_eq!(table.time_column_index(), 0);
//!
//! let series = TimeSeries::new(vec![100.0, 101.0], vec![40.0, 40.0]).unwrap();
//! assert_eq!(utils::nan_mean(series.values()), 40.0);
//! ```

pub mod error;
pub mod series;
pub mod table;
pub mod utils;

pub use error::{Error, Result};
pub use series::TimeSeries;
pub use table::{coerce_cell, NormalizedTable, RawColumn, RawTable};
