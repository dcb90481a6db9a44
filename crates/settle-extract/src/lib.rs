//! Metric-family extraction from normalized monitoring exports
//!
//! Column names are not standardized across metric families or collection
//! tool versions, so each family carries an explicit priority-ordered rule
//! table (keyword match, derived combination, positional fallback) and the
//! extraction reports which rule fired.
//!
//! # Example
//!
//! ```rust
//! use settle_core::NormalizedTable;
//! use settle_extract::{extract, MetricFamily};
//!
//! let table = NormalizedTable::new(
//!     vec![1.6e9, 1.6e9 + 1.0],
//!     vec![("idle".to_string(), vec![90.0, 80.0])],
//! )
//! .unwrap();
//!
//! let cpu = extract(&table, MetricFamily::Cpu).unwrap();
//! assert_eq!(cpu.values, vec![10.0, 20.0]);
//! assert!(cpu.provenance.is_confident());
//! ```

mod extract;
mod rules;
mod types;

pub use extract::extract;
pub use rules::{rules_for, Rule, Select, Transform};
pub use types::{Extraction, MetricFamily, Provenance, UnitRescale};
