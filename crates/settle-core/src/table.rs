//! Raw and normalized monitoring-export tables
//!
//! [`RawTable`] is the row-oriented export exactly as the collection tool
//! wrote it: named columns of text cells, one of which holds time in some
//! representation. [`NormalizedTable`] is the cleaned form every analysis
//! consumes: epoch-second times plus f64 value columns, NaN-time rows
//! dropped, rows sorted by time.
//!
//! Retrieval of export files from the filesystem is a caller concern; the
//! CSV constructors here only parse already-loaded text (netdata exports
//! use `#` comment lines and sometimes quote their header names).

use std::io::Read;

use crate::error::{Error, Result};
use crate::series::TimeSeries;

/// Column names recognized as the time column, checked case-insensitively
/// before falling back to the first column.
const TIME_COLUMN_NAMES: &[&str] = &["time", "timestamp", "datetime", "date"];

/// A single named column of raw text cells
#[derive(Debug, Clone, PartialEq)]
pub struct RawColumn {
    name: String,
    cells: Vec<String>,
}

impl RawColumn {
    /// Create a column, trimming whitespace and surrounding quotes from the
    /// name
    pub fn new(name: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            name: clean_header(&name.into()),
            cells,
        }
    }

    /// Column name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw cells
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the column has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Coerce every cell to f64, NaN where parsing fails
    pub fn coerce_numeric(&self) -> Vec<f64> {
        self.cells.iter().map(|c| coerce_cell(c)).collect()
    }

    /// Fraction of cells that coerce to a finite number (0.0 for an empty
    /// column)
    pub fn numeric_fraction(&self) -> f64 {
        if self.cells.is_empty() {
            return 0.0;
        }
        let ok = self
            .cells
            .iter()
            .filter(|c| coerce_cell(c).is_finite())
            .count();
        ok as f64 / self.cells.len() as f64
    }
}

/// Parse one raw cell as f64; empty or unparsable cells become NaN
pub fn coerce_cell(cell: &str) -> f64 {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn clean_header(name: &str) -> String {
    name.trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim()
        .to_string()
}

/// A monitoring export as written: named text columns of equal length
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    columns: Vec<RawColumn>,
}

impl RawTable {
    /// Build a table from columns, validating that lengths agree
    pub fn new(columns: Vec<RawColumn>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::InvalidInput("table has no columns".to_string()));
        }
        let rows = columns[0].len();
        for col in &columns[1..] {
            if col.len() != rows {
                return Err(Error::length_mismatch(rows, col.len(), col.name()));
            }
        }
        Ok(Self { columns })
    }

    /// Parse CSV text into a table
    ///
    /// Lines starting with `#` are skipped and header names are cleaned of
    /// whitespace and surrounding quotes.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        Self::from_csv_reader(text.as_bytes())
    }

    /// Parse CSV from any reader into a table
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(clean_header)
            .collect();
        if headers.is_empty() {
            return Err(Error::InvalidInput("CSV has no header row".to_string()));
        }

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in rdr.records() {
            let record = record?;
            for (i, column) in cells.iter_mut().enumerate() {
                column.push(record.get(i).unwrap_or("").to_string());
            }
        }

        let columns = headers
            .into_iter()
            .zip(cells)
            .map(|(name, cells)| RawColumn::new(name, cells))
            .collect();
        Self::new(columns)
    }

    /// All columns in export order
    pub fn columns(&self) -> &[RawColumn] {
        &self.columns
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.columns[0].len()
    }

    /// Look up a column by exact name (case-insensitive)
    pub fn column(&self, name: &str) -> Option<&RawColumn> {
        self.columns
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Index of the designated time column
    ///
    /// Checks the conventional names first, then falls back to the first
    /// column, matching how heterogeneous collection tools label time.
    pub fn time_column_index(&self) -> usize {
        for candidate in TIME_COLUMN_NAMES {
            if let Some(idx) = self
                .columns
                .iter()
                .position(|c| c.name().eq_ignore_ascii_case(candidate))
            {
                return idx;
            }
        }
        0
    }
}

/// A cleaned table: epoch-second times plus numeric value columns
///
/// Rows are sorted ascending by time and rows whose time failed to
/// normalize have been dropped. Produced by the normalizer, consumed by
/// the metric extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    times: Vec<f64>,
    columns: Vec<(String, Vec<f64>)>,
}

impl NormalizedTable {
    /// Build a normalized table, validating column lengths against the time
    /// axis
    pub fn new(times: Vec<f64>, columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        for (name, values) in &columns {
            if values.len() != times.len() {
                return Err(Error::length_mismatch(times.len(), values.len(), name));
            }
        }
        Ok(Self { times, columns })
    }

    /// Epoch-second time axis, ascending
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Value columns in export order
    pub fn columns(&self) -> &[(String, Vec<f64>)] {
        &self.columns
    }

    /// Names of the value columns
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of rows
    pub fn n_rows(&self) -> usize {
        self.times.len()
    }

    /// Pair a derived value column with this table's time axis
    pub fn to_series(&self, values: Vec<f64>) -> Result<TimeSeries> {
        TimeSeries::new(self.times.clone(), values)
    }
}
