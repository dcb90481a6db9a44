//! Types describing metric families and extraction outcomes

use std::fmt;

use serde::Serialize;
use settle_core::{NormalizedTable, Result, TimeSeries};

/// The semantic metric families an export can represent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricFamily {
    /// CPU busy percent
    Cpu,
    /// RAM used (canonical unit MiB)
    Ram,
    /// Disk utilization percent
    DiskUtil,
    /// Disk read+write rate (canonical unit KB/s)
    DiskIo,
    /// Network receive rate
    NetRx,
    /// Network transmit rate
    NetTx,
}

impl MetricFamily {
    /// Stable name used in errors and reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Ram => "ram",
            Self::DiskUtil => "disk_util",
            Self::DiskIo => "disk_io",
            Self::NetRx => "net_rx",
            Self::NetTx => "net_tx",
        }
    }
}

impl fmt::Display for MetricFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which extraction rule fired, so consumers can distinguish confident
/// keyword matches from best-effort positional fallbacks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Provenance {
    /// A column name matched a family keyword
    Keyword {
        column: String,
        keyword: &'static str,
    },
    /// The series was derived from several columns
    Derived {
        columns: Vec<String>,
        rule: &'static str,
    },
    /// No keyword matched; a column was taken by position
    Positional { column: String, index: usize },
}

impl Provenance {
    /// False for positional fallbacks, which real captures without
    /// descriptive column names rely on but report consumers may want to
    /// flag
    pub fn is_confident(&self) -> bool {
        !matches!(self, Self::Positional { .. })
    }
}

/// Fixed-divisor unit conversion applied by the magnitude heuristic
///
/// Best effort only: the heuristic infers the source unit from the median
/// magnitude and can misjudge exports that legitimately live at those
/// magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnitRescale {
    /// Bytes to MiB (RAM)
    BytesToMib,
    /// KiB to MiB (RAM)
    KibToMib,
    /// Bytes/s to KB/s (disk I/O)
    BytesToKb,
}

impl UnitRescale {
    /// The divisor this conversion applies
    pub fn divisor(&self) -> f64 {
        match self {
            Self::BytesToMib => 1024.0 * 1024.0,
            Self::KibToMib => 1024.0,
            Self::BytesToKb => 1024.0,
        }
    }
}

/// One extracted metric series plus how it was obtained
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    /// The requested family
    pub family: MetricFamily,
    /// Values aligned with the source table's time axis
    pub values: Vec<f64>,
    /// Which rule fired
    pub provenance: Provenance,
    /// Unit conversion applied, if any
    pub rescale: Option<UnitRescale>,
}

impl Extraction {
    /// Pair the extracted values with the table's time axis
    pub fn to_series(&self, table: &NormalizedTable) -> Result<TimeSeries> {
        table.to_series(self.values.clone())
    }
}
