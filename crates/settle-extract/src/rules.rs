//! Per-family extraction rule tables
//!
//! Each family is an explicit priority-ordered list of (selection,
//! transform) rules, evaluated first match wins. New export formats are
//! supported by appending table rows, not new control flow.

use crate::types::MetricFamily;

/// How a rule picks its source column(s)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Select {
    /// First column whose name contains any keyword, case-insensitive,
    /// keywords in priority order
    Keyword(&'static [&'static str]),
    /// Every column whose name contains any keyword, summed per row
    /// (finite addends only)
    KeywordSum(&'static [&'static str]),
    /// Two keyword-selected columns combined as |a| + |b|
    KeywordPair(&'static str, &'static str),
    /// The n-th value column, regardless of name
    Position(usize),
}

/// Elementwise transform applied to the selected series
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Identity,
    /// `base - value`, e.g. busy percent from an idle column
    ComplementFrom(f64),
    /// Absolute value, for counters that report signed deltas
    Abs,
}

impl Transform {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Identity => value,
            Self::ComplementFrom(base) => base - value,
            Self::Abs => value.abs(),
        }
    }
}

/// One row of a family's rule table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub select: Select,
    pub transform: Transform,
}

/// CPU state columns summed when no idle/usage column exists
const CPU_STATES: &[&str] = &[
    "user", "system", "iowait", "nice", "irq", "softirq", "steal",
];

const CPU_RULES: &[Rule] = &[
    Rule {
        select: Select::Keyword(&["idle"]),
        transform: Transform::ComplementFrom(100.0),
    },
    Rule {
        select: Select::Keyword(&["usage"]),
        transform: Transform::Identity,
    },
    Rule {
        select: Select::KeywordSum(CPU_STATES),
        transform: Transform::Identity,
    },
];

const RAM_RULES: &[Rule] = &[
    Rule {
        select: Select::Keyword(&["used"]),
        transform: Transform::Identity,
    },
    Rule {
        select: Select::Position(0),
        transform: Transform::Identity,
    },
];

const DISK_UTIL_RULES: &[Rule] = &[
    Rule {
        select: Select::Keyword(&["util", "utilization", "busy"]),
        transform: Transform::Identity,
    },
    Rule {
        select: Select::Position(0),
        transform: Transform::Identity,
    },
];

const DISK_IO_RULES: &[Rule] = &[
    Rule {
        select: Select::KeywordPair("read", "write"),
        transform: Transform::Identity,
    },
    Rule {
        select: Select::Position(0),
        transform: Transform::Abs,
    },
];

const NET_RX_RULES: &[Rule] = &[
    Rule {
        select: Select::Keyword(&["received", "recv", "rx"]),
        transform: Transform::Abs,
    },
    Rule {
        select: Select::Position(0),
        transform: Transform::Abs,
    },
];

const NET_TX_RULES: &[Rule] = &[
    Rule {
        select: Select::Keyword(&["sent", "send", "tx"]),
        transform: Transform::Abs,
    },
    Rule {
        select: Select::Position(1),
        transform: Transform::Abs,
    },
];

/// The rule table for a family, in evaluation order
pub fn rules_for(family: MetricFamily) -> &'static [Rule] {
    match family {
        MetricFamily::Cpu => CPU_RULES,
        MetricFamily::Ram => RAM_RULES,
        MetricFamily::DiskUtil => DISK_UTIL_RULES,
        MetricFamily::DiskIo => DISK_IO_RULES,
        MetricFamily::NetRx => NET_RX_RULES,
        MetricFamily::NetTx => NET_TX_RULES,
    }
}
