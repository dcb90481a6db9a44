//! Datetime-string time columns
//!
//! Some collection tools export wall-clock strings instead of epochs. Naive
//! timestamps carry no zone information, so they are localized in the
//! configured assumed timezone before conversion to UTC epoch seconds.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Formats tried for naive timestamps, in order
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

fn epoch_seconds(dt: DateTime<Utc>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1e9
}

/// Parse one cell as a datetime, returning UTC epoch seconds
///
/// Zone-aware strings (RFC 3339) keep their own offset; naive strings are
/// localized in `assume_tz`. Returns `None` when no format matches or the
/// local time does not exist in `assume_tz` (DST gap).
pub fn parse_datetime_cell(cell: &str, assume_tz: Tz) -> Option<f64> {
    let s = cell.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(epoch_seconds(dt.with_timezone(&Utc)));
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            let local = assume_tz.from_local_datetime(&naive).earliest()?;
            return Some(epoch_seconds(local.with_timezone(&Utc)));
        }
    }

    None
}
