//! Normalization options

use chrono_tz::Tz;

/// Options controlling time-column normalization
///
/// Exports in this domain come from heterogeneous collection tools and
/// machine clocks, so the normalizer is configured with the run's known
/// anchors rather than a fixed schema.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOptions {
    /// The run's start epoch, when known from the run log
    ///
    /// Used to recognize offset-from-start columns and whole-hour timezone
    /// misalignment. `None` disables both corrections.
    pub reference_epoch: Option<f64>,

    /// Timezone assumed for naive datetime strings
    pub assume_tz: Tz,

    /// Whether to correct whole-hour clock misalignment against
    /// `reference_epoch`
    pub fix_hour_offset: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            reference_epoch: None,
            assume_tz: chrono_tz::Asia::Seoul,
            fix_hour_offset: true,
        }
    }
}

impl NormalizeOptions {
    /// Options anchored to a run's start epoch
    pub fn with_reference_epoch(epoch: i64) -> Self {
        Self {
            reference_epoch: Some(epoch as f64),
            ..Self::default()
        }
    }

    /// Override the timezone assumed for naive datetime strings
    pub fn assume_tz(mut self, tz: Tz) -> Self {
        self.assume_tz = tz;
        self
    }

    /// Disable the whole-hour misalignment correction
    pub fn without_hour_fix(mut self) -> Self {
        self.fix_hour_offset = false;
        self
    }
}
