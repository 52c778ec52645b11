//! Observation time handling.
//!
//! Station snapshots are published in fixed 5-minute buckets. An
//! [`ObservationTime`] is always aligned to the start of its bucket, so the
//! query stamp sent upstream and the label written for the front end always
//! describe the same instant.

use std::fmt;

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Width of an observation bucket in minutes.
pub const BUCKET_MINUTES: u32 = 5;

const QUERY_STAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const LABEL_FORMAT: &str = "%-I:%M %P on %B %d, %Y";

/// A bucket-aligned observation instant in station-local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObservationTime(NaiveDateTime);

impl ObservationTime {
    /// Align an arbitrary instant to the start of its bucket.
    ///
    /// Minutes are floored to the preceding multiple of [`BUCKET_MINUTES`];
    /// seconds and sub-seconds are cleared.
    pub fn bucketed(dt: NaiveDateTime) -> Self {
        let aligned = dt
            - Duration::minutes(i64::from(dt.minute() % BUCKET_MINUTES))
            - Duration::seconds(i64::from(dt.second()))
            - Duration::nanoseconds(i64::from(dt.nanosecond()));
        Self(aligned)
    }

    /// The most recent bucket boundary according to the local clock.
    pub fn now() -> Self {
        Self::bucketed(Local::now().naive_local())
    }

    /// Parse a `YYYYMMDDHHMMSS` stamp and align it to its bucket.
    pub fn from_query_stamp(s: &str) -> Result<Self, TimeParseError> {
        let s = s.trim();
        if s.len() != 14 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimeParseError::InvalidFormat(s.to_string()));
        }

        NaiveDateTime::parse_from_str(s, QUERY_STAMP_FORMAT)
            .map(Self::bucketed)
            .map_err(|_| TimeParseError::InvalidFormat(s.to_string()))
    }

    /// The underlying wall-clock instant.
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Digits-only stamp used for `t_start`/`t_end` upstream query parameters.
    pub fn query_stamp(&self) -> String {
        self.0.format(QUERY_STAMP_FORMAT).to_string()
    }

    /// Human-readable label, e.g. `3:05 pm on December 09, 2016`.
    pub fn display_label(&self) -> String {
        self.0.format(LABEL_FORMAT).to_string()
    }
}

impl fmt::Display for ObservationTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid observation stamp: {0}. Expected 'YYYYMMDDHHMMSS'")]
    InvalidFormat(String),
}
