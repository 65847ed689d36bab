use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;
use std::fmt;

/// The first `seconds` of a capture, measured from its earliest timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CutoffWindow {
    seconds: u64,
}

impl CutoffWindow {
    pub const fn from_secs(seconds: u64) -> Self {
        Self { seconds }
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Inclusive on both ends: `[earliest, earliest + seconds]`.
    pub fn contains(&self, earliest: DateTime<Utc>, ts: DateTime<Utc>) -> bool {
        if ts < earliest {
            return false;
        }

        let span = i64::try_from(self.seconds)
            .ok()
            .and_then(TimeDelta::try_seconds);

        match span.and_then(|span| earliest.checked_add_signed(span)) {
            Some(end) => ts <= end,
            // Wider than chrono can represent.
            None => true,
        }
    }
}

impl fmt::Display for CutoffWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.seconds)
    }
}
