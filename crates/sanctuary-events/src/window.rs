//! Query windows for occurrence lookups.

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::Serialize;

use crate::error::{EventError, EventResult};

/// The `[start, end]` range a caller wants occurrences for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl QueryWindow {
    /// ## Summary
    /// Fills in missing boundaries: `start` defaults to `now`, `end` defaults
    /// to `lookahead` calendar months after `start`. A window may span at
    /// most `horizon` calendar months.
    ///
    /// ## Errors
    /// Returns `EventError::InvalidWindow` if `start` is after `end` or the
    /// window is longer than `horizon` months, and `EventError::DateOutOfRange`
    /// if the default end cannot be represented.
    pub fn resolve(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
        lookahead: u32,
        horizon: u32,
    ) -> EventResult<Self> {
        let start = start.unwrap_or(now);
        let end = match end {
            Some(end) => end,
            None => start
                .checked_add_months(Months::new(lookahead))
                .ok_or(EventError::DateOutOfRange("default window end"))?,
        };

        if start > end {
            return Err(EventError::InvalidWindow(format!(
                "start {} is after end {}",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }

        // Past the representable range every end is within the horizon.
        if let Some(limit) = start.checked_add_months(Months::new(horizon))
            && end > limit
        {
            return Err(EventError::InvalidWindow(format!(
                "{} to {} spans more than {horizon} months",
                start.to_rfc3339(),
                end.to_rfc3339()
            )));
        }

        Ok(Self { start, end })
    }
}

/// ## Summary
/// Parses a window boundary given either as an RFC 3339 timestamp or as a
/// plain `YYYY-MM-DD` date (midnight UTC).
///
/// ## Errors
/// Returns `EventError::InvalidTimestamp` if neither form matches.
pub fn parse_boundary(value: &str) -> EventResult<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| EventError::InvalidTimestamp(value.to_string()))
}
