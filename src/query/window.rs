//! Date windows and date input parsing
//!
//! "The most recent year of data" is a span of 365.25 days ending at the
//! close of the latest observation date. Only calendar days lying wholly
//! inside that span belong to the window, so the fractional boundary is
//! rounded up to the next midnight.

use crate::query::error::{QueryError, QueryResult};
use crate::store::{Session, DATE_FORMAT};
use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Length of the lookback span in days
pub const LOOKBACK_DAYS: f64 = 365.25;

/// The most recent year of data, both bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window of [`LOOKBACK_DAYS`] ending with the whole of `end`
    pub fn ending_at(end: NaiveDate) -> QueryResult<Self> {
        let close = end
            .succ_opt()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| QueryError::DateOutOfRange(format!("no day after {}", end)))?;

        let lookback = Duration::minutes((LOOKBACK_DAYS * 24.0 * 60.0) as i64);
        let boundary = close
            .checked_sub_signed(lookback)
            .ok_or_else(|| QueryError::DateOutOfRange(format!("{} days before {}", LOOKBACK_DAYS, end)))?;

        let start = first_whole_day(boundary)
            .ok_or_else(|| QueryError::DateOutOfRange(format!("no day after {}", boundary)))?;

        Ok(Self { start, end })
    }

    /// Whether `date` falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// First midnight at or after `instant`
fn first_whole_day(instant: NaiveDateTime) -> Option<NaiveDate> {
    if instant.time().num_seconds_from_midnight() == 0 && instant.time().nanosecond() == 0 {
        Some(instant.date())
    } else {
        instant.date().succ_opt()
    }
}

/// Resolve the window for the store's current content
///
/// Fails with [`QueryError::EmptyDataset`] when there are no observations.
pub fn resolve_date_window(session: &Session) -> QueryResult<DateWindow> {
    let latest = session.latest_date()?.ok_or(QueryError::EmptyDataset)?;
    let window = DateWindow::ending_at(latest)?;
    tracing::debug!(start = %window.start, end = %window.end, "Resolved date window");
    Ok(window)
}

/// Parse a caller-supplied date
///
/// Only the canonical zero-padded form is accepted, since stored dates
/// are compared as text.
pub fn parse_iso_date(input: &str) -> QueryResult<NaiveDate> {
    let date = NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| QueryError::MalformedDate(input.to_string()))?;

    if date.format(DATE_FORMAT).to_string() != input {
        return Err(QueryError::MalformedDate(input.to_string()));
    }

    Ok(date)
}
