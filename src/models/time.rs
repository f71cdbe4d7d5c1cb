//! Calendar date conversions for NASA close-approach data.
//!
//! Close-approach timestamps arrive as calendar date strings such as
//! `1900-Jan-01 00:00`, occasionally without the time-of-day part. Values are
//! UTC by convention but carry no offset, so they are modeled as naive
//! datetimes throughout.

use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{NeoError, NeoResult};

/// Source format with a time-of-day component (minute precision).
const CD_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Date-only source format, interpreted as midnight UTC.
const CD_DATE_FORMAT: &str = "%Y-%b-%d";

/// Output format used everywhere a timestamp is shown or serialized.
/// The input data has no seconds, so none are emitted.
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a calendar date string into a naive UTC datetime.
///
/// Accepts both `2020-Jan-01 12:30` and `2020-Jan-01`; anything else is a
/// parse error.
pub fn cd_to_datetime(calendar_date: &str) -> NeoResult<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(calendar_date, CD_FORMAT) {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(calendar_date, CD_DATE_FORMAT)
        .map(|d| d.and_hms_opt(0, 0, 0).unwrap_or_default())
        .map_err(|_| NeoError::InvalidCalendarDate {
            value: calendar_date.to_string(),
        })
}

/// Format a datetime with minute precision, dropping seconds.
pub fn datetime_to_str(dt: NaiveDateTime) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}
