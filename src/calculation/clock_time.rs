//! 12-hour clock time parsing.
//!
//! Pasted timecard fields carry times like `"8:00 AM"`, `"12:00 MN"`
//! (midnight), or `"12:00 NN"` (noon). This module anchors them to a
//! calendar date and rolls overnight clock-outs forward one day.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{EngineError, EngineResult};

const CLOCK_TIME_FORMAT: &str = "%I:%M %p";

/// Parses a 12-hour clock string into an instant on the given anchor date.
///
/// The input is trimmed and case-normalized. The aliases `"12:00 MN"` and
/// `"12:00 NN"` normalize to `"12:00 AM"` and `"12:00 PM"` respectively; any
/// other value must match `h:mm AM/PM`.
///
/// When `prior` is supplied (parsing a clock-out against its clock-in) and
/// the parsed instant is at or before `prior`, the result is rolled forward
/// one calendar day. This is how an overnight shift (in 10:00 PM, out
/// 6:00 AM) spans into the next day.
///
/// # Errors
///
/// Returns [`EngineError::InvalidClockTime`] when the string does not match
/// the expected pattern. Callers at the work-duration boundary catch this
/// and degrade the entry to zero worked hours.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_clock_time;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let clock_in = parse_clock_time("10:00 PM", date, None).unwrap();
/// let clock_out = parse_clock_time("6:00 AM", date, Some(clock_in)).unwrap();
///
/// // The clock-out rolled over to the next day.
/// assert_eq!((clock_out - clock_in).num_hours(), 8);
/// ```
pub fn parse_clock_time(
    raw: &str,
    anchor_date: NaiveDate,
    prior: Option<NaiveDateTime>,
) -> EngineResult<NaiveDateTime> {
    let normalized = normalize(raw);

    let time = NaiveTime::parse_from_str(&normalized, CLOCK_TIME_FORMAT).map_err(|_| {
        EngineError::InvalidClockTime {
            value: raw.to_string(),
        }
    })?;

    let mut instant = anchor_date.and_time(time);
    if let Some(prior) = prior {
        if instant <= prior {
            instant += Duration::days(1);
        }
    }

    Ok(instant)
}

/// Trims, uppercases, and resolves the midnight/noon aliases.
fn normalize(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    match upper.as_str() {
        "12:00 MN" => "12:00 AM".to_string(),
        "12:00 NN" => "12:00 PM".to_string(),
        _ => upper,
    }
}
