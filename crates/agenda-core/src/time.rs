//! Time-of-day parsing.
//!
//! Users may type a bare hour (`15`, `3 pm`) or a fully qualified time
//! (`15:00`, `3:00 pm`). The bare-hour shapes are tried first; when the
//! hour does not fit them the whole input is handed to a generic parser.
//! All results have minute precision.

use chrono::{Local, NaiveTime, Timelike};

use crate::error::{Error, Result};

/// Formats accepted once the bare-hour shapes have been abandoned.
const FALLBACK_FORMATS: [&str; 3] = ["%H:%M", "%I:%M %p", "%I:%M%p"];

/// Compact 24-hour form, only tried on exactly four digits.
const COMPACT_FORMAT: &str = "%H%M";

/// Parses a time relative to the local current time.
pub fn parse_time(text: &str) -> Result<NaiveTime> {
    parse_time_at(text, Local::now().time())
}

/// Parses a time, returning `now` truncated to the minute for blank input.
pub fn parse_time_at(text: &str, now: NaiveTime) -> Result<NaiveTime> {
    let input = text.trim();
    if input.is_empty() {
        return Ok(truncate_to_minute(now));
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let attempt = match tokens.as_slice() {
        [hour, meridiem] => try_twelve_hour(input, hour, meridiem)?,
        [hour] => try_twenty_four_hour(hour),
        _ => return Err(Error::time(input)),
    };

    match attempt {
        Some(time) => Ok(time),
        None => {
            tracing::debug!(input, "bare hour did not fit, trying generic time formats");
            fallback_generic(input)
        }
    }
}

/// Drops seconds and sub-second precision.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

/// `H AM|PM`. Returns `Ok(None)` when the hour is not an integer in 0..=12.
fn try_twelve_hour(input: &str, hour: &str, meridiem: &str) -> Result<Option<NaiveTime>> {
    let Ok(hour) = hour.parse::<u32>() else {
        return Ok(None);
    };
    if hour > 12 {
        return Ok(None);
    }

    let afternoon = match meridiem.to_ascii_lowercase().as_str() {
        "am" => false,
        "pm" => true,
        _ => return Err(Error::time(input)),
    };

    // Clock hour 0 reads like 12: `0 am` is midnight, `0 pm` is noon.
    let hour = hour % 12 + if afternoon { 12 } else { 0 };
    NaiveTime::from_hms_opt(hour, 0, 0)
        .map(Some)
        .ok_or_else(|| Error::time(input))
}

/// `H` on a 24-hour clock. Returns `None` when the hour is not an integer
/// in 0..=24. Hour 24 wraps to midnight of the same day.
fn try_twenty_four_hour(hour: &str) -> Option<NaiveTime> {
    let hour = hour.parse::<u32>().ok()?;
    if hour > 24 {
        return None;
    }
    NaiveTime::from_hms_opt(hour % 24, 0, 0)
}

fn fallback_generic(input: &str) -> Result<NaiveTime> {
    if input.len() == 4 && input.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveTime::parse_from_str(input, COMPACT_FORMAT).map_err(|_| Error::time(input));
    }
    FALLBACK_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(input, format).ok())
        .ok_or_else(|| Error::time(input))
}
