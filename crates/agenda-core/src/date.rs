//! Partial date parsing.
//!
//! Dates are written day-first with `/` or `-` separators. Fields may be
//! omitted from the left: `20` is a year, `5/20` is a month and year, and
//! `4/5/20` is a full date. Omitted fields come from today's date.
//!
//! # Year pivot
//!
//! A two-digit year `yy` always means `20yy` (2000 through 2099). A
//! four-digit year is taken as written. No other widths are accepted.

use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::{Error, Result};

/// Century added to two-digit years.
const TWO_DIGIT_YEAR_BASE: i32 = 2000;

/// Parses a date relative to the local current date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    parse_date_at(text, Local::now().date_naive())
}

/// Parses a date, filling omitted fields from `today`.
///
/// Blank input returns `today` unchanged.
pub fn parse_date_at(text: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = text.trim();
    if input.is_empty() {
        return Ok(today);
    }

    let fields: Vec<&str> = input.split(['/', '-']).collect();
    let date = match fields.as_slice() {
        [year] => {
            let year = parse_year(input, year)?;
            clipped_date(year, today.month(), today.day())
        }
        [month, year] => {
            let month = parse_day_or_month(input, month)?;
            let year = parse_year(input, year)?;
            clipped_date(year, month, today.day())
        }
        [day, month, year] => {
            let day = parse_day_or_month(input, day)?;
            let month = parse_day_or_month(input, month)?;
            let year = parse_year(input, year)?;
            NaiveDate::from_ymd_opt(year, month, day)
        }
        _ => return Err(Error::date(input, "expected at most day/month/year")),
    };

    date.ok_or_else(|| Error::date(input, "no such calendar day"))
}

/// Builds a date, pulling `day` back to the last day of the month when the
/// month is shorter.
fn clipped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    NaiveDate::from_ymd_opt(year, month, day.min(last.day()))
}

fn parse_day_or_month(input: &str, field: &str) -> Result<u32> {
    if !(1..=2).contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::date(input, "day and month must be one or two digits"));
    }
    field
        .parse()
        .map_err(|_| Error::date(input, "day and month must be one or two digits"))
}

fn parse_year(input: &str, field: &str) -> Result<i32> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::date(input, "year must be numeric"));
    }
    let value: i32 = field
        .parse()
        .map_err(|_| Error::date(input, "year must be numeric"))?;
    match field.len() {
        2 => Ok(TWO_DIGIT_YEAR_BASE + value),
        4 => Ok(value),
        _ => Err(Error::date(input, "year must have two or four digits")),
    }
}
