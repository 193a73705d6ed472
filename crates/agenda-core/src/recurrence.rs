//! Recurrence schedules for events.
//!
//! A schedule is anchored on an event's own date and lists the next `count`
//! dates one interval apart. The anchor date itself is never part of the
//! list.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Upper bound on generated occurrences per schedule.
pub const MAX_ITERATIONS: i64 = 100_000;

/// Step between two occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Interval {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// The `step`-th date after `anchor`, computed from the anchor so that
    /// month-end clipping never accumulates.
    fn nth_after(self, anchor: NaiveDate, step: u32) -> Option<NaiveDate> {
        match self {
            Self::Daily => anchor.checked_add_days(Days::new(u64::from(step))),
            Self::Weekly => anchor.checked_add_days(Days::new(7 * u64::from(step))),
            Self::Monthly => anchor.checked_add_months(Months::new(step)),
            Self::Yearly => anchor.checked_add_months(Months::new(step.checked_mul(12)?)),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(Error::InvalidInterval(s.to_string())),
        }
    }
}

/// Recurring dates attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceSchedule {
    /// The event's own date when the schedule was created.
    pub anchor_date: NaiveDate,
    /// The event's own time, if it has one. Every occurrence shares it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_time: Option<NaiveTime>,
    pub interval: Interval,
    pub count: u32,
    /// Occurrence dates in ascending order, excluding the anchor.
    pub dates: Vec<NaiveDate>,
}

/// Generates a schedule of `count` dates following `anchor_date`.
pub fn generate(
    anchor_date: NaiveDate,
    anchor_time: Option<NaiveTime>,
    interval: Interval,
    count: i64,
) -> Result<RecurrenceSchedule> {
    if count < 1 {
        return Err(Error::InvalidCount { count });
    }
    let too_many = Error::TooManyIterations {
        count,
        max: MAX_ITERATIONS,
    };
    if count > MAX_ITERATIONS {
        return Err(too_many);
    }
    let steps = u32::try_from(count).map_err(|_| too_many.clone())?;

    let dates = (1..=steps)
        .map(|step| interval.nth_after(anchor_date, step))
        .collect::<Option<Vec<_>>>()
        .ok_or(too_many)?;

    tracing::debug!(%anchor_date, %interval, count, "generated recurrence");

    Ok(RecurrenceSchedule {
        anchor_date,
        anchor_time,
        interval,
        count: steps,
        dates,
    })
}
