//! Date/time window matching.
//!
//! Matching is date-dominant: a date strictly inside the window always
//! matches, and times only break ties on the boundary dates.
//!
//! # Single-day windows
//!
//! When the start and end dates are the same, only the start-date rule
//! applies. An event on that day matches when it is not before the start
//! time, even if it is after the end time.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// How events without a time are treated on a boundary date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UntimedPolicy {
    /// A missing time satisfies either boundary.
    #[default]
    Include,
    /// A missing time never satisfies a boundary, so untimed events only
    /// match strictly inside the window.
    Exclude,
}

impl UntimedPolicy {
    const fn satisfies_boundary(self) -> bool {
        matches!(self, Self::Include)
    }
}

/// A window bounded by a start and an end date/time, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
}

impl TimeRange {
    pub const fn new(
        start_date: NaiveDate,
        start_time: NaiveTime,
        end_date: NaiveDate,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            start_date,
            start_time,
            end_date,
            end_time,
        }
    }

    /// Whether the start lies after the end.
    pub fn is_inverted(&self) -> bool {
        (self.start_date, self.start_time) > (self.end_date, self.end_time)
    }

    /// Decides whether something dated `date` at `time` falls in the window.
    pub fn contains(&self, date: NaiveDate, time: Option<NaiveTime>, untimed: UntimedPolicy) -> bool {
        if date > self.start_date && date < self.end_date {
            return true;
        }

        if date == self.start_date {
            time.map_or(untimed.satisfies_boundary(), |time| time >= self.start_time)
        } else if date == self.end_date {
            time.map_or(untimed.satisfies_boundary(), |time| time <= self.end_time)
        } else {
            false
        }
    }
}
