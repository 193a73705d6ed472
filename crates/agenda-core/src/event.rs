//! Events tracked by the user.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::recurrence::RecurrenceSchedule;

/// A tracked event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// What the event is about.
    pub description: String,
    /// Category and its category-specific detail.
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Recurring dates, replaced wholesale whenever a new schedule is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<RecurrenceSchedule>,
}

/// Category-specific event detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A personal note.
    Personal,
    /// A timetable slot held at a location.
    Timetable { location: String },
    /// A video meeting reachable through a link.
    Zoom { link: String },
}

impl EventKind {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Personal => Category::Personal,
            Self::Timetable { .. } => Category::Timetable,
            Self::Zoom { .. } => Category::Zoom,
        }
    }

    /// The location or link, if this kind carries one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Personal => None,
            Self::Timetable { location } => Some(location),
            Self::Zoom { link } => Some(link),
        }
    }
}

impl Event {
    pub fn new(description: impl Into<String>, kind: EventKind) -> Self {
        Self {
            description: description.into(),
            kind,
            date: None,
            time: None,
            repeat: None,
        }
    }

    #[must_use]
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn at(mut self, time: NaiveTime) -> Self {
        self.time = Some(time);
        self
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    /// Replaces any existing schedule.
    pub fn set_repeat(&mut self, schedule: RecurrenceSchedule) {
        self.repeat = Some(schedule);
    }

    /// Every date the event takes place on: its own date first, then the
    /// recurrence dates. Empty for an undated event.
    pub fn occurrence_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let repeats = self
            .date
            .and(self.repeat.as_ref())
            .map(|schedule| schedule.dates.as_slice())
            .unwrap_or_default();
        self.date.into_iter().chain(repeats.iter().copied())
    }
}
