//! Availability checks: which events fall inside a date/time window.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::category::Category;
use crate::date::parse_date_at;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::range::{TimeRange, UntimedPolicy};
use crate::store::EventStore;
use crate::time::parse_time_at;

const QUERY_SHAPE: &str = "4 fields separated by ';' (start date; start time; end date; end time)";

/// The four raw fields of a check query, each possibly blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckQuery {
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl CheckQuery {
    /// Splits `startDate; startTime; endDate; endTime`.
    pub fn parse(text: &str) -> Result<Self> {
        let fields: Vec<&str> = text.split(';').map(str::trim).collect();
        let [start_date, start_time, end_date, end_time] = fields.as_slice() else {
            return Err(Error::MissingArgument {
                expected: QUERY_SHAPE,
                found: fields.len(),
            });
        };
        Ok(Self {
            start_date: (*start_date).to_string(),
            start_time: (*start_time).to_string(),
            end_date: (*end_date).to_string(),
            end_time: (*end_time).to_string(),
        })
    }

    /// Resolves the fields, defaulting blanks from `now`.
    pub fn resolve_at(&self, now: NaiveDateTime) -> Result<TimeRange> {
        let start_date = parse_date_at(&self.start_date, now.date())?;
        let end_date = parse_date_at(&self.end_date, now.date())?;
        let start_time = parse_time_at(&self.start_time, now.time())?;
        let end_time = parse_time_at(&self.end_time, now.time())?;
        Ok(TimeRange::new(start_date, start_time, end_date, end_time))
    }
}

/// One dated appearance of an event that fell inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    pub event: &'a Event,
    /// The event's own date, or the recurrence date that matched.
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl Occurrence<'_> {
    pub const fn category(&self) -> Category {
        self.event.category()
    }

    /// Whether this is a generated recurrence rather than the event itself.
    pub fn is_recurrence(&self) -> bool {
        self.event.date != Some(self.date)
    }
}

/// Parses `query` and returns the occurrences inside its window.
pub fn check<'a, S>(
    store: &'a S,
    query: &CheckQuery,
    now: NaiveDateTime,
    untimed: UntimedPolicy,
) -> Result<Vec<Occurrence<'a>>>
where
    S: EventStore + ?Sized,
{
    let range = query.resolve_at(now)?;
    Ok(coinciding(store, &range, untimed))
}

/// Collects occurrences inside `range`.
///
/// Categories are visited Personal, Timetable, Zoom; events in store order;
/// and each event's own date before its recurrence dates. An inverted range
/// matches nothing.
pub fn coinciding<'a, S>(store: &'a S, range: &TimeRange, untimed: UntimedPolicy) -> Vec<Occurrence<'a>>
where
    S: EventStore + ?Sized,
{
    if range.is_inverted() {
        tracing::debug!(?range, "inverted range, nothing can coincide");
        return Vec::new();
    }

    let matches: Vec<Occurrence<'a>> = Category::ALL
        .into_iter()
        .flat_map(|category| store.events(category))
        .flat_map(|event| {
            event.occurrence_dates().map(move |date| Occurrence {
                event,
                date,
                time: event.time,
            })
        })
        .filter(|occurrence| range.contains(occurrence.date, occurrence.time, untimed))
        .collect();

    tracing::debug!(?range, matched = matches.len(), "checked availability");
    matches
}
