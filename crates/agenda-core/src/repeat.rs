//! Attaching and listing recurrence schedules on stored events.

use crate::category::Category;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::recurrence::{Interval, generate};
use crate::store::EventStore;

const REPEAT_SHAPE: &str = "'category index' or 'category index interval count'";

/// What to do with the addressed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatAction {
    /// Show the current schedule.
    List,
    /// Replace the schedule with `count` new occurrences.
    Add { interval: Interval, count: i64 },
}

/// A parsed repeat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatRequest {
    pub category: Category,
    /// 1-based position within the category.
    pub index: i64,
    pub action: RepeatAction,
}

impl RepeatRequest {
    /// Parses `category index` or `category index interval count`.
    ///
    /// Words may be separated by whitespace or `;`.
    pub fn parse(text: &str) -> Result<Self> {
        let words: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || c == ';')
            .filter(|word| !word.is_empty())
            .collect();

        match words.as_slice() {
            [category, index] => Ok(Self {
                category: category.parse()?,
                index: parse_number("index", index)?,
                action: RepeatAction::List,
            }),
            [category, index, interval, count] => Ok(Self {
                category: category.parse()?,
                index: parse_number("index", index)?,
                action: RepeatAction::Add {
                    interval: interval.parse()?,
                    count: parse_number("count", count)?,
                },
            }),
            _ => Err(Error::MissingArgument {
                expected: REPEAT_SHAPE,
                found: words.len(),
            }),
        }
    }
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.parse().map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

/// Converts a 1-based index into a position in a list of `len` events.
/// Zero and negative indexes are out of range like any other.
fn position(index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .and_then(|index| index.checked_sub(1))
        .filter(|position| *position < len)
        .ok_or(Error::IndexOutOfRange { index, len })
}

/// Runs a parsed request and returns the addressed event.
pub fn execute<'a, S>(store: &'a mut S, request: &RepeatRequest) -> Result<&'a Event>
where
    S: EventStore + ?Sized,
{
    match request.action {
        RepeatAction::List => list_schedule(store, request.category, request.index),
        RepeatAction::Add { interval, count } => {
            repeat_event(store, request.category, request.index, interval, count)
        }
    }
}

/// Computes a new schedule for the event at 1-based `index`, anchored on the
/// event's own date and time, and replaces any schedule it had.
pub fn repeat_event<S>(
    store: &mut S,
    category: Category,
    index: i64,
    interval: Interval,
    count: i64,
) -> Result<&Event>
where
    S: EventStore + ?Sized,
{
    let len = store.events(category).len();
    let position = position(index, len)?;
    let event = store
        .event_mut(category, position)
        .ok_or(Error::IndexOutOfRange { index, len })?;

    let Some(anchor_date) = event.date else {
        return Err(Error::MissingAnchor {
            description: event.description.clone(),
        });
    };

    let schedule = generate(anchor_date, event.time, interval, count)?;
    tracing::debug!(%category, index, %interval, count, "replacing recurrence schedule");
    event.set_repeat(schedule);
    Ok(event)
}

/// Returns the event at 1-based `index` together with its current schedule.
pub fn list_schedule<S>(store: &S, category: Category, index: i64) -> Result<&Event>
where
    S: EventStore + ?Sized,
{
    let events = store.events(category);
    let position = position(index, events.len())?;
    Ok(&events[position])
}
