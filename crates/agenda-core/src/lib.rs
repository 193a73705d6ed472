//! Core domain logic for the agenda event tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Parsing: partial dates and loose times typed by users
//! - Checking: finding events that coincide with a date/time window
//! - Repeating: generating recurrence schedules for stored events

pub mod category;
pub mod check;
pub mod date;
mod error;
pub mod event;
pub mod range;
pub mod recurrence;
pub mod repeat;
pub mod store;
pub mod time;

pub use category::Category;
pub use check::{CheckQuery, Occurrence, check, coinciding};
pub use date::{parse_date, parse_date_at};
pub use error::{Error, Result};
pub use event::{Event, EventKind};
pub use range::{TimeRange, UntimedPolicy};
pub use recurrence::{Interval, RecurrenceSchedule, generate};
pub use repeat::{RepeatAction, RepeatRequest, list_schedule, repeat_event};
pub use store::{EventBook, EventStore};
pub use time::{parse_time, parse_time_at};
