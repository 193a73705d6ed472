//! Shared utilities for CLI commands.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};

use agenda_core::{Event, EventBook, EventKind, Occurrence};
use agenda_db::Database;

use crate::Config;

/// Opens the configured database, creating its directory on first use.
pub fn open_database(config: &Config) -> Result<Database> {
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }
    Database::open(&config.database_path)
        .with_context(|| format!("failed to open {}", config.database_path.display()))
}

/// Opens the database and loads every event.
pub fn load_book(config: &Config) -> Result<(Database, EventBook)> {
    let db = open_database(config)?;
    let book = db.load_book().context("failed to load events")?;
    Ok((db, book))
}

/// One-line description of an event on its own date.
pub fn format_event(event: &Event) -> String {
    describe(event, event.date, event.time)
}

/// One-line description of an event on the date it coincided.
pub fn format_occurrence(occurrence: &Occurrence<'_>) -> String {
    describe(occurrence.event, Some(occurrence.date), occurrence.time)
}

/// Formats a date with an optional time, e.g. `2020-05-05, 12:00`.
pub fn format_when(date: NaiveDate, time: Option<NaiveTime>) -> String {
    match time {
        Some(time) => format!("{date}, {}", time.format("%H:%M")),
        None => date.to_string(),
    }
}

fn describe(event: &Event, date: Option<NaiveDate>, time: Option<NaiveTime>) -> String {
    let mut line = format!("[{}] {}", event.category().tag(), event.description);
    match &event.kind {
        EventKind::Personal => {}
        EventKind::Timetable { location } => line.push_str(&format!(", Location: {location}")),
        EventKind::Zoom { link } => line.push_str(&format!(", Link: {link}")),
    }
    match (date, time) {
        (Some(date), time) => line.push_str(&format!(" on {}", format_when(date, time))),
        (None, Some(time)) => line.push_str(&format!(" at {}", time.format("%H:%M"))),
        (None, None) => {}
    }
    line
}
