//! Storage layer for the agenda event tracker.
//!
//! Provides persistence for the event book using `rusqlite`.
//!
//! # Thread Safety
//!
//! The [`Database`] type wraps a `rusqlite::Connection`, which is `Send` but not `Sync`.
//! The CLI opens one database per command and never shares it.
//!
//! # Schema
//!
//! One `events` table holds every category. `position` is the 1-based index
//! a user sees for the event within its category, so `(category, position)`
//! is unique.
//!
//! - `date` is TEXT `YYYY-MM-DD`, `time` is TEXT `HH:MM`; both nullable.
//! - `detail` is the timetable location or zoom link.
//! - `repeat` is the recurrence schedule as JSON, nullable.

use std::path::Path;

use agenda_core::{Category, Event, EventBook, EventKind, EventStore, RecurrenceSchedule};
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, params};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Database errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// A stored category name is not recognized.
    #[error("invalid category for event {id}: {category}")]
    InvalidCategory { id: i64, category: String },
    /// Failed to parse a stored date.
    #[error("invalid date for event {id}: {value}")]
    InvalidDate {
        id: i64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// Failed to parse a stored time.
    #[error("invalid time for event {id}: {value}")]
    InvalidTime {
        id: i64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    /// Failed to parse or encode a recurrence schedule.
    #[error("invalid recurrence schedule for event {id}")]
    InvalidSchedule {
        id: i64,
        #[source]
        source: serde_json::Error,
    },
    /// A timetable or zoom event is missing its location or link.
    #[error("event {id} is missing its {field}")]
    MissingDetail { id: i64, field: &'static str },
}

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

/// One stored row before it is turned back into an [`Event`].
struct EventRow {
    id: i64,
    category: String,
    description: String,
    detail: Option<String>,
    date: Option<String>,
    time: Option<String>,
    repeat: Option<String>,
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The database schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the database schema.
    ///
    /// This is idempotent - safe to call on an already-initialized database.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS events (
                id INTEGER PRIMARY KEY,
                category TEXT NOT NULL,
                position INTEGER NOT NULL,
                description TEXT NOT NULL,
                detail TEXT,
                date TEXT,
                time TEXT,
                repeat TEXT,
                UNIQUE (category, position)
            );

            CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
            ",
        )?;
        Ok(())
    }

    /// Loads every stored event, preserving each category's order.
    pub fn load_book(&self) -> Result<EventBook, DbError> {
        let mut stmt = self.conn.prepare(
            "
            SELECT id, category, description, detail, date, time, repeat
            FROM events
            ORDER BY category ASC, position ASC
            ",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(EventRow {
                id: row.get(0)?,
                category: row.get(1)?,
                description: row.get(2)?,
                detail: row.get(3)?,
                date: row.get(4)?,
                time: row.get(5)?,
                repeat: row.get(6)?,
            })
        })?;

        let mut book = EventBook::new();
        for row in rows {
            book.add(row?.into_event()?);
        }
        tracing::debug!(events = book.len(), "loaded event book");
        Ok(book)
    }

    /// Replaces the stored events with the contents of `book`.
    pub fn save_book(&mut self, book: &EventBook) -> Result<usize, DbError> {
        let tx = self.conn.transaction()?;
        let mut saved = 0;
        {
            tx.execute("DELETE FROM events", [])?;
            let mut stmt = tx.prepare(
                "
                INSERT INTO events (category, position, description, detail, date, time, repeat)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                ",
            )?;
            for category in Category::ALL {
                for (position, event) in (1_i64..).zip(book.events(category)) {
                    let repeat = event
                        .repeat
                        .as_ref()
                        .map(serde_json::to_string)
                        .transpose()
                        .map_err(|source| DbError::InvalidSchedule {
                            id: position,
                            source,
                        })?;
                    saved += stmt.execute(params![
                        category.as_str(),
                        position,
                        event.description,
                        event.kind.detail(),
                        event.date.map(|date| date.format(DATE_FORMAT).to_string()),
                        event.time.map(|time| time.format(TIME_FORMAT).to_string()),
                        repeat,
                    ])?;
                }
            }
        }
        tx.commit()?;
        tracing::debug!(saved, "saved event book");
        Ok(saved)
    }
}

impl EventRow {
    fn into_event(self) -> Result<Event, DbError> {
        let id = self.id;
        let category: Category = self
            .category
            .parse()
            .map_err(|_| DbError::InvalidCategory {
                id,
                category: self.category.clone(),
            })?;

        let kind = match category {
            Category::Personal => EventKind::Personal,
            Category::Timetable => EventKind::Timetable {
                location: self.detail.ok_or(DbError::MissingDetail {
                    id,
                    field: "location",
                })?,
            },
            Category::Zoom => EventKind::Zoom {
                link: self
                    .detail
                    .ok_or(DbError::MissingDetail { id, field: "link" })?,
            },
        };

        let date = self
            .date
            .map(|value| {
                NaiveDate::parse_from_str(&value, DATE_FORMAT)
                    .map_err(|source| DbError::InvalidDate { id, value, source })
            })
            .transpose()?;
        let time = self
            .time
            .map(|value| {
                NaiveTime::parse_from_str(&value, TIME_FORMAT)
                    .map_err(|source| DbError::InvalidTime { id, value, source })
            })
            .transpose()?;
        let repeat = self
            .repeat
            .map(|json| serde_json::from_str::<RecurrenceSchedule>(&json))
            .transpose()
            .map_err(|source| DbError::InvalidSchedule { id, source })?;

        Ok(Event {
            description: self.description,
            kind,
            date,
            time,
            repeat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use agenda_core::{Interval, generate};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn table_columns(conn: &Connection, table: &str) -> Vec<String> {
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({table})"))
            .expect("prepare table_info");
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .expect("query table_info");
        rows.map(|row| row.expect("table_info row")).collect()
    }

    fn sample_book() -> EventBook {
        let mut book = EventBook::new();
        book.add(
            Event::new("Go out for dinner", EventKind::Personal)
                .on(ymd(2020, 5, 5))
                .at(hm(12, 0)),
        );
        book.add(Event::new("Read a book", EventKind::Personal));

        let mut tutorial = Event::new(
            "CS2113T tutorial",
            EventKind::Zoom {
                link: "zoom.com/blahblah".into(),
            },
        )
        .on(ymd(2020, 10, 3))
        .at(hm(13, 30));
        tutorial.set_repeat(generate(ymd(2020, 10, 3), Some(hm(13, 30)), Interval::Weekly, 2).unwrap());
        book.add(tutorial);

        book.add(
            Event::new(
                "Science class",
                EventKind::Timetable {
                    location: "S17".into(),
                },
            )
            .on(ymd(2020, 5, 4))
            .at(hm(15, 0)),
        );
        book
    }

    #[test]
    fn open_in_memory_database() {
        let db = Database::open_in_memory().expect("open in-memory db");
        assert!(db.load_book().unwrap().is_empty());
    }

    #[test]
    fn schema_matches_data_model() {
        let db = Database::open_in_memory().expect("open in-memory db");
        assert_eq!(
            table_columns(&db.conn, "events"),
            ["id", "category", "position", "description", "detail", "date", "time", "repeat"]
        );
    }

    #[test]
    fn init_is_idempotent() {
        let db = Database::open_in_memory().expect("open in-memory db");
        db.init().unwrap();
        db.init().unwrap();
    }

    #[test]
    fn save_then_load_preserves_book() {
        let mut db = Database::open_in_memory().expect("open in-memory db");
        let book = sample_book();

        let saved = db.save_book(&book).unwrap();
        assert_eq!(saved, 4);
        assert_eq!(db.load_book().unwrap(), book);
    }

    #[test]
    fn save_replaces_previous_contents() {
        let mut db = Database::open_in_memory().expect("open in-memory db");
        db.save_book(&sample_book()).unwrap();

        let mut smaller = EventBook::new();
        smaller.add(Event::new("only", EventKind::Personal));
        db.save_book(&smaller).unwrap();

        let count: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(db.load_book().unwrap(), smaller);
    }

    #[test]
    fn stores_readable_dates_and_schedule_json() {
        let mut db = Database::open_in_memory().expect("open in-memory db");
        db.save_book(&sample_book()).unwrap();

        let (date, time, repeat): (String, String, String) = db
            .conn
            .query_row(
                "SELECT date, time, repeat FROM events WHERE category = 'Zoom' AND position = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(date, "2020-10-03");
        assert_eq!(time, "13:30");
        assert_eq!(
            repeat,
            r#"{"anchor_date":"2020-10-03","anchor_time":"13:30:00","interval":"weekly","count":2,"dates":["2020-10-10","2020-10-17"]}"#
        );
    }

    #[test]
    fn corrupt_rows_are_reported() {
        let db = Database::open_in_memory().expect("open in-memory db");
        db.conn
            .execute(
                "INSERT INTO events (id, category, position, description, date) VALUES (7, 'Personal', 1, 'x', '05/05/20')",
                [],
            )
            .unwrap();
        let err = db.load_book().unwrap_err();
        assert!(matches!(err, DbError::InvalidDate { id: 7, .. }), "{err:?}");
    }

    #[test]
    fn missing_detail_is_reported() {
        let db = Database::open_in_memory().expect("open in-memory db");
        db.conn
            .execute(
                "INSERT INTO events (id, category, position, description) VALUES (3, 'Zoom', 1, 'call')",
                [],
            )
            .unwrap();
        let err = db.load_book().unwrap_err();
        assert_eq!(err.to_string(), "event 3 is missing its link");
    }

    #[test]
    fn open_persists_to_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("agenda.db");
        {
            let mut db = Database::open(&path).unwrap();
            db.save_book(&sample_book()).unwrap();
        }
        let db = Database::open(&path).unwrap();
        assert_eq!(db.load_book().unwrap().len(), 4);
    }
}
