//! List command for showing stored events by category.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use agenda_core::{Category, EventBook, EventStore};

use super::util::{format_event, load_book};
use crate::Config;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list this category (personal, timetable or zoom).
    pub category: Option<String>,
}

pub fn run<W: Write>(writer: &mut W, args: &ListArgs, config: &Config) -> Result<()> {
    let categories = match &args.category {
        Some(name) => vec![name.parse::<Category>()?],
        None => Category::ALL.to_vec(),
    };

    let (_db, book) = load_book(config)?;
    write_lists(writer, &book, &categories)
}

fn write_lists<W: Write>(writer: &mut W, book: &EventBook, categories: &[Category]) -> Result<()> {
    for &category in categories {
        writeln!(writer, "{category}:")?;
        let events = book.events(category);
        if events.is_empty() {
            writeln!(writer, "  (no events)")?;
            continue;
        }
        for (index, event) in events.iter().enumerate() {
            let repeat = event
                .repeat
                .as_ref()
                .map(|schedule| format!(" (repeats {} x{})", schedule.interval, schedule.count))
                .unwrap_or_default();
            writeln!(writer, "{}. {}{repeat}", index + 1, format_event(event))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use agenda_core::{Event, EventKind, Interval, generate};
    use agenda_db::Database;
    use chrono::{NaiveDate, NaiveTime};
    use insta::assert_snapshot;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn seeded_config(temp: &tempfile::TempDir) -> Config {
        let config = Config {
            database_path: temp.path().join("agenda.db"),
            untimed_events: agenda_core::UntimedPolicy::Include,
        };
        let mut book = EventBook::new();
        book.add(Event::new("Stay at home", EventKind::Personal).on(ymd(2020, 5, 4)));
        let mut call = Event::new(
            "CS2113T tutorial",
            EventKind::Zoom {
                link: "zoom.com/blahblah".into(),
            },
        )
        .on(ymd(2020, 10, 3))
        .at(NaiveTime::from_hms_opt(13, 30, 0).unwrap());
        call.set_repeat(generate(ymd(2020, 10, 3), call.time, Interval::Weekly, 1).unwrap());
        book.add(call);

        Database::open(&config.database_path)
            .unwrap()
            .save_book(&book)
            .unwrap();
        config
    }

    #[test]
    fn lists_every_category_in_order() {
        let temp = tempfile::tempdir().unwrap();
        let config = seeded_config(&temp);
        let mut output = Vec::new();

        run(&mut output, &ListArgs { category: None }, &config).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        Personal:
        1. [P] Stay at home on 2020-05-04
        Timetable:
          (no events)
        Zoom:
        1. [Z] CS2113T tutorial, Link: zoom.com/blahblah on 2020-10-03, 13:30 (repeats weekly x1)
        ");
    }

    #[test]
    fn lists_one_category() {
        let temp = tempfile::tempdir().unwrap();
        let config = seeded_config(&temp);
        let mut output = Vec::new();

        let args = ListArgs {
            category: Some("PERSONAL".to_string()),
        };
        run(&mut output, &args, &config).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "Personal:\n1. [P] Stay at home on 2020-05-04\n");
    }

    #[test]
    fn unknown_category_is_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let config = seeded_config(&temp);
        let mut output = Vec::new();
        let args = ListArgs {
            category: Some("todo".to_string()),
        };
        assert!(run(&mut output, &args, &config).is_err());
    }
}
