//! Add command for creating events.

use std::io::Write;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDateTime};
use clap::Args;

use agenda_core::{Category, Event, EventKind, parse_date_at, parse_time_at};

use super::util::{format_event, load_book};
use crate::Config;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Category: personal, timetable or zoom.
    pub category: String,
    /// What the event is about.
    pub description: String,
    /// Date as day/month/year, e.g. 05/05/20.
    #[arg(long)]
    pub date: Option<String>,
    /// Time, e.g. 15, "3 pm", 15:00 or "3:00 pm".
    #[arg(long)]
    pub time: Option<String>,
    /// Where a timetable event takes place.
    #[arg(long)]
    pub location: Option<String>,
    /// Meeting link for a zoom event.
    #[arg(long)]
    pub link: Option<String>,
}

pub fn run<W: Write>(writer: &mut W, args: &AddArgs, config: &Config) -> Result<()> {
    run_at(writer, args, config, Local::now().naive_local())
}

pub fn run_at<W: Write>(
    writer: &mut W,
    args: &AddArgs,
    config: &Config,
    now: NaiveDateTime,
) -> Result<()> {
    let description = args.description.trim();
    if description.is_empty() {
        bail!("description cannot be empty");
    }

    let category: Category = args.category.parse()?;
    let kind = event_kind(category, args)?;

    let mut event = Event::new(description, kind);
    if let Some(date) = &args.date {
        event.date = Some(parse_date_at(date, now.date())?);
    }
    if let Some(time) = &args.time {
        event.time = Some(parse_time_at(time, now.time())?);
    }

    let (mut db, mut book) = load_book(config)?;
    let line = format_event(&event);
    let index = book.add(event);
    db.save_book(&book).context("failed to save events")?;
    tracing::debug!(%category, index, "event added");

    writeln!(writer, "Added {category} event {index}:")?;
    writeln!(writer, "{line}")?;
    Ok(())
}

fn event_kind(category: Category, args: &AddArgs) -> Result<EventKind> {
    let detail = |value: Option<&str>, flag: &str| -> Result<String> {
        match value.map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => bail!("{category} events need {flag}"),
        }
    };

    match category {
        Category::Personal => {
            if args.location.is_some() || args.link.is_some() {
                bail!("personal events take neither --location nor --link");
            }
            Ok(EventKind::Personal)
        }
        Category::Timetable => {
            if args.link.is_some() {
                bail!("--link only applies to zoom events");
            }
            Ok(EventKind::Timetable {
                location: detail(args.location.as_deref(), "--location")?,
            })
        }
        Category::Zoom => {
            if args.location.is_some() {
                bail!("--location only applies to timetable events");
            }
            Ok(EventKind::Zoom {
                link: detail(args.link.as_deref(), "--link")?,
            })
        }
    }
}
