//! Repeat command for attaching or listing recurrence schedules.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use agenda_core::repeat::execute;
use agenda_core::{Event, RepeatAction, RepeatRequest};

use super::util::{format_event, format_when, load_book};
use crate::Config;

#[derive(Debug, Args)]
pub struct RepeatArgs {
    /// `<category> <index>` or `<category> <index> <interval> <count>`.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

pub fn run<W: Write>(writer: &mut W, args: &RepeatArgs, config: &Config) -> Result<()> {
    let request = RepeatRequest::parse(&args.words.join(" "))?;
    let (mut db, mut book) = load_book(config)?;

    let event = execute(&mut book, &request)?;
    write_schedule(writer, event)?;

    if matches!(request.action, RepeatAction::Add { .. }) {
        db.save_book(&book).context("failed to save events")?;
    }
    Ok(())
}

fn write_schedule<W: Write>(writer: &mut W, event: &Event) -> Result<()> {
    let line = format_event(event);
    let Some(schedule) = &event.repeat else {
        writeln!(writer, "{line} is not repeating.")?;
        return Ok(());
    };

    writeln!(
        writer,
        "{line} repeats {} for {} time(s):",
        schedule.interval, schedule.count
    )?;
    for (index, date) in schedule.dates.iter().enumerate() {
        writeln!(writer, "{}. {}", index + 1, format_when(*date, schedule.anchor_time))?;
    }
    Ok(())
}
