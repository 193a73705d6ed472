//! Check command for finding coinciding events.

use std::io::Write;

use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::Args;

use agenda_core::{CheckQuery, check};

use super::util::{format_occurrence, load_book};
use crate::Config;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// `start date; start time; end date; end time`, e.g.
    /// "04/05/20; 13:15; 05/05/20; 2:30 pm".
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl CheckArgs {
    /// The query text as typed, words rejoined with single spaces.
    pub fn query(&self) -> String {
        self.words.join(" ")
    }
}

pub fn run<W: Write>(writer: &mut W, args: &CheckArgs, config: &Config) -> Result<()> {
    run_at(writer, args, config, Local::now().naive_local())
}

pub fn run_at<W: Write>(
    writer: &mut W,
    args: &CheckArgs,
    config: &Config,
    now: NaiveDateTime,
) -> Result<()> {
    let query = CheckQuery::parse(&args.query())?;
    let (_db, book) = load_book(config)?;
    let coinciding = check(&book, &query, now, config.untimed_events)?;

    if coinciding.is_empty() {
        writeln!(writer, "You have no coinciding events!")?;
        return Ok(());
    }

    writeln!(writer, "Here is a list of your coinciding events:")?;
    for (index, occurrence) in coinciding.iter().enumerate() {
        writeln!(writer, "{}. {}", index + 1, format_occurrence(occurrence))?;
    }
    Ok(())
}
