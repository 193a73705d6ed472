//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::add::AddArgs;
use crate::commands::check::CheckArgs;
use crate::commands::list::ListArgs;
use crate::commands::repeat::RepeatArgs;

/// Personal event tracker.
///
/// Keeps personal notes, timetable slots and zoom meetings, checks which of
/// them fall inside a date/time window, and repeats them on a schedule.
#[derive(Debug, Parser)]
#[command(name = "agenda", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a personal, timetable or zoom event.
    Add(AddArgs),

    /// List stored events, optionally for one category.
    List(ListArgs),

    /// Show events coinciding with a date/time window.
    ///
    /// The window is written as `start date; start time; end date; end time`.
    /// Dates are day/month/year with `/` or `-`; times are `15`, `3 pm`,
    /// `15:00` or `3:00 pm`. Blank fields default to now.
    Check(CheckArgs),

    /// Repeat an event, or show its current repeat dates.
    ///
    /// `repeat <category> <index>` lists; `repeat <category> <index>
    /// <daily|weekly|monthly|yearly> <count>` replaces the schedule.
    Repeat(RepeatArgs),
}
