//! CLI subcommand implementations.

pub mod add;
pub mod check;
pub mod list;
pub mod repeat;
pub mod util;
