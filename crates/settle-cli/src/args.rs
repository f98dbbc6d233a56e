use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;

use crate::cli::{AccountCommands, OverviewCommands, PlanCommands};

/// Build and track debt payment plans
///
/// Settle turns a user's outstanding payment tasks into dated payment
/// schedules, either paying the highest-APR account first (min-fees) or the
/// most utilized credit line first (optim-credit-score). Plans and account
/// snapshots are stored in a local SQLite database.
#[derive(Parser)]
#[command(version, about, name = "settle")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/settle/settle.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Schedule from this date (YYYY-MM-DD) instead of today
    #[arg(long, global = true)]
    pub today: Option<Date>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Settle CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build, list and update payment plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage account snapshots used for allocation
    #[command(alias = "a")]
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Summaries over a user's active plans
    #[command(alias = "o")]
    Overview {
        #[command(subcommand)]
        command: OverviewCommands,
    },
}
