use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::DEFAULT_SETTINGS_FILE;

#[derive(Parser)]
#[command(author, version, about = "Fetch gas station prices, keep their history and email a daily report")]
pub struct Args {
    /// Settings file; `APP_*` environment variables override its values.
    #[arg(long, short, default_value = DEFAULT_SETTINGS_FILE)]
    pub config: PathBuf,

    /// Log debug output.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch prices, store them and email the report (default).
    Run(ReportArgs),

    /// Fetch prices and store them, without sending anything.
    Fetch,

    /// Email the report for a day already in the store.
    Report(ReportArgs),
}

#[derive(Parser, Default)]
pub struct ReportArgs {
    /// Day to report on, as YYYY-MM-DD. Defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Print the report instead of emailing it.
    #[arg(long)]
    pub dry_run: bool,
}
