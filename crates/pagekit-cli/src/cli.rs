use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagekit")]
#[command(about = "Compute and explore pagination ranges", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "FILE", env = "PAGEKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the page markers for a single page
    Range(RangeArgs),
    /// Print the "showing X–Y of N" span for a page
    Info(InfoArgs),
    /// Drive a page controller through a sequence of navigation steps
    Walk(WalkArgs),
}

#[derive(Args)]
pub struct RangeArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub current: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub total: i64,
    /// Pages shown on each side of the current page
    #[arg(long, allow_negative_numbers = true)]
    pub siblings: Option<i64>,
}

#[derive(Args)]
pub struct InfoArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub page: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub per_page: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub total_items: Option<i64>,
}

#[derive(Args)]
pub struct WalkArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub total: i64,
    #[arg(long, allow_negative_numbers = true)]
    pub siblings: Option<i64>,
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub start: i64,
    /// Steps: next, prev, first, last, goto:N, total:N, lock, unlock
    #[arg(value_name = "STEP")]
    pub steps: Vec<String>,
}
