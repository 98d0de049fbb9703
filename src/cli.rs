use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kairos Gantt-timeline time-scale engine.
#[derive(Parser)]
#[command(
    name = "kairos",
    version,
    about = "Time-scale engine for Gantt-style timelines"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Derive the padded visible date range for the configured items.
    Range(RangeArgs),
    /// Generate the tick sequence covering the visible range.
    Ticks(TicksArgs),
    /// Locate the now marker within the tick sequence.
    Marker(MarkerArgs),
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Override view granularity from config.
    #[arg(short, long)]
    pub granularity: Option<String>,

    /// Override lead steps from config.
    #[arg(short, long)]
    pub lead_steps: Option<u32>,
}

/// Arguments for the `ticks` subcommand.
#[derive(clap::Args)]
pub struct TicksArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Override view granularity from config.
    #[arg(short, long)]
    pub granularity: Option<String>,

    /// Override lead steps from config.
    #[arg(short, long)]
    pub lead_steps: Option<u32>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `marker` subcommand.
#[derive(clap::Args)]
pub struct MarkerArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Override view granularity from config.
    #[arg(short, long)]
    pub granularity: Option<String>,

    /// Override lead steps from config.
    #[arg(short, long)]
    pub lead_steps: Option<u32>,

    /// Timestamp to place, e.g. 2024-03-10T14:30.
    #[arg(short, long)]
    pub now: String,

    /// Override tick pixel width from config.
    #[arg(long)]
    pub tick_width: Option<f64>,

    /// Reversed (right-to-left) reading direction.
    #[arg(long)]
    pub rtl: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
