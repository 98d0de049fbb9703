mod cli;
mod config;
mod logging;
mod marker_cmd;
mod range_cmd;
mod ticks_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Range(args) => range_cmd::run(args),
        Command::Ticks(args) => ticks_cmd::run(args),
        Command::Marker(args) => marker_cmd::run(args),
    }
}
