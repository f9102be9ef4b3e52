mod app;
mod cli;
mod commands;
mod config;
mod effects;
mod logging;
mod render;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use cli::{Cli, Command};
use logging::LogDestination;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let destination = if cli.log_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(destination, level);

    let config = config::load(cli.config.as_deref())?;
    let had_errors = match cli.command {
        Command::Generate(args) => {
            commands::run_generate(config, args, io::stdout())?.had_errors()
        }
        Command::Extract(args) => {
            commands::run_extract(config, args, io::stdin(), io::stdout())?.had_errors()
        }
    };

    Ok(if had_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
