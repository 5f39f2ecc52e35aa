//! `promptlab` command-line entry point.

#![warn(clippy::pedantic)]

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::Cli;
use crate::commands::Lab;

fn main() -> ExitCode {
    let cli = Cli::parse();
    prompt_telemetry::init(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let lab = Lab::from_args(&cli.root, cli.config.as_deref(), cli.schema)?;
    commands::dispatch(&lab, cli.command)
}
