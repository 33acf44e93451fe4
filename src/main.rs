//! docsite - Configuration tool for documentation sites.

mod cli;
mod config;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{ConfigError, render_error};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Check { args } => cli::check::check_config(cli, args),
        Commands::Resolve {
            args,
            pretty,
            output,
        } => cli::resolve::resolve_config(cli, args, *pretty, output.as_deref()),
        Commands::Options => cli::options::print_options(),
        Commands::Init { name, dry } => cli::init::new_site(name.as_deref(), *dry),
    }
}

/// Print an error chain; configuration errors get their fix hint.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<ConfigError>() {
        Some(config_err) => {
            log!("error"; "{}", err);
            eprintln!("{}", render_error(config_err));
        }
        None => log!("error"; "{:#}", err),
    }
}
