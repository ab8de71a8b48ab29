//! Command-line entry point for profilesync.
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use profilesync::cli::Cli;
use profilesync::commands;
use profilesync::config::Config;
use profilesync::logging::{self, Logger, Verbosity};

const COMMAND: &str = "migrate";

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let config = Config::from_cli(&args)?;

    let verbosity = if config.json {
        Verbosity::Quiet
    } else if config.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    logging::init_subscriber(verbosity, COMMAND);

    let mut log = Logger::new(COMMAND);
    if config.json {
        log = log.without_progress();
    }

    commands::migrate::run(&config, Arc::new(log))?;
    Ok(())
}
