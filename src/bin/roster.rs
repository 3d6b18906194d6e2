//! Roster CLI Binary

use anyhow::Context;
use clap::Parser;
use roster::logging::{init_logging, LoggingConfig};
use roster::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: cli.log_level.clone().unwrap_or_else(|| "info".to_string()),
        ..Default::default()
    };
    init_logging(&logging);

    let context = match CliContext::new(cli.base_dir.clone(), cli.config.clone())
        .context("initializing roster")
    {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
