// mvr/src/main.rs
use std::process;

use clap::Parser;
use colored::Colorize;
use mvr_common::config::Config;
use mvr_common::error::{MvrError, Result};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::CliArgs;

fn init_logging(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("MVR_LOG")
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .without_time()
        .try_init();
}

fn load_config(cli_args: &CliArgs) -> Result<Config> {
    let mut config = Config::load()
        .map_err(|e| MvrError::Config(format!("Could not load configuration: {e}")))?;
    cli_args.apply_overrides(&mut config)?;
    Ok(config)
}

fn main() {
    let cli_args = CliArgs::parse();
    init_logging(cli_args.verbose);

    let result = load_config(&cli_args).and_then(|config| cli_args.command.run(&config));
    if let Err(e) = result {
        error!("Command failed: {:#}", e);
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }

    debug!("Command completed successfully.");
}
