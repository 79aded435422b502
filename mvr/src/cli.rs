// mvr/src/cli.rs
//! Defines the command-line argument structure using clap.
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use mvr_common::config::Config;
use mvr_common::error::{MvrError, Result};

pub mod config;
pub mod paths;
pub mod resolve;

use crate::cli::config::ShowConfig;
use crate::cli::paths::Paths;
use crate::cli::resolve::Resolve;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "mvr", bin_name = "mvr")]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Local repository to resolve into (overrides MVR_REPO_LOCAL and settings.xml)
    #[arg(long, global = true, value_name = "DIR")]
    pub local_repo: Option<PathBuf>,

    /// Remote repository base URL (overrides MVR_REPO_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub repo_url: Option<String>,

    /// Concurrent downloads per artifact (overrides MVR_FETCH_WORKERS)
    #[arg(long, global = true, value_name = "N")]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    pub fn apply_overrides(&self, config: &mut Config) -> Result<()> {
        if let Some(local_repo) = &self.local_repo {
            config.local_repository = local_repo.clone();
        }
        if let Some(repo_url) = &self.repo_url {
            config.repository_url = repo_url.clone();
        }
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(MvrError::Config(
                    "--workers must be at least 1".to_string(),
                ));
            }
            config.fetch_workers = workers;
        }
        Ok(())
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch artifacts that are missing locally and print their jar paths
    Resolve(Resolve),
    /// Show where an artifact's files live, without touching the network
    Paths(Paths),
    /// Print the effective configuration as JSON
    Config(ShowConfig),
}

impl Command {
    pub fn run(&self, config: &Config) -> Result<()> {
        match self {
            Self::Resolve(command) => command.run(config),
            Self::Paths(command) => command.run(config),
            Self::Config(command) => command.run(config),
        }
    }
}
