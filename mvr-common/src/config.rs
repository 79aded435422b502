// mvr-common/src/config.rs
use std::env;
use std::path::{Path, PathBuf};

use directories::UserDirs;
use serde::Serialize;
use tracing::debug;

use super::error::{MvrError, Result};
use crate::settings;

pub const DEFAULT_REPOSITORY_URL: &str = "https://repo1.maven.org/maven2";
pub const DEFAULT_REPOSITORY_ID: &str = "maven-central";
/// Two concurrent downloads per artifact: enough to overlap latency without
/// hammering the remote repository.
pub const DEFAULT_FETCH_WORKERS: usize = 2;

const ENV_REPO_URL: &str = "MVR_REPO_URL";
const ENV_REPO_ID: &str = "MVR_REPO_ID";
const ENV_REPO_USERNAME: &str = "MVR_REPO_USERNAME";
const ENV_REPO_PASSWORD: &str = "MVR_REPO_PASSWORD";
const ENV_REPO_LOCAL: &str = "MVR_REPO_LOCAL";
const ENV_STAGING_DIR: &str = "MVR_STAGING_DIR";
const ENV_FETCH_WORKERS: &str = "MVR_FETCH_WORKERS";

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub repository_url: String,
    pub repository_id: String,
    pub repository_username: Option<String>,
    #[serde(skip_serializing)]
    pub repository_password: Option<String>,
    pub local_repository: PathBuf,
    pub staging_dir: Option<PathBuf>,
    pub fetch_workers: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        debug!("Loading mvr configuration");

        let repository_url = non_empty_env(ENV_REPO_URL).unwrap_or_else(|| {
            debug!(
                "{} not set or empty, falling back to default: {}",
                ENV_REPO_URL, DEFAULT_REPOSITORY_URL
            );
            DEFAULT_REPOSITORY_URL.to_string()
        });
        let repository_id =
            non_empty_env(ENV_REPO_ID).unwrap_or_else(|| DEFAULT_REPOSITORY_ID.to_string());
        let repository_username = non_empty_env(ENV_REPO_USERNAME);
        let repository_password = env::var(ENV_REPO_PASSWORD).ok();

        let maven_home = maven_home_dir()?;
        let local_repository = settings::resolve_local_repository(
            non_empty_env(ENV_REPO_LOCAL).as_deref(),
            &maven_home,
        );
        debug!(
            "Effective local repository set to: {}",
            local_repository.display()
        );

        let staging_dir = non_empty_env(ENV_STAGING_DIR).map(PathBuf::from);
        let fetch_workers = match non_empty_env(ENV_FETCH_WORKERS) {
            Some(raw) => parse_worker_count(&raw)?,
            None => DEFAULT_FETCH_WORKERS,
        };

        debug!("Configuration loaded successfully.");
        Ok(Self {
            repository_url,
            repository_id,
            repository_username,
            repository_password,
            local_repository,
            staging_dir,
            fetch_workers,
        })
    }

    pub fn local_repository(&self) -> &Path {
        &self.local_repository
    }

    /// Parent directory for per-fetch staging areas. Defaults to the local
    /// repository itself so that commits are same-filesystem renames.
    pub fn staging_parent(&self) -> &Path {
        self.staging_dir
            .as_deref()
            .unwrap_or(self.local_repository.as_path())
    }
}

/// `~/.m2`
pub fn maven_home_dir() -> Result<PathBuf> {
    UserDirs::new()
        .map(|ud| ud.home_dir().join(".m2"))
        .ok_or_else(|| MvrError::Config("Could not determine the user's home directory".into()))
}

pub fn parse_worker_count(raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(MvrError::Config(format!(
            "Invalid fetch worker count '{raw}': expected a positive integer"
        ))),
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}
