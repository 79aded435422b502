// mvr-core/src/fetcher.rs
//! Fetches an artifact's jar, pom and their `.sha1` sidecars into a private
//! staging area, checks both payloads against their sidecars, and only then
//! moves the four files into the shared local repository.
//!
//! A call either leaves all four files in the local repository or none of
//! them. There is no locking across calls or processes: two fetches of the
//! same artifact can still race on the final renames.
//!
//! Staging areas live in the local repository root unless configured
//! otherwise, so commits are same-filesystem renames. A process killed
//! mid-fetch leaves its `.mvr-staging-*` directory behind there; such
//! directories are never read and can be deleted by hand. A cancelled call
//! returns at once; downloads already in flight finish into its staging area,
//! which is removed when the last of them completes, and queued ones are
//! skipped.
use std::path::PathBuf;
use std::sync::Arc;

use crossbeam_channel::{select, Receiver};
use mvr_aio::{commit_file, create_artifact_dir, remove_artifact_files, StagingArea};
use mvr_common::cache::LocalRepository;
use mvr_common::config::Config;
use mvr_common::error::{MvrError, Result};
use mvr_common::model::JarArtifact;
use mvr_net::{FetchTask, HttpTransport, RemoteRepository, Transport};
use threadpool::ThreadPool;
use tracing::{debug, error, instrument, warn};

use crate::cancel::CancelToken;

type TaskOutcome = (String, Result<()>);

pub struct ArtifactFetcher {
    repository: RemoteRepository,
    transport: Arc<dyn Transport>,
    local_repository: LocalRepository,
    staging_parent: PathBuf,
    pool: ThreadPool,
    cancel: CancelToken,
}

impl ArtifactFetcher {
    /// Fetcher with `workers` download threads. Staging areas are created
    /// inside the local repository root unless overridden.
    pub fn new(
        repository: RemoteRepository,
        transport: Arc<dyn Transport>,
        local_repository: LocalRepository,
        workers: usize,
    ) -> Self {
        let workers = workers.max(1);
        let pool = threadpool::Builder::new()
            .num_threads(workers)
            .thread_name("mvr-fetch".to_string())
            .build();
        debug!(
            "Fetch worker pool created with {} workers for repository '{}' ({}).",
            workers,
            repository.id(),
            repository.base_url()
        );
        Self {
            repository,
            transport,
            staging_parent: local_repository.root().to_path_buf(),
            local_repository,
            pool,
            cancel: CancelToken::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let repository = RemoteRepository::from_config(config)?;
        let transport = HttpTransport::new(repository.credentials().cloned())?;
        let local_repository = LocalRepository::from_config(config)?;
        Ok(Self::new(
            repository,
            Arc::new(transport),
            local_repository,
            config.fetch_workers,
        )
        .with_staging_parent(config.staging_parent()))
    }

    pub fn with_staging_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.staging_parent = parent.into();
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn cancel_token(&self) -> &CancelToken {
        &self.cancel
    }

    pub fn local_repository(&self) -> &LocalRepository {
        &self.local_repository
    }

    /// Makes sure the artifact is present in the local repository.
    ///
    /// An existing jar is taken as proof of an earlier complete fetch; the
    /// pom and the sidecars are not looked at in that case.
    #[instrument(skip_all, fields(artifact = %artifact))]
    pub fn fetch_artifact(&self, artifact: &JarArtifact) -> Result<()> {
        // Nothing is touched, not even purged, for a coordinate that could
        // escape the repository root.
        artifact
            .coordinate()
            .validate()
            .map_err(|e| MvrError::ArtifactFetch(artifact.to_string(), Box::new(e)))?;
        if self.local_repository.contains(artifact) {
            debug!("{} already present in local repository", artifact);
            return Ok(());
        }
        if self.cancel.is_cancelled() {
            return Err(self.fail(artifact, None, cancelled(artifact)));
        }

        let staging = match StagingArea::create_in(&self.staging_parent) {
            Ok(staging) => Arc::new(staging),
            Err(e) => return Err(self.fail(artifact, None, e)),
        };

        match self.stage_validate_commit(&staging, artifact) {
            Ok(()) => {
                debug!(
                    "Fetched {} into {}",
                    artifact,
                    self.local_repository.root().display()
                );
                if let Ok(staging) = Arc::try_unwrap(staging) {
                    if let Err(e) = staging.close() {
                        warn!("Could not remove staging area: {}", e);
                    }
                }
                Ok(())
            }
            Err(e) => Err(self.fail(artifact, Some(staging.as_ref()), e)),
        }
    }

    fn stage_validate_commit(
        &self,
        staging: &Arc<StagingArea>,
        artifact: &JarArtifact,
    ) -> Result<()> {
        staging.prepare(artifact)?;
        self.fetch_all(staging, artifact)?;

        let cache_root = self.local_repository.root();
        create_artifact_dir(cache_root, artifact)?;
        validate_staged(staging, artifact.pom_path(), artifact.pom_sha1_path(), "POM")?;
        validate_staged(staging, artifact.jar_path(), artifact.jar_sha1_path(), "JAR")?;

        for relative in [
            artifact.pom_path(),
            artifact.jar_path(),
            artifact.jar_sha1_path(),
            artifact.pom_sha1_path(),
        ] {
            commit_file(staging.root(), cache_root, relative)?;
        }
        remove_artifact_files(staging.root(), artifact);
        Ok(())
    }

    /// Runs the four fetch tasks on the pool and waits for every outcome.
    fn fetch_all(&self, staging: &Arc<StagingArea>, artifact: &JarArtifact) -> Result<()> {
        let tasks = artifact
            .all_paths()
            .iter()
            .map(|relative| FetchTask::for_path(&self.repository, relative, staging.root()))
            .collect::<Result<Vec<_>>>()?;
        let expected = tasks.len();
        let (outcome_tx, outcome_rx) = crossbeam_channel::bounded::<TaskOutcome>(expected);

        for task in tasks {
            let transport = Arc::clone(&self.transport);
            let outcome_tx = outcome_tx.clone();
            let cancel = self.cancel.clone();
            // Whoever drops the staging area last removes it, so a task that
            // outlives a cancelled wait never writes into a missing directory.
            let staging = Arc::clone(staging);
            let artifact = artifact.clone();
            self.pool.execute(move || {
                // Queued behind a cancelled wait: the call has returned already.
                let result = if cancel.is_cancelled() {
                    debug!("Skipping {} after cancellation", task.url());
                    Err(cancelled(&artifact))
                } else {
                    task.run(transport.as_ref())
                };
                drop(staging);
                let _ = outcome_tx.send((task.url().to_string(), result));
            });
        }
        drop(outcome_tx);

        self.join(artifact, &outcome_rx, expected)
    }

    fn join(
        &self,
        artifact: &JarArtifact,
        outcome_rx: &Receiver<TaskOutcome>,
        expected: usize,
    ) -> Result<()> {
        let mut first_failure: Option<MvrError> = None;
        let mut received = 0;

        while received < expected {
            if self.cancel.is_cancelled() {
                return Err(cancelled(artifact));
            }
            select! {
                recv(outcome_rx) -> message => match message {
                    Ok((url, Ok(()))) => {
                        debug!("Fetched {}", url);
                        received += 1;
                    }
                    Ok((url, Err(e))) => {
                        debug!("Fetch of {} failed: {}", url, e);
                        received += 1;
                        if first_failure.is_none() {
                            first_failure = Some(e);
                        }
                    }
                    Err(_) => {
                        // Every sender is gone but outcomes are missing: a task panicked.
                        return Err(first_failure.unwrap_or_else(|| {
                            MvrError::Generic(format!(
                                "A fetch task for {artifact} ended without reporting an outcome"
                            ))
                        }));
                    }
                },
                recv(self.cancel.signal()) -> _ => return Err(cancelled(artifact)),
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Purges the artifact from staging and the local repository and wraps
    /// the cause into the fatal fetch error.
    fn fail(
        &self,
        artifact: &JarArtifact,
        staging: Option<&StagingArea>,
        cause: MvrError,
    ) -> MvrError {
        if let Some(staging) = staging {
            remove_artifact_files(staging.root(), artifact);
        }
        remove_artifact_files(self.local_repository.root(), artifact);
        error!("Failed to fetch {}: {}", artifact, cause);
        MvrError::ArtifactFetch(artifact.to_string(), Box::new(cause))
    }
}

fn validate_staged(
    staging: &StagingArea,
    payload: &str,
    sidecar: &str,
    label: &str,
) -> Result<()> {
    mvr_aio::verify_against_sidecar(&staging.path_of(payload), &staging.path_of(sidecar)).map_err(
        |e| match e {
            MvrError::ChecksumMismatch(detail) => {
                MvrError::ChecksumMismatch(format!("Unable to validate {label} file: {detail}"))
            }
            other => other,
        },
    )
}

fn cancelled(artifact: &JarArtifact) -> MvrError {
    MvrError::Cancelled(format!("Fetch of {artifact} was cancelled"))
}
