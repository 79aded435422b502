// mvr-core/src/resolver.rs
use std::path::{Path, PathBuf};

use mvr_common::config::Config;
use mvr_common::error::{MvrError, Result};
use mvr_common::model::{ArtifactCoordinate, JarArtifact};
use tracing::{debug, instrument};

use crate::fetcher::ArtifactFetcher;

/// Maps dependencies to jars in the local repository, fetching the ones
/// that are missing.
pub struct DependencyResolver {
    fetcher: ArtifactFetcher,
}

impl DependencyResolver {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_fetcher(ArtifactFetcher::from_config(config)?))
    }

    pub fn with_fetcher(fetcher: ArtifactFetcher) -> Self {
        Self { fetcher }
    }

    pub fn local_repository_dir(&self) -> &Path {
        self.fetcher.local_repository().root()
    }

    pub fn resolve_one(&self, dependency: &ArtifactCoordinate) -> Result<PathBuf> {
        self.resolve_many(std::slice::from_ref(dependency))?
            .into_iter()
            .next()
            .ok_or_else(|| MvrError::Generic(format!("No location resolved for {dependency}")))
    }

    /// Local jar locations for `dependencies`, in the same order:
    /// `result[i]` belongs to `dependencies[i]`. Artifacts are fetched one
    /// after another and the first failure aborts the whole batch.
    #[instrument(skip_all, fields(count = dependencies.len()))]
    pub fn resolve_many(&self, dependencies: &[ArtifactCoordinate]) -> Result<Vec<PathBuf>> {
        let artifacts: Vec<JarArtifact> = dependencies.iter().map(JarArtifact::from).collect();
        for artifact in &artifacts {
            self.fetcher.fetch_artifact(artifact)?;
        }

        let local_repository = self.fetcher.local_repository();
        let locations = artifacts
            .iter()
            .map(|artifact| local_repository.jar_location(artifact))
            .collect::<Vec<_>>();
        debug!("Resolved {} dependencies", locations.len());
        Ok(locations)
    }
}
