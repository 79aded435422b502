// mvr-aio/src/staging.rs
use std::path::{Path, PathBuf};

use mvr_common::error::Result;
use mvr_common::model::JarArtifact;
use tempfile::TempDir;
use tracing::debug;

use crate::fs::{create_artifact_dir, create_dir_all};

const STAGING_PREFIX: &str = ".mvr-staging-";

/// Private scratch directory for one fetch. Owned by exactly one call and
/// removed, with whatever it still contains, when dropped.
#[derive(Debug)]
pub struct StagingArea {
    dir: TempDir,
}

impl StagingArea {
    /// Creates a fresh staging directory inside `parent`, creating `parent`
    /// first if needed.
    pub fn create_in(parent: &Path) -> Result<Self> {
        create_dir_all(parent)?;
        let dir = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(parent)?;
        debug!("Created staging area {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path_of(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Creates the artifact's directory so fetch tasks can write into it.
    pub fn prepare(&self, artifact: &JarArtifact) -> Result<PathBuf> {
        create_artifact_dir(self.root(), artifact)
    }

    /// Removes the directory now, reporting failure instead of ignoring it.
    pub fn close(self) -> Result<()> {
        let path = self.dir.path().to_path_buf();
        self.dir.close()?;
        debug!("Removed staging area {}", path.display());
        Ok(())
    }
}
