// mvr-common/src/cache.rs
// Handle on the shared local Maven repository (the artifact cache)

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use super::error::{MvrError, Result};
use crate::model::JarArtifact;
use crate::Config;

/// The local repository root. Files below it mirror the remote layout.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    root: PathBuf,
}

impl LocalRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Uses the config's local repository, creating the root if needed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let root = config.local_repository().to_path_buf();
        if !root.exists() {
            tracing::debug!("Creating local repository root: {}", root.display());
            fs::create_dir_all(&root)?;
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute location of a repository-relative path.
    pub fn path_of(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    pub fn jar_location(&self, artifact: &JarArtifact) -> PathBuf {
        self.path_of(artifact.jar_path())
    }

    /// An artifact counts as cached as soon as its jar is present.
    pub fn contains(&self, artifact: &JarArtifact) -> bool {
        self.jar_location(artifact).exists()
    }

    /// Which of the artifact's four files are present, in fetch order.
    pub fn present_files(&self, artifact: &JarArtifact) -> Vec<PathBuf> {
        artifact
            .all_paths()
            .iter()
            .map(|p| self.path_of(p))
            .filter(|p| p.exists())
            .collect()
    }
}

/// `file://` URL for a local artifact path.
pub fn local_file_url(path: &Path) -> Result<Url> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Url::from_file_path(&absolute)
        .map_err(|_| MvrError::Generic(format!("Cannot express {} as a file URL", absolute.display())))
}
