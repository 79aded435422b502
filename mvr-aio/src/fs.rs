/*
File: mvr-aio/src/fs.rs
Purpose: Primitive synchronous filesystem operations on repository trees.
*/
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use mvr_common::error::{MvrError, Result};
use mvr_common::model::JarArtifact;
use tracing::{debug, error, warn};

/// Creates a directory and all its parent components if they are missing.
pub fn create_dir_all(path: &Path) -> Result<()> {
    debug!("Creating directory recursively: {}", path.display());
    fs::create_dir_all(path).map_err(|e| {
        error!("Failed create dir {}: {}", path.display(), e);
        MvrError::from(e)
    })
}

/// Removes a file. A file that is already gone is not an error.
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed file: {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            error!("Failed remove file {}: {}", path.display(), e);
            Err(MvrError::from(e))
        }
    }
}

/// Creates `<root>/<artifact directory>` so the four files can be written.
pub fn create_artifact_dir(root: &Path, artifact: &JarArtifact) -> Result<PathBuf> {
    let dir = root.join(artifact.directory());
    create_dir_all(&dir)?;
    Ok(dir)
}

/// Deletes the artifact's four files below `root`. Best effort: every file is
/// attempted and failures are only logged, so one stuck file does not keep
/// the others around.
pub fn remove_artifact_files(root: &Path, artifact: &JarArtifact) {
    for relative in artifact.all_paths() {
        let path = root.join(relative);
        if let Err(e) = remove_file_if_exists(&path) {
            warn!(
                "Could not purge {} for {}: {}",
                path.display(),
                artifact,
                e
            );
        }
    }
}

/// Moves one staged file into the cache with a rename. The rename is not
/// retried and a cross-device move is not emulated.
pub fn commit_file(staging_root: &Path, cache_root: &Path, relative: &str) -> Result<()> {
    let source = staging_root.join(relative);
    let destination = cache_root.join(relative);
    fs::rename(&source, &destination).map_err(|e| {
        error!(
            "Failed to move staged file {} to {}: {}",
            source.display(),
            destination.display(),
            e
        );
        MvrError::CommitError(format!(
            "Unable to rename {} to {}: {}",
            source.display(),
            destination.display(),
            e
        ))
    })?;
    debug!("Committed {}", destination.display());
    Ok(())
}
