// mvr-net/src/task.rs
use std::path::{Path, PathBuf};

use mvr_common::error::Result;
use tracing::{debug, warn};
use url::Url;

use crate::repository::RemoteRepository;

/// Moves the bytes behind one URL into one local file.
///
/// The destination's parent directory must already exist. Implementations
/// create or overwrite exactly that file and never retry.
pub trait Transport: Send + Sync {
    fn fetch_to_file(&self, url: &Url, destination: &Path) -> Result<()>;
}

/// One remote file headed for one staged local file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTask {
    url: Url,
    destination: PathBuf,
}

impl FetchTask {
    /// Task for `relative` in `repository`, landing at the same relative
    /// path below `local_root`.
    pub fn for_path(
        repository: &RemoteRepository,
        relative: &str,
        local_root: &Path,
    ) -> Result<Self> {
        Ok(Self {
            url: repository.url_for(relative)?,
            destination: local_root.join(relative),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn run(&self, transport: &dyn Transport) -> Result<()> {
        debug!("Fetching {} -> {}", self.url, self.destination.display());
        transport
            .fetch_to_file(&self.url, &self.destination)
            .inspect_err(|e| warn!("Fetch of {} failed: {}", self.url, e))
    }
}
