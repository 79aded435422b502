// Shared fixtures for the fetcher and resolver tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mvr_common::cache::LocalRepository;
use mvr_common::error::{MvrError, Result};
use mvr_common::model::{ArtifactCoordinate, JarArtifact};
use mvr_core::ArtifactFetcher;
use mvr_net::{RemoteRepository, Transport};
use sha1::{Digest, Sha1};
use tempfile::TempDir;
use url::Url;

pub const REPOSITORY_URL: &str = "https://default-repo/";

pub fn sha1(contents: &str) -> String {
    hex::encode(Sha1::digest(contents.as_bytes()))
}

pub fn jar_contents(artifact: &JarArtifact) -> String {
    format!("{artifact} jar contents")
}

pub fn pom_contents(artifact: &JarArtifact) -> String {
    format!("{artifact} pom contents")
}

pub fn success_cases() -> Vec<ArtifactCoordinate> {
    vec![
        ArtifactCoordinate::new("group", "artifact", "1"),
        ArtifactCoordinate::new("org.group2", "artifact2-name", "2.4.5"),
        ArtifactCoordinate::new("org.robolectric", "android-all", "10-robolectric-5803371"),
    ]
}

/// A repository held in memory. Every call counts as one request.
#[derive(Default)]
pub struct InMemoryRepository {
    contents: Mutex<HashMap<String, Vec<u8>>>,
    requests: AtomicUsize,
}

impl InMemoryRepository {
    pub fn put(&self, relative: &str, body: impl Into<Vec<u8>>) {
        self.contents
            .lock()
            .unwrap()
            .insert(format!("{REPOSITORY_URL}{relative}"), body.into());
    }

    pub fn remove(&self, relative: &str) {
        self.contents
            .lock()
            .unwrap()
            .remove(&format!("{REPOSITORY_URL}{relative}"));
    }

    pub fn add_artifact(&self, coordinate: &ArtifactCoordinate) {
        let artifact = JarArtifact::new(coordinate);
        let jar = jar_contents(&artifact);
        let pom = pom_contents(&artifact);
        self.put(artifact.jar_path(), jar.clone());
        self.put(artifact.jar_sha1_path(), sha1(&jar));
        self.put(artifact.pom_path(), pom.clone());
        self.put(artifact.pom_sha1_path(), sha1(&pom));
    }

    pub fn add_artifact_invalid_jar_sha1(&self, coordinate: &ArtifactCoordinate) {
        let artifact = JarArtifact::new(coordinate);
        self.add_artifact(coordinate);
        self.put(artifact.jar_sha1_path(), sha1("No the same content"));
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Transport for InMemoryRepository {
    fn fetch_to_file(&self, url: &Url, destination: &Path) -> Result<()> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let body = self.contents.lock().unwrap().get(url.as_str()).cloned();
        match body {
            Some(body) => {
                fs::write(destination, body)?;
                Ok(())
            }
            None => Err(MvrError::DownloadError(
                destination
                    .file_name()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_default(),
                url.to_string(),
                "Resource not found (404)".to_string(),
            )),
        }
    }
}

pub struct Fixture {
    pub remote: Arc<InMemoryRepository>,
    pub local_dir: TempDir,
    pub fetcher: ArtifactFetcher,
}

impl Fixture {
    pub fn new() -> Self {
        let remote = Arc::new(InMemoryRepository::default());
        for coordinate in success_cases() {
            remote.add_artifact(&coordinate);
        }
        let local_dir = tempfile::tempdir().unwrap();
        let fetcher = fetcher_over(&remote, local_dir.path());
        Self {
            remote,
            local_dir,
            fetcher,
        }
    }

    /// Another fetcher over the same remote and local repository.
    pub fn new_fetcher(&self) -> ArtifactFetcher {
        fetcher_over(&self.remote, self.local())
    }

    pub fn local(&self) -> &Path {
        self.local_dir.path()
    }
}

fn fetcher_over(remote: &Arc<InMemoryRepository>, local: &Path) -> ArtifactFetcher {
    ArtifactFetcher::new(
        RemoteRepository::new("test", REPOSITORY_URL, None).unwrap(),
        remote.clone(),
        LocalRepository::new(local),
        2,
    )
}

/// All four files are in `root` and match what the repository served.
pub fn check_jar_artifact(root: &Path, coordinate: &ArtifactCoordinate) {
    let artifact = JarArtifact::new(coordinate);
    let read = |relative: &str| {
        fs::read_to_string(root.join(relative))
            .unwrap_or_else(|e| panic!("{relative} missing from local repository: {e}"))
    };
    assert_eq!(read(artifact.jar_path()), jar_contents(&artifact));
    assert_eq!(read(artifact.pom_path()), pom_contents(&artifact));
    assert_eq!(read(artifact.jar_sha1_path()), sha1(&jar_contents(&artifact)));
    assert_eq!(read(artifact.pom_sha1_path()), sha1(&pom_contents(&artifact)));
}

pub fn assert_no_artifact_files(root: &Path, coordinate: &ArtifactCoordinate) {
    let artifact = JarArtifact::new(coordinate);
    for relative in artifact.all_paths() {
        assert!(
            !root.join(relative).exists(),
            "{relative} left behind in {}",
            root.display()
        );
    }
}

/// Entries of `dir` that look like staging areas.
pub fn staging_dirs(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.file_name().to_string_lossy().to_string())
                .filter(|name| name.starts_with(".mvr-staging-"))
                .collect()
        })
        .unwrap_or_default()
}
