// mvr-common/src/model/artifact.rs
use std::fmt;

use super::coordinate::ArtifactCoordinate;

/// The four repository-relative files that make up one jar artifact, laid out
/// the Maven way: `group/path/artifact/version/artifact-version.<ext>`.
///
/// Paths always use `/` so they can be appended to a repository URL as well
/// as joined onto a local directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JarArtifact {
    coordinate: ArtifactCoordinate,
    jar_path: String,
    jar_sha1_path: String,
    pom_path: String,
    pom_sha1_path: String,
}

impl JarArtifact {
    pub fn new(coordinate: &ArtifactCoordinate) -> Self {
        let base = format!(
            "{}/{}/{}/{}-{}",
            coordinate.group_id.replace('.', "/"),
            coordinate.artifact_id,
            coordinate.version,
            coordinate.artifact_id,
            coordinate.version
        );
        Self {
            coordinate: coordinate.clone(),
            jar_path: format!("{base}.jar"),
            jar_sha1_path: format!("{base}.jar.sha1"),
            pom_path: format!("{base}.pom"),
            pom_sha1_path: format!("{base}.pom.sha1"),
        }
    }

    pub fn coordinate(&self) -> &ArtifactCoordinate {
        &self.coordinate
    }

    pub fn jar_path(&self) -> &str {
        &self.jar_path
    }

    pub fn jar_sha1_path(&self) -> &str {
        &self.jar_sha1_path
    }

    pub fn pom_path(&self) -> &str {
        &self.pom_path
    }

    pub fn pom_sha1_path(&self) -> &str {
        &self.pom_sha1_path
    }

    /// The directory shared by all four files.
    pub fn directory(&self) -> &str {
        self.jar_path
            .rsplit_once('/')
            .map(|(dir, _)| dir)
            .unwrap_or_default()
    }

    /// All four paths, in the order they are fetched.
    pub fn all_paths(&self) -> [&str; 4] {
        [
            &self.pom_sha1_path,
            &self.pom_path,
            &self.jar_sha1_path,
            &self.jar_path,
        ]
    }
}

impl From<&ArtifactCoordinate> for JarArtifact {
    fn from(coordinate: &ArtifactCoordinate) -> Self {
        Self::new(coordinate)
    }
}

impl fmt::Display for JarArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.coordinate.fmt(f)
    }
}
