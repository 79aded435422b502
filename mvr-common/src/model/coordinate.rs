// mvr-common/src/model/coordinate.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MvrError, Result};

/// A dependency as requested by a caller: `group:artifact:version`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ArtifactCoordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ArtifactCoordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// Checks that every part maps to plain path segments below a repository
    /// root. Group ids are split on `.`, so they may not have empty parts.
    pub fn validate(&self) -> Result<()> {
        let group_ok = self.group_id.split('.').all(is_plain_segment);
        if group_ok && is_plain_segment(&self.artifact_id) && is_plain_segment(&self.version) {
            Ok(())
        } else {
            Err(MvrError::ParseError(
                "artifact coordinate",
                format!("'{self}' does not map to a path inside the repository"),
            ))
        }
    }
}

fn is_plain_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

impl fmt::Display for ArtifactCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl FromStr for ArtifactCoordinate {
    type Err = MvrError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        match parts.as_slice() {
            [group, artifact, version] => {
                let coordinate = Self::new(*group, *artifact, *version);
                coordinate.validate()?;
                Ok(coordinate)
            }
            _ => Err(MvrError::ParseError(
                "artifact coordinate",
                format!("expected 'group:artifact:version', got '{s}'"),
            )),
        }
    }
}
