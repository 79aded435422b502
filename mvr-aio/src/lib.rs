// mvr-aio/src/lib.rs
//! Filesystem operations for mvr (checksums, repository trees, staging)

pub mod checksum;
pub mod fs;
pub mod staging;

pub use checksum::{sha1_hex, verify_against_sidecar, verify_checksum};
pub use fs::{commit_file, create_artifact_dir, remove_artifact_files};
pub use staging::StagingArea;
