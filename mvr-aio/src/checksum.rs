// mvr-aio/src/checksum.rs
use std::fs;
use std::io;
use std::path::Path;

use mvr_common::error::{MvrError, Result};
use sha1::{Digest, Sha1};
use tracing::debug;

/// SHA-1 digest length in bytes.
const SHA1_LEN: usize = 20;

/// Lowercase hex SHA-1 of a file's bytes.
pub fn sha1_hex(path: &Path) -> Result<String> {
    let std_file = fs::File::open(path)?;
    let mut reader = io::BufReader::new(std_file);
    let mut hasher = Sha1::new();
    let bytes_copied = io::copy(&mut reader, &mut hasher)?;
    let actual = hex::encode(hasher.finalize());
    debug!(
        "Calculated SHA1: {} ({} bytes read) for {}",
        actual,
        bytes_copied,
        path.display()
    );
    Ok(actual)
}

/// Reads a published `.sha1` sidecar. Surrounding whitespace is ignored and
/// only the first token is used, so `<digest>  <filename>` sidecars work.
pub fn read_checksum_file(path: &Path) -> Result<String> {
    let raw = fs::read(path)?;
    let content = String::from_utf8_lossy(&raw);
    let digest = content.split_whitespace().next().unwrap_or_default();

    match hex::decode(digest) {
        Ok(bytes) if bytes.len() == SHA1_LEN => Ok(digest.to_ascii_lowercase()),
        _ => Err(MvrError::ChecksumMismatch(format!(
            "Malformed checksum file {}: '{}'",
            path.display(),
            digest
        ))),
    }
}

pub fn verify_checksum(path: &Path, expected: &str) -> Result<()> {
    debug!("Verifying checksum for: {}", path.display());
    let actual = sha1_hex(path)?;
    debug!("Expected SHA1:   {}", expected);
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(MvrError::ChecksumMismatch(format!(
            "Checksum mismatch for {}: expected {}, got {}",
            path.display(),
            expected,
            actual
        )))
    }
}

/// Checks a payload against its sidecar checksum file.
pub fn verify_against_sidecar(payload: &Path, sidecar: &Path) -> Result<()> {
    let expected = read_checksum_file(sidecar)?;
    verify_checksum(payload, &expected)
}
