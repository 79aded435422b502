// mvr-net/src/validation.rs
use mvr_common::error::{MvrError, Result};
use url::Url;

/// Parses a repository URL, accepting only `http` and `https`.
pub fn validate_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str)
        .map_err(|e| MvrError::Config(format!("Failed to parse URL '{url_str}': {e}")))?;
    match url.scheme() {
        "https" | "http" => Ok(url),
        other => Err(MvrError::ValidationError(format!(
            "Invalid URL scheme for '{url_str}': Must be http or https, but got '{other}'"
        ))),
    }
}
