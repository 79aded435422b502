// mvr-net/src/repository.rs
use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use mvr_common::config::Config;
use mvr_common::error::{MvrError, Result};
use url::Url;

use crate::validation::validate_url;

/// HTTP Basic credentials for a repository.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// `None` unless `username` is non-empty; a missing password is sent as
    /// an empty one.
    pub fn new(username: Option<&str>, password: Option<&str>) -> Option<Self> {
        let username = username.filter(|u| !u.is_empty())?;
        Some(Self {
            username: username.to_string(),
            password: password.unwrap_or_default().to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Authorization` header.
    pub fn authorization_header(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {encoded}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A Maven-layout remote repository.
#[derive(Debug, Clone)]
pub struct RemoteRepository {
    id: String,
    base_url: String,
    credentials: Option<Credentials>,
}

impl RemoteRepository {
    pub fn new(
        id: impl Into<String>,
        base_url: &str,
        credentials: Option<Credentials>,
    ) -> Result<Self> {
        validate_url(base_url)?;
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Ok(Self {
            id: id.into(),
            base_url,
            credentials,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.repository_id.clone(),
            &config.repository_url,
            Credentials::new(
                config.repository_username.as_deref(),
                config.repository_password.as_deref(),
            ),
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Base URL, always ending in `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Absolute URL of a repository-relative path.
    pub fn url_for(&self, relative: &str) -> Result<Url> {
        let joined = format!("{}{}", self.base_url, relative.trim_start_matches('/'));
        Url::parse(&joined)
            .map_err(|e| MvrError::ValidationError(format!("Invalid artifact URL '{joined}': {e}")))
    }
}
