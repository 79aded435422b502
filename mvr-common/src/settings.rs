// mvr-common/src/settings.rs
//! Locates the local Maven repository the way Maven itself does: an explicit
//! override, then `<localRepository>` from `~/.m2/settings.xml`, then
//! `~/.m2/repository`.
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, error};

use crate::error::{MvrError, Result};

const SETTINGS_FILENAME: &str = "settings.xml";
const LOCAL_REPOSITORY_ELEMENT: &[u8] = b"localRepository";
const DEFAULT_REPOSITORY_DIRNAME: &str = "repository";

/// Resolves the local repository root. `maven_home` is the `.m2` directory.
pub fn resolve_local_repository(explicit: Option<&str>, maven_home: &Path) -> PathBuf {
    if let Some(dir) = explicit.filter(|s| !s.is_empty()) {
        debug!("Using explicit local repository: {}", dir);
        return PathBuf::from(dir);
    }
    if let Some(dir) = local_repository_from_settings(&maven_home.join(SETTINGS_FILENAME)) {
        debug!("Using local repository from settings.xml: {}", dir);
        return PathBuf::from(dir);
    }
    let fallback = maven_home.join(DEFAULT_REPOSITORY_DIRNAME);
    debug!("Using default local repository: {}", fallback.display());
    fallback
}

/// Reads `<localRepository>` from a settings file. A missing file, an
/// unreadable or malformed one, or an empty element all yield `None`.
pub fn local_repository_from_settings(settings_path: &Path) -> Option<String> {
    if !settings_path.is_file() {
        return None;
    }
    let content = match fs::read_to_string(settings_path) {
        Ok(content) => content,
        Err(e) => {
            error!("Error reading {}: {}", settings_path.display(), e);
            return None;
        }
    };
    match parse_local_repository(&content) {
        Ok(value) => value,
        Err(e) => {
            error!("Error reading {}: {}", settings_path.display(), e);
            None
        }
    }
}

/// Text content of the first `localRepository` element at any depth.
pub fn parse_local_repository(xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    let mut depth_inside: Option<usize> = None;
    let mut text = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| MvrError::ParseError("settings.xml", e.to_string()))?;
        match event {
            Event::Start(ref e) => {
                if let Some(depth) = depth_inside.as_mut() {
                    *depth += 1;
                } else if e.local_name().as_ref() == LOCAL_REPOSITORY_ELEMENT {
                    depth_inside = Some(0);
                }
            }
            Event::Empty(ref e) => {
                if depth_inside.is_none() && e.local_name().as_ref() == LOCAL_REPOSITORY_ELEMENT {
                    return Ok(None);
                }
            }
            Event::Text(ref t) => {
                if depth_inside.is_some() {
                    let unescaped = t
                        .unescape()
                        .map_err(|e| MvrError::ParseError("settings.xml", e.to_string()))?;
                    text.push_str(&unescaped);
                }
            }
            Event::CData(ref c) => {
                if depth_inside.is_some() {
                    text.push_str(&String::from_utf8_lossy(c));
                }
            }
            Event::End(_) => match depth_inside {
                Some(0) => break,
                Some(ref mut depth) => *depth -= 1,
                None => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    let value = text.trim();
    if depth_inside.is_none() || value.is_empty() {
        Ok(None)
    } else {
        Ok(Some(value.to_string()))
    }
}
