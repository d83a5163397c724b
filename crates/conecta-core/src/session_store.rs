//! On-disk persistence for the backend session cookie.
//!
//! The backend authenticates with a session cookie; the CLI has to carry it
//! across invocations. The cookie strings live in
//! ${CONECTA_HOME}/session.json, written with owner-only permissions. An
//! absent or unreadable file simply means an anonymous session.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use reqwest::cookie::{CookieStore, Jar};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::paths;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStore {
    /// `name=value` cookie pairs for the backend origin.
    #[serde(default)]
    pub cookies: Vec<String>,
}

impl SessionStore {
    /// Loads the persisted session from the default path.
    pub fn load() -> Self {
        Self::load_from(&paths::session_path())
    }

    /// Loads the persisted session from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        serde_json::from_str(&contents).unwrap_or_else(|error| {
            tracing::debug!("ignoring corrupt session file {}: {error}", path.display());
            Self::default()
        })
    }

    /// Captures the cookies a jar currently holds for the backend origin.
    pub fn capture_from_jar(jar: &Jar, base_url: &Url) -> Self {
        let cookies = jar
            .cookies(base_url)
            .and_then(|header| header.to_str().map(str::to_string).ok())
            .map(|header| header.split("; ").map(str::to_string).collect())
            .unwrap_or_default();
        Self { cookies }
    }

    /// Seeds a cookie jar with the persisted cookies.
    pub fn apply_to_jar(&self, jar: &Jar, base_url: &Url) {
        for cookie in &self.cookies {
            jar.add_cookie_str(cookie, base_url);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Saves the session to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&paths::session_path())
    }

    /// Saves the session to a specific path with owner-only permissions.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to encode session")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write session to {}", path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))
                .with_context(|| format!("Failed to restrict {}", path.display()))?;
        }

        Ok(())
    }

    /// Clears the persisted session at the default path.
    pub fn clear() -> Result<()> {
        Self::clear_at(&paths::session_path())
    }

    /// Clears the persisted session at a specific path.
    pub fn clear_at(path: &Path) -> Result<()> {
        if path.exists() {
            Self::default().save_to(path)?;
        }
        Ok(())
    }
}
