//! Stored login preference.
//!
//! Persists `{saveLogin, username, password}` in `<base>/login_prefs.json`
//! with restricted permissions (0600). The password is stored as entered;
//! the file format is a stable contract with earlier releases, so unknown
//! keys are carried through saves untouched.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Stored login preference file contents.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginPrefs {
    /// Whether credentials should be remembered across sessions.
    #[serde(rename = "saveLogin", default)]
    pub save_login: bool,
    /// Remembered username.
    #[serde(default)]
    pub username: String,
    /// Remembered password, plaintext.
    #[serde(default)]
    pub password: String,
    /// Keys written by other versions of the file. Preserved on save and
    /// removed together with everything else when the file is cleared.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl LoginPrefs {
    /// Returns the default path of the login preference file.
    pub fn default_path() -> PathBuf {
        paths::login_prefs_path()
    }

    /// Loads the login preference from disk.
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read login prefs from {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse login prefs from {}", path.display()))
    }

    /// Saves the login preference to disk with restricted permissions (0600).
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize login prefs")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(path, contents)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }

    /// Removes the login preference file, erasing every stored key.
    /// Returns whether a file existed.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear_at(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
        Ok(true)
    }

    /// Applies the remember-me choice for one submission.
    ///
    /// With `remember` set, the credentials are written (keeping unknown keys
    /// from the existing file). Otherwise the whole file is removed.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn store(path: &Path, remember: bool, username: &str, password: &str) -> Result<()> {
        if remember {
            let mut prefs = Self::load_from(path).unwrap_or_default();
            prefs.save_login = true;
            prefs.username = username.to_string();
            prefs.password = password.to_string();
            prefs.save_to(path)
        } else {
            Self::clear_at(path).map(|_| ())
        }
    }
}
