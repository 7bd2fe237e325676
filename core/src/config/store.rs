//! Preference storage backed by a JSON file

use super::preferences::Preferences;
use crate::error::{PreferencesError, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Default preferences file name
const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Stores [`Preferences`] in a JSON file
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Create a store for a specific file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the default preferences file path
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("kbase");
        path.push(PREFERENCES_FILE_NAME);
        path
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, falling back to defaults when the file is missing
    pub async fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            debug!(
                "Preferences file {} does not exist, using defaults",
                self.path.display()
            );
            return Ok(Preferences::default());
        }

        let content = fs::read_to_string(&self.path).await?;
        let prefs = serde_json::from_str(&content).map_err(|e| PreferencesError::Malformed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        Ok(prefs)
    }

    /// Save preferences, creating the parent directory if needed
    pub async fn save(&self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, content).await?;
        info!("Saved preferences to {}", self.path.display());

        Ok(())
    }

    /// Remove stored preferences
    pub async fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}
