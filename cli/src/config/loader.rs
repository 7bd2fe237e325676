//! CLI preferences loader for kbase
//!
//! Implements single-source priority lookup:
//! 1. --prefs file (highest priority)
//! 2. Current working directory: ./.kbase/preferences.json
//! 3. XDG config: $XDG_CONFIG_HOME/kbase/preferences.json or ~/.config/kbase/preferences.json
//! 4. Defaults (nothing stored yet; saving goes to the XDG location)
//!
//! Preference keys found in the page query string are applied on top of the
//! stored values for this run only.

use anyhow::{Context, Result};
use kbase_core::{PreferenceStore, Preferences, UrlState};
use std::path::PathBuf;
use tracing::debug;

const PREFS_DIR_NAME: &str = ".kbase";
const PREFS_FILE_NAME: &str = "preferences.json";

/// Preferences resolved for one CLI run
#[derive(Debug)]
pub struct LoadedPreferences {
    /// Where the preferences live
    pub store: PreferenceStore,
    /// Values as stored on disk
    pub stored: Preferences,
    /// Stored values with page query overrides applied
    pub effective: Preferences,
    /// Parsed page query, category override still pending
    pub url: UrlState,
}

/// CLI preferences loader
#[derive(Debug, Default)]
pub struct PreferencesLoader {
    /// Explicit preferences file
    prefs_override: Option<PathBuf>,
    /// Page query string
    url_query: Option<String>,
    /// Directory searched instead of the process working directory
    working_dir: Option<PathBuf>,
}

impl PreferencesLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Set preferences file override
    pub fn with_prefs_override(mut self, path: PathBuf) -> Self {
        self.prefs_override = Some(path);
        self
    }

    /// Set the page query string
    pub fn with_url_query(mut self, query: String) -> Self {
        self.url_query = Some(query);
        self
    }

    /// Search this directory instead of the current one
    #[cfg(test)]
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Pick the preferences file in priority order
    pub fn resolve_store(&self) -> Result<PreferenceStore> {
        if let Some(path) = &self.prefs_override {
            return Ok(PreferenceStore::new(path));
        }

        let cwd = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        let local = cwd.join(PREFS_DIR_NAME).join(PREFS_FILE_NAME);
        if local.exists() {
            debug!("Using local preferences {}", local.display());
            return Ok(PreferenceStore::new(local));
        }

        let xdg = PreferenceStore::default_path();
        if xdg.exists() {
            debug!("Using user preferences {}", xdg.display());
        } else {
            debug!("No stored preferences found, using defaults");
        }
        Ok(PreferenceStore::new(xdg))
    }

    /// Load stored preferences and apply page query overrides
    pub async fn load(&self) -> Result<LoadedPreferences> {
        let store = self.resolve_store()?;
        let stored = store.load().await.with_context(|| {
            format!("Failed to load preferences from {}", store.path().display())
        })?;

        let url = UrlState::parse(self.url_query.as_deref().unwrap_or_default());
        let mut effective = stored.clone();
        url.apply_preference_overrides(&mut effective)
            .context("Invalid preference in page query")?;

        Ok(LoadedPreferences {
            store,
            stored,
            effective,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_override_path_wins() {
        let temp_dir = tempdir().unwrap();
        let local = temp_dir.path().join(PREFS_DIR_NAME);
        std::fs::create_dir_all(&local).unwrap();
        std::fs::write(
            local.join(PREFS_FILE_NAME),
            r#"{"pref_DefaultCategory": "Local"}"#,
        )
        .unwrap();

        let explicit = temp_dir.path().join("explicit.json");
        std::fs::write(&explicit, r#"{"pref_DefaultCategory": "Explicit"}"#).unwrap();

        let loaded = PreferencesLoader::new()
            .with_working_dir(temp_dir.path().to_path_buf())
            .with_prefs_override(explicit.clone())
            .load()
            .await
            .unwrap();

        assert_eq!(loaded.store.path(), explicit.as_path());
        assert_eq!(loaded.effective.default_category(), Some("Explicit"));
    }

    #[tokio::test]
    async fn test_working_dir_file() {
        let temp_dir = tempdir().unwrap();
        let local = temp_dir.path().join(PREFS_DIR_NAME);
        std::fs::create_dir_all(&local).unwrap();
        std::fs::write(
            local.join(PREFS_FILE_NAME),
            r#"{"pref_TablePageLength": "10"}"#,
        )
        .unwrap();

        let loaded = PreferencesLoader::new()
            .with_working_dir(temp_dir.path().to_path_buf())
            .load()
            .await
            .unwrap();

        assert_eq!(loaded.stored.table_page_length, 10);
    }

    #[tokio::test]
    async fn test_query_overrides_are_not_stored() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"pref_TablePageLength": 10}"#).unwrap();

        let mut loaded = PreferencesLoader::new()
            .with_prefs_override(path)
            .with_url_query("currentCategoryName=Linux&pref_TablePageLength=50".to_string())
            .load()
            .await
            .unwrap();

        assert_eq!(loaded.stored.table_page_length, 10);
        assert_eq!(loaded.effective.table_page_length, 50);
        assert_eq!(loaded.url.take_category_override().as_deref(), Some("Linux"));
    }

    #[tokio::test]
    async fn test_bad_query_value() {
        let temp_dir = tempdir().unwrap();
        let result = PreferencesLoader::new()
            .with_prefs_override(temp_dir.path().join("missing.json"))
            .with_url_query("pref_TablePageLength=lots".to_string())
            .load()
            .await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid preference"));
    }
}
