//! Stored preference management

use crate::config::PreferencesLoader;
use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;
use kbase_core::Preferences;

#[derive(Subcommand, Debug, Clone)]
pub enum PrefsAction {
    /// Print stored preferences
    Show,

    /// Store a preference, e.g. `pref_DefaultCategory Linux`
    Set {
        /// Preference key
        key: String,
        /// Value in its string form
        value: String,
    },

    /// Remove stored preferences
    Reset,
}

/// Show, change or reset the stored preferences
pub async fn prefs_command(loader: PreferencesLoader, action: PrefsAction) -> Result<()> {
    let loaded = loader.load().await?;
    let store = loaded.store;

    match action {
        PrefsAction::Show => {
            println!("{} {}", "File:".dimmed(), store.path().display());
            println!("{}", serde_json::to_string_pretty(&loaded.stored)?);
        }
        PrefsAction::Set { key, value } => {
            let mut prefs = loaded.stored;
            if !prefs.set(&key, &value)? {
                bail!(
                    "Unknown preference {}; expected one of: {}",
                    key,
                    Preferences::KEYS.join(", ")
                );
            }
            store
                .save(&prefs)
                .await
                .with_context(|| format!("Failed to save {}", store.path().display()))?;
            println!("{} {} = {}", "✓".green(), key, value.trim());
        }
        PrefsAction::Reset => {
            store.clear().await?;
            println!("{} preferences reset", "✓".green());
        }
    }

    Ok(())
}
