//! Page URL query parameters
//!
//! Supported parameters:
//!
//! - `currentCategoryName`: category selected on load, overriding the default
//!   category preference for that load only
//! - `pref_*`: preference overrides, useful for bookmarks when browser storage
//!   is not available

use crate::config::Preferences;
use crate::error::Result;
use std::collections::BTreeMap;
use tracing::debug;

/// Parameter carrying a one-shot category override
pub const CURRENT_CATEGORY_PARAM: &str = "currentCategoryName";

/// Parsed query string of the index page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlState {
    category_override: Option<String>,
    preference_overrides: BTreeMap<String, String>,
}

impl UrlState {
    /// Parse a query string, with or without the leading `?`
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut state = Self::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if key == CURRENT_CATEGORY_PARAM {
                let value = value.trim();
                if !value.is_empty() {
                    state.category_override = Some(value.to_string());
                }
            } else if Preferences::KEYS.iter().any(|k| *k == key) {
                state
                    .preference_overrides
                    .insert(key.into_owned(), value.into_owned());
            }
        }

        state
    }

    /// Consume the category override; later calls return `None`
    pub fn take_category_override(&mut self) -> Option<String> {
        self.category_override.take()
    }

    /// Whether a category override is still pending
    pub fn has_category_override(&self) -> bool {
        self.category_override.is_some()
    }

    /// Apply the `pref_*` overrides on top of stored preferences
    pub fn apply_preference_overrides(&self, prefs: &mut Preferences) -> Result<()> {
        for (key, value) in &self.preference_overrides {
            prefs.set(key, value)?;
            debug!("Preference {} overridden from URL", key);
        }
        Ok(())
    }
}
