//! User preferences

use crate::error::PreferencesError;
use crate::view::DEFAULT_PAGE_LENGTH;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PREF_DEFAULT_CATEGORY: &str = "pref_DefaultCategory";
pub const PREF_OPEN_PDF_EXTERNAL: &str = "pref_OpenPDFExternal";
pub const PREF_TABLE_PAGE_LENGTH: &str = "pref_TablePageLength";

/// Persisted user preferences.
///
/// Values may be stored either typed (`true`, `25`) or as strings (`"true"`,
/// `"25"`), the way browser storage keeps them. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Preferences {
    /// Category selected on startup, empty for none
    #[serde(rename = "pref_DefaultCategory")]
    pub default_category: String,

    /// Open PDF entries in a new tab instead of inline
    #[serde(rename = "pref_OpenPDFExternal", deserialize_with = "loose")]
    pub open_pdf_external: bool,

    /// Rows per page
    #[serde(rename = "pref_TablePageLength", deserialize_with = "loose")]
    pub table_page_length: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_category: String::new(),
            open_pdf_external: true,
            table_page_length: DEFAULT_PAGE_LENGTH,
        }
    }
}

impl Preferences {
    /// Every preference key
    pub const KEYS: [&'static str; 3] = [
        PREF_DEFAULT_CATEGORY,
        PREF_OPEN_PDF_EXTERNAL,
        PREF_TABLE_PAGE_LENGTH,
    ];

    /// Set a preference from its stored string form.
    ///
    /// Returns `Ok(false)` when the key is not a preference.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool, PreferencesError> {
        match key {
            PREF_DEFAULT_CATEGORY => self.default_category = value.trim().to_string(),
            PREF_OPEN_PDF_EXTERNAL => self.open_pdf_external = parse_value(key, value)?,
            PREF_TABLE_PAGE_LENGTH => self.table_page_length = parse_value(key, value)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    /// The default category, `None` when unset
    pub fn default_category(&self) -> Option<&str> {
        if self.default_category.is_empty() {
            None
        } else {
            Some(&self.default_category)
        }
    }
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, PreferencesError>
where
    T: FromStr,
{
    value
        .trim()
        .parse()
        .map_err(|_| PreferencesError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Accept either the typed value or its string form
fn loose<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose<T> {
        Typed(T),
        Text(String),
    }

    match Loose::<T>::deserialize(deserializer)? {
        Loose::Typed(value) => Ok(value),
        Loose::Text(text) => text.trim().parse().map_err(de::Error::custom),
    }
}
