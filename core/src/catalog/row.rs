//! Catalog rows

use super::handler::Handler;
use crate::view::Column;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Separator between a category and its subcategory
pub const CATEGORY_SEPARATOR: char = '|';

/// One catalog entry as stored in the index data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Type tag, determines how the entry is opened
    #[serde(rename = "i")]
    pub handler: Handler,

    /// Resource locator, relative to the web root or an absolute URL
    #[serde(rename = "p")]
    pub path: String,

    /// Category path, optionally `Category|Subcategory`
    #[serde(rename = "c")]
    pub category: String,

    /// Display text and search target
    #[serde(rename = "t")]
    pub title: String,

    /// Optional URL of the on-line source
    #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Row {
    /// Create a new row without a source
    pub fn new<H, P, C, T>(handler: H, path: P, category: C, title: T) -> Self
    where
        H: Into<Handler>,
        P: Into<String>,
        C: Into<String>,
        T: Into<String>,
    {
        Self {
            handler: handler.into(),
            path: path.into(),
            category: category.into(),
            title: title.into(),
            source: None,
        }
    }

    /// Set the on-line source
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The top-level category (the part before `|`)
    pub fn category_name(&self) -> &str {
        split_category(&self.category).0
    }

    /// The subcategory (the part after `|`), empty when there is none
    pub fn subcategory_name(&self) -> &str {
        split_category(&self.category).1.unwrap_or("")
    }

    /// The text a column search is matched against
    pub fn column_value(&self, column: Column) -> Cow<'_, str> {
        match column {
            Column::Type => Cow::Borrowed(self.handler.as_str()),
            Column::Category => Cow::Borrowed(self.category_name()),
            Column::Subcategory => Cow::Borrowed(self.subcategory_name()),
            Column::Title => Cow::Borrowed(&self.title),
        }
    }

    /// The text the global search is matched against
    pub fn search_text(&self) -> String {
        Column::ALL
            .iter()
            .map(|column| self.column_value(*column))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Split a category path on its first separator
pub fn split_category(path: &str) -> (&str, Option<&str>) {
    match path.split_once(CATEGORY_SEPARATOR) {
        Some((category, subcategory)) => (category, Some(subcategory)),
        None => (path, None),
    }
}
