//! Row handler tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a catalog entry is opened
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Handler {
    /// Standalone HTML page rendered inline
    Html,
    /// HTML documentation extracted from an archive, opened in a new tab
    HtmlExternal,
    /// External link
    Ext,
    /// Markdown page rendered inline
    Md,
    /// PDF document
    Pdf,
    /// EPUB book
    Epub,
    /// Any other tag found in the data file
    Other(String),
}

impl Handler {
    /// Get the handler tag as it appears in the data file
    pub fn as_str(&self) -> &str {
        match self {
            Handler::Html => "html",
            Handler::HtmlExternal => "html-external",
            Handler::Ext => "ext",
            Handler::Md => "md",
            Handler::Pdf => "pdf",
            Handler::Epub => "epub",
            Handler::Other(tag) => tag,
        }
    }

    /// Whether the entry is displayed inside the index page instead of a new tab
    pub fn opens_inline(&self, open_pdf_external: bool) -> bool {
        match self {
            Handler::Html | Handler::Md => true,
            Handler::Pdf => !open_pdf_external,
            _ => false,
        }
    }
}

impl From<String> for Handler {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "html" => Handler::Html,
            "html-external" => Handler::HtmlExternal,
            "ext" => Handler::Ext,
            "md" => Handler::Md,
            "pdf" => Handler::Pdf,
            "epub" => Handler::Epub,
            _ => Handler::Other(tag),
        }
    }
}

impl From<&str> for Handler {
    fn from(tag: &str) -> Self {
        Handler::from(tag.to_string())
    }
}

impl From<Handler> for String {
    fn from(handler: Handler) -> Self {
        handler.as_str().to_string()
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
