//! Parser for the search box mini-language
//!
//! Three forms are recognised, tried in this order:
//!
//! - `category|term` and `category|subcategory|term`
//! - `handler:term`
//! - anything else is plain text searched across every column
//!
//! Segments shorter than the minimum segment length are dropped so that a
//! half-typed query like `C|` does not filter on a single letter. The
//! segments that survive still apply: `C|install` searches titles only.

use super::intent::{CategoryPath, FilterIntent};
use crate::catalog::CATEGORY_SEPARATOR;

/// Separator between a handler tag and the title term
pub const HANDLER_SEPARATOR: char = ':';

/// Default minimum length of a query segment
pub const DEFAULT_MIN_SEGMENT_LEN: usize = 2;

/// Classifies raw search input into a [`FilterIntent`]
#[derive(Debug, Clone, Copy)]
pub struct QueryParser {
    min_segment_len: usize,
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SEGMENT_LEN)
    }
}

impl QueryParser {
    /// Create a parser with a custom minimum segment length
    pub fn new(min_segment_len: usize) -> Self {
        Self { min_segment_len }
    }

    /// Parse a search expression. Never fails: malformed input degrades to
    /// plain text.
    pub fn parse(&self, raw: &str) -> FilterIntent {
        let raw = raw.trim();
        if raw.is_empty() {
            return FilterIntent::Empty;
        }

        if raw.contains(CATEGORY_SEPARATOR) {
            self.parse_category_path(raw)
        } else if let Some((handler, term)) = raw.split_once(HANDLER_SEPARATOR) {
            FilterIntent::Handler {
                handler: self.segment(handler),
                term: self.segment(term),
            }
        } else {
            FilterIntent::FreeText(raw.to_string())
        }
    }

    fn parse_category_path(&self, raw: &str) -> FilterIntent {
        let parts: Vec<&str> = raw.split(CATEGORY_SEPARATOR).collect();

        let path = match parts.as_slice() {
            [category, term] => CategoryPath {
                category: self.segment(category),
                subcategory: None,
                term: self.segment(term),
            },
            [category, subcategory, term] => CategoryPath {
                category: self.segment(category),
                subcategory: self.segment(subcategory),
                term: self.segment(term),
            },
            _ => return FilterIntent::FreeText(raw.to_string()),
        };

        FilterIntent::Category(path)
    }

    /// Trim and escape a segment, dropping it when too short
    fn segment(&self, segment: &str) -> Option<String> {
        let segment = segment.trim();
        if segment.chars().count() < self.min_segment_len {
            None
        } else {
            Some(regex::escape(segment))
        }
    }
}
