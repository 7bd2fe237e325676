//! Engine configuration

use crate::query::DEFAULT_MIN_SEGMENT_LEN;
use std::time::Duration;

/// Label of the sidebar entry that shows every row
pub const ALL_CATEGORIES: &str = "All Categories";

/// Configuration for the filtering behavior of the index
#[derive(Debug, Clone, PartialEq)]
pub struct IndexConfig {
    /// Typed input shorter than this is ignored
    pub min_query_len: usize,

    /// Query segments shorter than this are dropped
    pub min_segment_len: usize,

    /// Quiet period before typed input is applied
    pub debounce_delay: Duration,

    /// Apply the first keystroke of a burst immediately
    pub debounce_leading: bool,

    /// Label of the "every category" sidebar entry
    pub all_categories_label: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_query_len: 3,
            min_segment_len: DEFAULT_MIN_SEGMENT_LEN,
            debounce_delay: Duration::from_millis(500),
            debounce_leading: false,
            all_categories_label: ALL_CATEGORIES.to_string(),
        }
    }
}

impl IndexConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum typed query length
    pub fn with_min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len;
        self
    }

    /// Set the minimum query segment length
    pub fn with_min_segment_len(mut self, len: usize) -> Self {
        self.min_segment_len = len;
        self
    }

    /// Set the debounce delay
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce_delay = delay;
        self
    }

    /// Enable or disable leading-edge debouncing
    pub fn with_debounce_leading(mut self, leading: bool) -> Self {
        self.debounce_leading = leading;
        self
    }

    /// Set the label of the "every category" entry
    pub fn with_all_categories_label<S: Into<String>>(mut self, label: S) -> Self {
        self.all_categories_label = label.into();
        self
    }
}
