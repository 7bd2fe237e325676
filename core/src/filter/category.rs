//! Active category state

use crate::config::IndexConfig;
use crate::query::FilterIntent;
use tracing::debug;

/// Tracks which sidebar category is selected.
///
/// On startup the selection comes from, in order: a category forced through
/// the URL (honoured once), the default category preference, the "every
/// category" entry.
#[derive(Debug, Clone)]
pub struct CategoryState {
    current: String,
    all_label: String,
    default_preference: String,
    url_override: Option<String>,
    ignore_default: bool,
}

impl CategoryState {
    /// Create a state with "every category" selected
    pub fn new(config: &IndexConfig) -> Self {
        Self {
            current: config.all_categories_label.clone(),
            all_label: config.all_categories_label.clone(),
            default_preference: String::new(),
            url_override: None,
            ignore_default: false,
        }
    }

    /// Set the default category preference, empty for none
    pub fn with_default_preference<S: Into<String>>(mut self, category: S) -> Self {
        self.default_preference = category.into();
        self
    }

    /// Set a category forced through the URL
    pub fn with_url_override(mut self, category: Option<String>) -> Self {
        self.url_override = category;
        self
    }

    /// Label of the selected category
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Label of the "every category" entry
    pub fn all_label(&self) -> &str {
        &self.all_label
    }

    /// Whether a label names the "every category" entry
    pub fn is_all(&self, label: &str) -> bool {
        label.trim().eq_ignore_ascii_case(&self.all_label)
    }

    /// Whether the default preference is being ignored for this load
    pub fn ignores_default(&self) -> bool {
        self.ignore_default
    }

    /// Select a category from the sidebar
    pub fn select(&mut self, label: &str) -> FilterIntent {
        self.current = label.to_string();
        debug!("Category selected: {}", self.current);
        self.current_intent()
    }

    /// Decide the startup category
    pub fn resolve_initial(&mut self) -> FilterIntent {
        if let Some(label) = self.url_override.take() {
            self.ignore_default = true;
            return self.select(&label);
        }

        if !self.ignore_default && !self.default_preference.is_empty() {
            let label = self.default_preference.clone();
            return self.select(&label);
        }

        self.current_intent()
    }

    /// Go back to "every category"
    pub fn clear(&mut self) -> FilterIntent {
        self.current = self.all_label.clone();
        FilterIntent::Empty
    }

    /// The intent for the current selection
    pub fn current_intent(&self) -> FilterIntent {
        if self.is_all(&self.current) {
            FilterIntent::Empty
        } else {
            FilterIntent::for_label(&self.current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> CategoryState {
        CategoryState::new(&IndexConfig::default())
    }

    #[test]
    fn test_starts_with_all_categories() {
        let state = state();
        assert_eq!(state.current(), "All Categories");
        assert_eq!(state.current_intent(), FilterIntent::Empty);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut state = state();
        let first = state.select("Books|Fiction");
        let second = state.select("Books|Fiction");
        assert_eq!(first, second);
        assert_eq!(first.category_term(), Some("Books"));
        assert_eq!(first.subcategory_term(), Some("Fiction"));
        assert_eq!(state.current(), "Books|Fiction");
    }

    #[test]
    fn test_select_all_sentinel_any_case() {
        let mut state = state();
        state.select("Linux");
        assert_eq!(state.select("All categories"), FilterIntent::Empty);
        assert_eq!(state.select("All Categories"), FilterIntent::Empty);
    }

    #[test]
    fn test_clear() {
        let mut state = state();
        state.select("Linux");
        assert_eq!(state.clear(), FilterIntent::Empty);
        assert_eq!(state.clear(), FilterIntent::Empty);
        assert_eq!(state.current(), "All Categories");
    }

    #[test]
    fn test_initial_from_preference() {
        let mut state = state().with_default_preference("Linux");
        let intent = state.resolve_initial();
        assert_eq!(intent.category_term(), Some("Linux"));
        assert_eq!(state.current(), "Linux");
    }

    #[test]
    fn test_initial_url_override_wins_once() {
        let mut state = state()
            .with_default_preference("Linux")
            .with_url_override(Some("Books|Fiction".to_string()));

        let intent = state.resolve_initial();
        assert_eq!(intent.category_term(), Some("Books"));
        assert!(state.ignores_default());

        // The override is consumed and the preference stays ignored
        state.clear();
        assert_eq!(state.resolve_initial(), FilterIntent::Empty);
    }

    #[test]
    fn test_initial_without_anything() {
        let mut state = state();
        assert_eq!(state.resolve_initial(), FilterIntent::Empty);
    }

    #[test]
    fn test_custom_all_label() {
        let config = IndexConfig::default().with_all_categories_label("Everything");
        let mut state = CategoryState::new(&config);
        assert_eq!(state.current(), "Everything");
        assert_eq!(state.select("everything"), FilterIntent::Empty);
    }
}
