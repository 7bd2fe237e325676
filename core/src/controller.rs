//! Top-level index controller
//!
//! Owns the category state, the filter engine and the keystroke debouncer,
//! and exposes the operations bound to UI events: typing in the search box,
//! clicking a sidebar category, clearing the search.

use crate::config::{IndexConfig, Preferences};
use crate::debounce::{Clock, Debouncer, SystemClock};
use crate::filter::{CategoryState, FilterEngine, FilterMode};
use crate::query::FilterIntent;
use crate::sidebar::{Sidebar, SidebarEntry};
use crate::url_state::UrlState;
use crate::view::ViewGateway;
use std::time::Instant;
use tracing::debug;

/// Drives a table from sidebar clicks and search box input.
///
/// Typed searches go through a [`Debouncer`]; call [`IndexController::poll`]
/// once [`IndexController::next_deadline`] has passed, or
/// [`IndexController::flush`] to apply the pending search immediately.
pub struct IndexController<V: ViewGateway, C: Clock = SystemClock> {
    categories: CategoryState,
    engine: FilterEngine<V>,
    debouncer: Debouncer<String>,
    clock: C,
    search_input: String,
}

impl<V: ViewGateway, C: Clock> IndexController<V, C> {
    /// Create a controller. Consumes the URL category override, if any.
    pub fn new(
        view: V,
        clock: C,
        config: &IndexConfig,
        prefs: &Preferences,
        url: &mut UrlState,
    ) -> Self {
        let categories = CategoryState::new(config)
            .with_default_preference(prefs.default_category.clone())
            .with_url_override(url.take_category_override());
        let engine =
            FilterEngine::new(view, config).with_page_length(Some(prefs.table_page_length));
        let debouncer =
            Debouncer::new(config.debounce_delay).with_leading(config.debounce_leading);

        Self {
            categories,
            engine,
            debouncer,
            clock,
            search_input: String::new(),
        }
    }

    /// Apply the startup category
    pub fn start(&mut self) -> FilterIntent {
        let intent = self.categories.resolve_initial();
        self.engine.apply_category(&intent);
        intent
    }

    /// Sidebar click: select a category, dropping any typed search
    pub fn select_category(&mut self, label: &str) -> FilterIntent {
        self.debouncer.cancel();
        self.search_input.clear();

        let intent = self.categories.select(label);
        self.engine.apply_category(&intent);
        intent
    }

    /// Explicit "clear search": back to every category
    pub fn clear_search(&mut self) {
        self.debouncer.cancel();
        self.search_input.clear();

        let intent = self.categories.clear();
        self.engine.apply_category(&intent);
    }

    /// Search box changed; the filter is applied once typing settles.
    ///
    /// Returns whether a filter was applied right away (leading edge).
    pub fn search_input(&mut self, raw: &str) -> bool {
        self.search_input = raw.to_string();
        let now = self.clock.now();

        match self.debouncer.call(raw.trim().to_string(), now) {
            Some(value) => self.engine.apply_free_text(&value, &self.categories),
            None => false,
        }
    }

    /// Apply the typed search if the quiet period is over.
    ///
    /// Returns whether a filter was applied.
    pub fn poll(&mut self) -> bool {
        match self.debouncer.poll(self.clock.now()) {
            Some(value) => self.apply_typed(&value),
            None => false,
        }
    }

    /// Apply the pending typed search immediately
    pub fn flush(&mut self) -> bool {
        match self.debouncer.cancel() {
            Some(value) => self.apply_typed(&value),
            None => false,
        }
    }

    /// When the pending typed search becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Current contents of the search box
    pub fn search_text(&self) -> &str {
        &self.search_input
    }

    /// Label of the selected category
    pub fn current_category(&self) -> &str {
        self.categories.current()
    }

    /// The sidebar entry that should be highlighted
    pub fn highlighted<'a>(&self, sidebar: &'a Sidebar) -> Option<&'a SidebarEntry> {
        sidebar.highlighted(self.categories.current())
    }

    pub fn categories(&self) -> &CategoryState {
        &self.categories
    }

    pub fn mode(&self) -> FilterMode {
        self.engine.mode()
    }

    pub fn view(&self) -> &V {
        self.engine.view()
    }

    pub fn view_mut(&mut self) -> &mut V {
        self.engine.view_mut()
    }

    fn apply_typed(&mut self, value: &str) -> bool {
        let applied = self.engine.apply_free_text(value, &self.categories);
        if !applied {
            debug!("Ignoring short search input {:?}", value);
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Row};
    use crate::debounce::ManualClock;
    use crate::view::{Column, RecordingView, TableView, ViewCall};
    use std::time::Duration;

    fn build(
        prefs: Preferences,
        query: &str,
    ) -> (IndexController<RecordingView, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let mut url = UrlState::parse(query);
        let controller = IndexController::new(
            RecordingView::new(),
            clock.clone(),
            &IndexConfig::default(),
            &prefs,
            &mut url,
        );
        (controller, clock)
    }

    #[test]
    fn test_short_typing_then_one_application() {
        let (mut controller, clock) = build(Preferences::default(), "");

        controller.search_input("a");
        clock.advance(Duration::from_millis(100));
        controller.search_input("ab");
        clock.advance(Duration::from_millis(600));
        assert!(!controller.poll());
        assert!(controller.view().calls().is_empty());

        controller.search_input("abc");
        clock.advance(Duration::from_millis(200));
        assert!(!controller.poll());
        assert!(controller.view().calls().is_empty());

        clock.advance(Duration::from_millis(300));
        assert!(controller.poll());
        assert_eq!(controller.view().redraw_count(), 1);
        assert_eq!(controller.view().global_pattern(), Some("abc"));

        // Nothing left to fire
        clock.advance(Duration::from_secs(1));
        assert!(!controller.poll());
        assert_eq!(controller.view().redraw_count(), 1);
    }

    #[test]
    fn test_start_uses_url_then_preference() {
        let prefs = Preferences {
            default_category: "Linux".to_string(),
            ..Preferences::default()
        };

        let (mut controller, _) = build(prefs.clone(), "");
        controller.start();
        assert_eq!(controller.current_category(), "Linux");
        assert_eq!(
            controller.view().column_pattern(Column::Category),
            Some("^Linux$")
        );

        let (mut controller, _) = build(prefs, "currentCategoryName=Books");
        controller.start();
        assert_eq!(controller.current_category(), "Books");
        assert!(controller.categories().ignores_default());
    }

    #[test]
    fn test_page_length_reasserted() {
        let prefs = Preferences {
            table_page_length: 50,
            ..Preferences::default()
        };
        let (mut controller, _) = build(prefs, "");
        controller.start();

        assert_eq!(
            controller.view().calls().last(),
            Some(&ViewCall::SetPageLength(50))
        );
    }

    #[test]
    fn test_clearing_input_returns_to_category() {
        let (mut controller, clock) = build(Preferences::default(), "");
        controller.select_category("Programming|Web");

        controller.search_input("md:grid");
        clock.advance(Duration::from_millis(500));
        controller.poll();
        assert_eq!(controller.view().column_pattern(Column::Type), Some("^md"));

        controller.search_input("");
        clock.advance(Duration::from_millis(500));
        controller.poll();

        let view = controller.view();
        assert_eq!(view.column_pattern(Column::Type), None);
        assert_eq!(view.column_pattern(Column::Category), Some("^Programming$"));
        assert_eq!(view.column_pattern(Column::Subcategory), Some("^Web$"));
        assert_eq!(controller.mode(), FilterMode::CategoryFiltered);
    }

    #[test]
    fn test_category_click_cancels_pending_search() {
        let (mut controller, clock) = build(Preferences::default(), "");

        controller.search_input("rust");
        controller.select_category("Books");
        assert_eq!(controller.search_text(), "");

        clock.advance(Duration::from_secs(1));
        assert!(!controller.poll());
        assert_eq!(controller.view().global_pattern(), None);
        assert_eq!(
            controller.view().column_pattern(Column::Category),
            Some("^Books$")
        );
    }

    #[test]
    fn test_clear_search_resets_category() {
        let (mut controller, _) = build(Preferences::default(), "");
        controller.select_category("Books");
        controller.clear_search();

        assert_eq!(controller.current_category(), "All Categories");
        assert_eq!(controller.view().column_pattern(Column::Category), None);
    }

    #[test]
    fn test_flush_applies_immediately() {
        let (mut controller, _) = build(Preferences::default(), "");
        controller.search_input("Programming|");
        assert!(controller.next_deadline().is_some());

        assert!(controller.flush());
        assert_eq!(
            controller.view().column_pattern(Column::Category),
            Some("^Programming")
        );
        assert!(controller.next_deadline().is_none());
    }

    #[test]
    fn test_leading_edge_applies_first_keystroke() {
        let clock = ManualClock::new();
        let config = IndexConfig::default().with_debounce_leading(true);
        let mut controller = IndexController::new(
            RecordingView::new(),
            clock.clone(),
            &config,
            &Preferences::default(),
            &mut UrlState::default(),
        );

        assert!(controller.search_input("dune"));
        assert!(!controller.search_input("dune m"));
        clock.advance(config.debounce_delay);
        assert!(controller.poll());
        assert_eq!(controller.view().global_pattern(), Some("dune m"));
    }

    #[test]
    fn test_single_letter_segments_still_search_titles() {
        let catalog = Catalog::new(vec![
            Row::new("md", "gcc.md", "C|Pointers", "install gcc"),
            Row::new("md", "arch.md", "Linux", "install arch"),
            Row::new("pdf", "k.pdf", "C", "K&R"),
        ]);
        let mut controller = IndexController::new(
            TableView::new(catalog),
            ManualClock::new(),
            &IndexConfig::default(),
            &Preferences::default(),
            &mut UrlState::default(),
        );
        controller.start();

        controller.search_input("C|install");
        assert!(controller.flush());
        assert_eq!(controller.view().filtered_len(), 2);

        controller.search_input("m:install");
        assert!(controller.flush());
        assert_eq!(controller.view().filtered_len(), 2);
    }

    #[test]
    fn test_end_to_end_with_table_view() {
        let catalog = Catalog::new(vec![
            Row::new("md", "a.md", "Programming|Web", "Flexbox guide"),
            Row::new("pdf", "b.pdf", "Programming|C++", "Effective C++"),
            Row::new("md", "c.md", "Linux", "Install Arch"),
            Row::new("md", "d.md", "Programming|Rust", "Install Rust"),
        ]);
        let sidebar = Sidebar::from_catalog(&catalog, "All Categories");
        let clock = ManualClock::new();
        let mut controller = IndexController::new(
            TableView::new(catalog),
            clock.clone(),
            &IndexConfig::default(),
            &Preferences::default(),
            &mut UrlState::parse("currentCategoryName=Programming"),
        );

        controller.start();
        assert_eq!(controller.view().filtered_len(), 3);
        assert_eq!(
            controller.highlighted(&sidebar).map(|e| e.label.as_str()),
            Some("Programming")
        );

        controller.search_input("md:install");
        controller.flush();
        let titles: Vec<&str> = controller
            .view()
            .filtered_rows()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Install Rust"]);

        controller.search_input("Programming|C++");
        controller.flush();
        let titles: Vec<&str> = controller
            .view()
            .filtered_rows()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Effective C++"]);

        controller.select_category("All categories");
        assert_eq!(controller.view().filtered_len(), 4);
        assert_eq!(
            controller.highlighted(&sidebar).map(|e| e.label.as_str()),
            Some("All Categories")
        );
    }
}
