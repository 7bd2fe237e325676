//! Translates filter intents into view searches

use super::category::CategoryState;
use crate::config::IndexConfig;
use crate::query::{FilterIntent, QueryParser};
use crate::view::{Column, SearchSpec, ViewGateway};
use tracing::debug;

/// Which kind of typed search is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// `category|[subcategory|]term`
    Category,
    /// `handler:term`
    Handler,
    /// Plain text across every column
    Plain,
}

/// Filter state of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Nothing applied yet
    Idle,
    /// A sidebar category (possibly "every category") is applied
    CategoryFiltered,
    /// A typed search is applied
    TextFiltered(TextMode),
}

/// The single place where intents become column searches.
///
/// Every operation applies a complete set of searches and then redraws once,
/// so a partial filter is never visible.
pub struct FilterEngine<V: ViewGateway> {
    view: V,
    parser: QueryParser,
    min_query_len: usize,
    page_length: Option<usize>,
    mode: FilterMode,
}

impl<V: ViewGateway> FilterEngine<V> {
    /// Create an engine driving a view
    pub fn new(view: V, config: &IndexConfig) -> Self {
        Self {
            view,
            parser: QueryParser::new(config.min_segment_len),
            min_query_len: config.min_query_len,
            page_length: None,
            mode: FilterMode::Idle,
        }
    }

    /// Reassert this page length after every redraw
    pub fn with_page_length(mut self, page_length: Option<usize>) -> Self {
        self.page_length = page_length;
        self
    }

    /// Change the page length preference
    pub fn set_page_length_preference(&mut self, page_length: Option<usize>) {
        self.page_length = page_length;
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Current filter state
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Apply a category selection, replacing every previous filter.
    ///
    /// Only the category and subcategory terms of the intent are used; they
    /// are matched exactly.
    pub fn apply_category(&mut self, intent: &FilterIntent) {
        debug!(
            "Applying category filter: category={:?} subcategory={:?}",
            intent.category_term(),
            intent.subcategory_term()
        );
        self.reset_to_category(intent);
        self.mode = FilterMode::CategoryFiltered;
        self.commit();
    }

    /// Apply typed search input.
    ///
    /// Empty input falls back to the current category. Input shorter than
    /// the minimum query length is ignored without touching the view.
    /// Returns whether anything was applied.
    pub fn apply_free_text(&mut self, raw: &str, categories: &CategoryState) -> bool {
        let raw = raw.trim();

        if raw.is_empty() {
            self.apply_category(&categories.current_intent());
            return true;
        }

        if raw.chars().count() < self.min_query_len {
            return false;
        }

        let intent = self.parser.parse(raw);
        debug!("Applying {} search for {:?}", intent.mode_name(), raw);

        match &intent {
            FilterIntent::Category(path) => {
                self.view.clear_all_column_searches();
                self.view.clear_global_search();
                if let Some(category) = &path.category {
                    self.view
                        .set_column_search(Column::Category, SearchSpec::prefix(category));
                }
                if let Some(subcategory) = &path.subcategory {
                    self.view
                        .set_column_search(Column::Subcategory, SearchSpec::prefix(subcategory));
                }
                self.apply_title_term(path.term.as_deref());
                self.mode = FilterMode::TextFiltered(TextMode::Category);
            }
            FilterIntent::Handler { handler, term } => {
                self.reset_to_category(&categories.current_intent());
                if let Some(handler) = handler {
                    self.view
                        .set_column_search(Column::Type, SearchSpec::prefix(handler));
                }
                self.apply_title_term(term.as_deref());
                self.mode = FilterMode::TextFiltered(TextMode::Handler);
            }
            FilterIntent::FreeText(text) => {
                self.reset_to_category(&categories.current_intent());
                self.view.set_global_search(SearchSpec::smart(text));
                self.mode = FilterMode::TextFiltered(TextMode::Plain);
            }
            FilterIntent::Empty => {
                self.reset_to_category(&categories.current_intent());
                self.mode = FilterMode::CategoryFiltered;
            }
        }

        self.commit();
        true
    }

    /// Clear everything, then set exact category and subcategory searches
    fn reset_to_category(&mut self, intent: &FilterIntent) {
        self.view.clear_all_column_searches();
        self.view.clear_global_search();

        if let Some(category) = intent.category_term() {
            self.view
                .set_column_search(Column::Category, SearchSpec::exact(category));
        }
        if let Some(subcategory) = intent.subcategory_term() {
            self.view
                .set_column_search(Column::Subcategory, SearchSpec::exact(subcategory));
        }
    }

    fn apply_title_term(&mut self, term: Option<&str>) {
        match term {
            Some(term) => self
                .view
                .set_column_search(Column::Title, SearchSpec::contains(term)),
            None => self.view.clear_column_search(Column::Title),
        }
    }

    fn commit(&mut self) {
        self.view.redraw();
        if let Some(length) = self.page_length {
            self.view.set_page_length(length);
        }
    }
}
