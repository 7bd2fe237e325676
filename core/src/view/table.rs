//! In-memory table view over a catalog

use super::gateway::{Column, SearchSpec, ViewGateway};
use super::matcher::Matcher;
use crate::catalog::{Catalog, Row};
use std::collections::BTreeMap;
use tracing::debug;

/// Rows per page when no preference is set
pub const DEFAULT_PAGE_LENGTH: usize = 25;

/// Paginated, searchable view of the catalog.
///
/// A page length of `0` shows every filtered row on a single page.
#[derive(Debug, Clone)]
pub struct TableView {
    catalog: Catalog,
    column_searches: BTreeMap<Column, SearchSpec>,
    global_search: SearchSpec,
    /// Indices into the catalog of the rows that passed the last redraw
    filtered: Vec<usize>,
    page_length: usize,
    page: usize,
    draw_count: usize,
}

impl TableView {
    /// Create a view showing every row of the catalog
    pub fn new(catalog: Catalog) -> Self {
        let filtered = (0..catalog.len()).collect();
        Self {
            catalog,
            column_searches: BTreeMap::new(),
            global_search: SearchSpec::cleared(),
            filtered,
            page_length: DEFAULT_PAGE_LENGTH,
            page: 0,
            draw_count: 0,
        }
    }

    /// The underlying catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current search expression of a column
    pub fn column_search(&self, column: Column) -> Option<&SearchSpec> {
        self.column_searches.get(&column)
    }

    /// The current all-columns search expression
    pub fn global_search(&self) -> Option<&SearchSpec> {
        if self.global_search.is_empty() {
            None
        } else {
            Some(&self.global_search)
        }
    }

    /// Rows that passed the last redraw, in display order
    pub fn filtered_rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.filtered.iter().map(|&i| &self.catalog.rows()[i])
    }

    /// Number of rows that passed the last redraw
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Number of redraws performed so far
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Number of pages for the filtered rows (at least one)
    pub fn page_count(&self) -> usize {
        if self.page_length == 0 || self.filtered.is_empty() {
            return 1;
        }
        self.filtered.len().div_ceil(self.page_length)
    }

    /// Zero-based index of the displayed page
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Move to a page, clamped to the last one
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count() - 1);
    }

    /// Rows of the displayed page
    pub fn page_rows(&self) -> Vec<&Row> {
        let (start, end) = self.page_bounds();
        self.filtered[start..end]
            .iter()
            .map(|&i| &self.catalog.rows()[i])
            .collect()
    }

    /// Summary line describing the displayed range
    pub fn info(&self) -> String {
        let (start, end) = self.page_bounds();
        let total = self.catalog.len();
        let shown = self.filtered.len();

        let range = if shown == 0 {
            "Showing 0 to 0 of 0 entries".to_string()
        } else {
            format!("Showing {} to {} of {} entries", start + 1, end, shown)
        };

        if shown == total {
            range
        } else {
            format!("{} (filtered from {} total entries)", range, total)
        }
    }

    fn page_bounds(&self) -> (usize, usize) {
        if self.page_length == 0 {
            return (0, self.filtered.len());
        }
        let start = (self.page * self.page_length).min(self.filtered.len());
        let end = (start + self.page_length).min(self.filtered.len());
        (start, end)
    }
}

impl ViewGateway for TableView {
    fn set_column_search(&mut self, column: Column, search: SearchSpec) {
        if search.is_empty() {
            self.column_searches.remove(&column);
        } else {
            self.column_searches.insert(column, search);
        }
    }

    fn set_global_search(&mut self, search: SearchSpec) {
        self.global_search = search;
    }

    fn clear_all_column_searches(&mut self) {
        self.column_searches.clear();
    }

    fn clear_global_search(&mut self) {
        self.global_search = SearchSpec::cleared();
    }

    fn redraw(&mut self) {
        let column_matchers: Vec<(Column, Matcher)> = self
            .column_searches
            .iter()
            .filter_map(|(column, spec)| Matcher::compile(spec).map(|m| (*column, m)))
            .collect();
        let global_matcher = Matcher::compile(&self.global_search);

        self.filtered = self
            .catalog
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                column_matchers
                    .iter()
                    .all(|(column, matcher)| matcher.is_match(&row.column_value(*column)))
            })
            .filter(|(_, row)| {
                global_matcher
                    .as_ref()
                    .map_or(true, |matcher| matcher.is_match(&row.search_text()))
            })
            .map(|(i, _)| i)
            .collect();

        self.page = 0;
        self.draw_count += 1;

        debug!(
            "Table redrawn: {} of {} rows pass {} column search(es)",
            self.filtered.len(),
            self.catalog.len(),
            column_matchers.len()
        );
    }

    fn set_page_length(&mut self, length: usize) {
        self.page_length = length;
        self.set_page(self.page);
    }

    fn page_length(&self) -> usize {
        self.page_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> TableView {
        let rows = vec![
            Row::new("md", "md/flexbox.md", "Programming|Web", "Flexbox guide"),
            Row::new("md", "md/async.md", "Programming|Rust", "Async Rust"),
            Row::new("pdf", "books/cpp.pdf", "Programming|C++", "Effective C++"),
            Row::new("epub", "books/dune.epub", "Books|Fiction", "Dune"),
            Row::new("ext", "https://wiki.archlinux.org", "Linux", "Arch wiki"),
        ];
        TableView::new(Catalog::new(rows))
    }

    fn titles(view: &TableView) -> Vec<String> {
        view.filtered_rows().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_searches_apply_on_redraw() {
        let mut view = sample_view();
        view.set_column_search(Column::Category, SearchSpec::exact("Books"));
        assert_eq!(view.filtered_len(), 5);

        view.redraw();
        assert_eq!(titles(&view), vec!["Dune"]);
    }

    #[test]
    fn test_column_and_global_searches_combine() {
        let mut view = sample_view();
        view.set_column_search(Column::Category, SearchSpec::prefix("Prog"));
        view.set_global_search(SearchSpec::smart("rust"));
        view.redraw();
        assert_eq!(titles(&view), vec!["Async Rust"]);

        view.clear_global_search();
        view.clear_all_column_searches();
        view.redraw();
        assert_eq!(view.filtered_len(), 5);
    }

    #[test]
    fn test_subcategory_column() {
        let mut view = sample_view();
        view.set_column_search(Column::Subcategory, SearchSpec::exact(&regex::escape("C++")));
        view.redraw();
        assert_eq!(titles(&view), vec!["Effective C++"]);
    }

    #[test]
    fn test_pagination() {
        let mut view = sample_view();
        view.set_page_length(2);
        assert_eq!(view.page_count(), 3);
        assert_eq!(view.page_rows().len(), 2);
        assert_eq!(view.info(), "Showing 1 to 2 of 5 entries");

        view.set_page(10);
        assert_eq!(view.current_page(), 2);
        assert_eq!(view.page_rows().len(), 1);

        // Redraw returns to the first page
        view.set_column_search(Column::Type, SearchSpec::prefix("md"));
        view.redraw();
        assert_eq!(view.current_page(), 0);
        assert_eq!(
            view.info(),
            "Showing 1 to 2 of 2 entries (filtered from 5 total entries)"
        );
    }

    #[test]
    fn test_zero_page_length_shows_everything() {
        let mut view = sample_view();
        view.set_page_length(0);
        assert_eq!(view.page_count(), 1);
        assert_eq!(view.page_rows().len(), 5);
    }

    #[test]
    fn test_no_matches_info() {
        let mut view = sample_view();
        view.set_global_search(SearchSpec::smart("nothing-matches-this"));
        view.redraw();
        assert_eq!(
            view.info(),
            "Showing 0 to 0 of 0 entries (filtered from 5 total entries)"
        );
        assert!(view.page_rows().is_empty());
    }
}
