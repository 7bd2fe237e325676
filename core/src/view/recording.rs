//! A view that records every call made against it

use super::gateway::{Column, SearchSpec, ViewGateway};
use super::table::DEFAULT_PAGE_LENGTH;
use std::collections::BTreeMap;

/// One call made against a [`ViewGateway`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    SetColumnSearch(Column, SearchSpec),
    SetGlobalSearch(SearchSpec),
    ClearAllColumnSearches,
    ClearGlobalSearch,
    Redraw,
    SetPageLength(usize),
}

/// Gateway double that keeps the call log and the resulting search state
#[derive(Debug, Clone)]
pub struct RecordingView {
    calls: Vec<ViewCall>,
    columns: BTreeMap<Column, SearchSpec>,
    global: SearchSpec,
    page_length: usize,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingView {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            columns: BTreeMap::new(),
            global: SearchSpec::cleared(),
            page_length: DEFAULT_PAGE_LENGTH,
        }
    }

    /// Every call so far, oldest first
    pub fn calls(&self) -> &[ViewCall] {
        &self.calls
    }

    /// Drain the call log, keeping the search state
    pub fn take_calls(&mut self) -> Vec<ViewCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of redraws in the call log
    pub fn redraw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, ViewCall::Redraw))
            .count()
    }

    /// Current pattern of a column, `None` when it has no search
    pub fn column_pattern(&self, column: Column) -> Option<&str> {
        self.columns.get(&column).map(|spec| spec.pattern.as_str())
    }

    /// Current search spec of a column
    pub fn column_search(&self, column: Column) -> Option<&SearchSpec> {
        self.columns.get(&column)
    }

    /// Current all-columns pattern, `None` when cleared
    pub fn global_pattern(&self) -> Option<&str> {
        if self.global.is_empty() {
            None
        } else {
            Some(self.global.pattern.as_str())
        }
    }
}

impl ViewGateway for RecordingView {
    fn set_column_search(&mut self, column: Column, search: SearchSpec) {
        self.calls
            .push(ViewCall::SetColumnSearch(column, search.clone()));
        if search.is_empty() {
            self.columns.remove(&column);
        } else {
            self.columns.insert(column, search);
        }
    }

    fn set_global_search(&mut self, search: SearchSpec) {
        self.calls.push(ViewCall::SetGlobalSearch(search.clone()));
        self.global = search;
    }

    fn clear_all_column_searches(&mut self) {
        self.calls.push(ViewCall::ClearAllColumnSearches);
        self.columns.clear();
    }

    fn clear_global_search(&mut self) {
        self.calls.push(ViewCall::ClearGlobalSearch);
        self.global = SearchSpec::cleared();
    }

    fn redraw(&mut self) {
        self.calls.push(ViewCall::Redraw);
    }

    fn set_page_length(&mut self, length: usize) {
        self.calls.push(ViewCall::SetPageLength(length));
        self.page_length = length;
    }

    fn page_length(&self) -> usize {
        self.page_length
    }
}
