//! The tabular view abstraction the filter engine drives

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Searchable columns of the index table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Handler tag (rendered as the type icon)
    Type,
    /// Top-level category, hidden
    Category,
    /// Subcategory, hidden
    Subcategory,
    /// Entry title
    Title,
}

impl Column {
    /// Columns in table order
    pub const ALL: [Column; 4] = [
        Column::Type,
        Column::Category,
        Column::Subcategory,
        Column::Title,
    ];

    /// The column name used by the table definition
    pub fn name(&self) -> &'static str {
        match self {
            Column::Type => "type",
            Column::Category => "category",
            Column::Subcategory => "sub-category",
            Column::Title => "title",
        }
    }

    /// Look a column up by its table name
    pub fn from_name(name: &str) -> Result<Self> {
        Column::ALL
            .into_iter()
            .find(|column| column.name() == name)
            .ok_or_else(|| Error::UnknownColumn {
                name: name.to_string(),
            })
    }
}

impl FromStr for Column {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Column::from_name(s)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A search expression for one column or for the whole table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchSpec {
    /// The expression; empty means "no filter"
    pub pattern: String,
    /// Treat the pattern as a regular expression
    pub regex: bool,
    /// Split the pattern into words that must all match
    pub smart: bool,
    /// Ignore case when matching
    pub case_insensitive: bool,
}

impl SearchSpec {
    /// Create a search spec with explicit flags
    pub fn new<S: Into<String>>(pattern: S, regex: bool, smart: bool, case_insensitive: bool) -> Self {
        Self {
            pattern: pattern.into(),
            regex,
            smart,
            case_insensitive,
        }
    }

    /// Exact match of an already escaped term: `^term$`
    pub fn exact(escaped: &str) -> Self {
        Self::new(format!("^{}$", escaped), true, false, true)
    }

    /// Prefix match of an already escaped term: `^term`
    pub fn prefix(escaped: &str) -> Self {
        Self::new(format!("^{}", escaped), true, false, true)
    }

    /// Unanchored match of an already escaped term
    pub fn contains(escaped: &str) -> Self {
        Self::new(escaped, true, false, true)
    }

    /// Literal word search on raw user input
    pub fn smart(raw: &str) -> Self {
        Self::new(raw, false, true, true)
    }

    /// The empty search, which removes a filter
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Whether this search filters nothing
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// The tabular view: owns the rows, the search state and pagination.
///
/// Search state changes only become visible on [`ViewGateway::redraw`].
pub trait ViewGateway {
    /// Set a column-scoped search expression
    fn set_column_search(&mut self, column: Column, search: SearchSpec);

    /// Set the all-columns search expression
    fn set_global_search(&mut self, search: SearchSpec);

    /// Remove every column-scoped search expression
    fn clear_all_column_searches(&mut self);

    /// Remove the all-columns search expression
    fn clear_global_search(&mut self);

    /// Commit pending search changes to the visible rows
    fn redraw(&mut self);

    /// Set the number of rows per page
    fn set_page_length(&mut self, length: usize);

    /// Get the number of rows per page
    fn page_length(&self) -> usize;

    /// Remove the search expression of one column
    fn clear_column_search(&mut self, column: Column) {
        self.set_column_search(column, SearchSpec::cleared());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        assert_eq!(Column::from_name("sub-category").unwrap(), Column::Subcategory);
        assert_eq!("title".parse::<Column>().unwrap(), Column::Title);

        let err = Column::from_name("author").unwrap_err();
        assert!(matches!(err, Error::UnknownColumn { ref name } if name == "author"));
    }

    #[test]
    fn test_anchoring() {
        assert_eq!(SearchSpec::exact("Web").pattern, "^Web$");
        assert_eq!(SearchSpec::prefix("Web").pattern, "^Web");
        assert_eq!(SearchSpec::contains("Web").pattern, "Web");
        assert!(SearchSpec::cleared().is_empty());
    }
}
