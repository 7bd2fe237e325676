//! Structured filter requests

use crate::catalog::split_category;

/// A category/subcategory narrowing, optionally with a title term.
///
/// All terms are stored regex-escaped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryPath {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub term: Option<String>,
}

impl CategoryPath {
    /// Build the path for a sidebar label such as `Programming|Web`
    pub fn from_label(label: &str) -> Self {
        let (category, subcategory) = split_category(label);
        Self {
            category: escaped_segment(category),
            subcategory: subcategory.and_then(escaped_segment),
            term: None,
        }
    }

    /// Whether the path narrows by category or subcategory at all
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.subcategory.is_none()
    }
}

/// What the user asked the table to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIntent {
    /// No predicates, every row passes
    Empty,
    /// `category|[subcategory|]term` or a sidebar selection
    Category(CategoryPath),
    /// `handler:term`; either part may be absent when too short
    Handler {
        handler: Option<String>,
        term: Option<String>,
    },
    /// Plain text searched across every column, kept unescaped
    FreeText(String),
}

impl FilterIntent {
    /// The intent of a sidebar label
    pub fn for_label(label: &str) -> Self {
        let path = CategoryPath::from_label(label);
        if path.is_empty() {
            FilterIntent::Empty
        } else {
            FilterIntent::Category(path)
        }
    }

    pub fn category_term(&self) -> Option<&str> {
        match self {
            FilterIntent::Category(path) => path.category.as_deref(),
            _ => None,
        }
    }

    pub fn subcategory_term(&self) -> Option<&str> {
        match self {
            FilterIntent::Category(path) => path.subcategory.as_deref(),
            _ => None,
        }
    }

    pub fn handler_term(&self) -> Option<&str> {
        match self {
            FilterIntent::Handler { handler, .. } => handler.as_deref(),
            _ => None,
        }
    }

    /// The title term of the category and handler modes, or the plain text
    pub fn free_text_term(&self) -> Option<&str> {
        match self {
            FilterIntent::Empty => None,
            FilterIntent::Category(path) => path.term.as_deref(),
            FilterIntent::Handler { term, .. } => term.as_deref(),
            FilterIntent::FreeText(text) => Some(text),
        }
    }

    /// Short name of the mode, used in logs
    pub fn mode_name(&self) -> &'static str {
        match self {
            FilterIntent::Empty => "empty",
            FilterIntent::Category(_) => "category",
            FilterIntent::Handler { .. } => "handler",
            FilterIntent::FreeText(_) => "free-text",
        }
    }
}

fn escaped_segment(segment: &str) -> Option<String> {
    let segment = segment.trim();
    if segment.is_empty() {
        None
    } else {
        Some(regex::escape(segment))
    }
}
