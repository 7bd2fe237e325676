//! Text formatting for table pages, rows and the category tree

use colored::{ColoredString, Colorize};
use kbase_core::{Handler, Preferences, Row, Sidebar, SidebarEntry, TableView};

/// Marker for entries that open in a new tab
const EXTERNAL_MARKER: &str = "↗";

/// Formats index output for the terminal
#[derive(Debug, Clone)]
pub struct TableFormatter {
    open_pdf_external: bool,
}

impl TableFormatter {
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            open_pdf_external: prefs.open_pdf_external,
        }
    }

    /// Status line: selected category and pending search text
    pub fn format_header(&self, category: &str, search: &str) -> String {
        if search.is_empty() {
            format!("{} {}", "Category:".dimmed(), category.cyan())
        } else {
            format!(
                "{} {}  {} {}",
                "Category:".dimmed(),
                category.cyan(),
                "Search:".dimmed(),
                search.yellow()
            )
        }
    }

    /// One table row
    pub fn format_row(&self, row: &Row) -> String {
        let mut line = format!(
            "{:<15} {}",
            handler_tag(&row.handler).to_string(),
            row.title.bold()
        );

        if !row.handler.opens_inline(self.open_pdf_external) {
            line.push(' ');
            line.push_str(&EXTERNAL_MARKER.dimmed().to_string());
        }

        let category = match row.subcategory_name() {
            "" => row.category_name().to_string(),
            sub => format!("{} › {}", row.category_name(), sub),
        };
        if !category.is_empty() {
            line.push_str(&format!("  {}", category.dimmed()));
        }

        line
    }

    /// Displayed page of the table followed by its summary
    pub fn format_page(&self, view: &TableView) -> String {
        let rows = view.page_rows();
        let mut out = String::new();

        if rows.is_empty() {
            out.push_str(&format!("{}\n", "No matching records found".yellow()));
        }
        for row in rows {
            out.push_str(&self.format_row(row));
            out.push('\n');
        }

        out.push_str(&view.info().dimmed().to_string());
        if view.page_count() > 1 {
            out.push_str(&format!(
                " {}",
                format!("(page {} of {})", view.current_page() + 1, view.page_count()).dimmed()
            ));
        }

        out
    }

    /// Category tree, marking the highlighted entry
    pub fn format_sidebar(&self, sidebar: &Sidebar, highlighted: Option<&SidebarEntry>) -> String {
        sidebar
            .entries()
            .iter()
            .map(|entry| {
                let selected = highlighted.is_some_and(|h| h.label == entry.label);
                let marker = if selected { "▸" } else { " " };
                let indent = "  ".repeat(entry.depth);
                let name = if selected {
                    entry.name.cyan().bold()
                } else {
                    entry.name.normal()
                };
                format!(
                    "{} {}{} {}",
                    marker,
                    indent,
                    name,
                    format!("({})", entry.count).dimmed()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn handler_tag(handler: &Handler) -> ColoredString {
    let tag = format!("[{}]", handler.as_str());
    match handler {
        Handler::Md => tag.green(),
        Handler::Html => tag.cyan(),
        Handler::HtmlExternal => tag.blue(),
        Handler::Ext => tag.magenta(),
        Handler::Pdf => tag.red(),
        Handler::Epub => tag.yellow(),
        Handler::Other(_) => tag.normal(),
    }
}
