//! Sidebar category browser

use crate::catalog::{Catalog, CATEGORY_SEPARATOR};
use std::collections::BTreeMap;

/// One clickable sidebar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    /// Label passed to category selection (`Category` or `Category|Subcategory`)
    pub label: String,
    /// Text shown for the entry
    pub name: String,
    /// Number of rows under the entry
    pub count: usize,
    /// 0 for "every category" and top-level categories, 1 for subcategories
    pub depth: usize,
}

/// The category tree shown beside the table
#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    entries: Vec<SidebarEntry>,
}

impl Sidebar {
    /// Build the tree from the catalog, categories in alphabetical order
    pub fn from_catalog(catalog: &Catalog, all_label: &str) -> Self {
        let mut tree: BTreeMap<&str, (usize, BTreeMap<&str, usize>)> = BTreeMap::new();

        for row in catalog.rows() {
            let category = row.category_name();
            if category.is_empty() {
                continue;
            }
            let (count, subcategories) = tree.entry(category).or_default();
            *count += 1;

            let subcategory = row.subcategory_name();
            if !subcategory.is_empty() {
                *subcategories.entry(subcategory).or_default() += 1;
            }
        }

        let mut entries = vec![SidebarEntry {
            label: all_label.to_string(),
            name: all_label.to_string(),
            count: catalog.len(),
            depth: 0,
        }];

        for (category, (count, subcategories)) in tree {
            entries.push(SidebarEntry {
                label: category.to_string(),
                name: category.to_string(),
                count,
                depth: 0,
            });
            for (subcategory, count) in subcategories {
                entries.push(SidebarEntry {
                    label: format!("{}{}{}", category, CATEGORY_SEPARATOR, subcategory),
                    name: subcategory.to_string(),
                    count,
                    depth: 1,
                });
            }
        }

        Self { entries }
    }

    /// Every entry in display order, "every category" first
    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    /// Find an entry by its label
    pub fn find(&self, label: &str) -> Option<&SidebarEntry> {
        self.entries.iter().find(|entry| entry.label == label)
    }

    /// The entry to highlight for the current category.
    ///
    /// The "every category" entry matches regardless of case.
    pub fn highlighted(&self, current: &str) -> Option<&SidebarEntry> {
        self.find(current).or_else(|| {
            self.entries
                .first()
                .filter(|all| all.label.eq_ignore_ascii_case(current.trim()))
        })
    }
}
