//! Shared setup: catalog, preferences and a started controller

use crate::config::PreferencesLoader;
use crate::output::TableFormatter;
use anyhow::{Context, Result};
use kbase_core::{Catalog, IndexConfig, IndexController, Sidebar, SystemClock, TableView};
use std::path::Path;
use tracing::debug;

/// A loaded index with its category filter applied
pub struct Session {
    pub controller: IndexController<TableView>,
    pub sidebar: Sidebar,
    pub formatter: TableFormatter,
}

impl Session {
    /// Load the data file and preferences, then apply the startup category
    pub async fn open(data: &Path, loader: &PreferencesLoader) -> Result<Self> {
        let loaded = loader.load().await?;
        let catalog = Catalog::load(data)
            .await
            .with_context(|| format!("Failed to load index data from {}", data.display()))?;

        let config = IndexConfig::default();
        let sidebar = Sidebar::from_catalog(&catalog, &config.all_categories_label);
        let formatter = TableFormatter::new(&loaded.effective);

        let mut url = loaded.url;
        let mut controller = IndexController::new(
            TableView::new(catalog),
            SystemClock,
            &config,
            &loaded.effective,
            &mut url,
        );
        let intent = controller.start();
        debug!("Startup filter: {:?}", intent);

        Ok(Self {
            controller,
            sidebar,
            formatter,
        })
    }

    /// Status line followed by the displayed page
    pub fn render(&self) -> String {
        format!(
            "{}\n{}",
            self.formatter.format_header(
                self.controller.current_category(),
                self.controller.search_text()
            ),
            self.formatter.format_page(self.controller.view())
        )
    }

    /// The category tree with the current category highlighted
    pub fn render_sidebar(&self) -> String {
        self.formatter
            .format_sidebar(&self.sidebar, self.controller.highlighted(&self.sidebar))
    }
}
