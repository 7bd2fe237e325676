//! One-shot search command

use super::session::Session;
use crate::config::PreferencesLoader;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Filter the index once and print the requested page
pub async fn search_command(
    data: &Path,
    loader: PreferencesLoader,
    query: String,
    category: Option<String>,
    page: usize,
) -> Result<()> {
    let mut session = Session::open(data, &loader).await?;

    if let Some(label) = &category {
        session.controller.select_category(label);
    }

    session.controller.search_input(&query);
    let applied = session.controller.flush();
    if !applied && !query.trim().is_empty() {
        eprintln!(
            "{} search {} is too short, showing {}",
            "!".yellow(),
            query.trim().yellow(),
            session.controller.current_category().cyan()
        );
    }
    info!("Filter mode: {:?}", session.controller.mode());

    session
        .controller
        .view_mut()
        .set_page(page.saturating_sub(1));

    println!("{}", session.render());
    Ok(())
}
