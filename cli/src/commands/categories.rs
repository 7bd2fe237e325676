//! Category tree command

use super::session::Session;
use crate::config::PreferencesLoader;
use anyhow::Result;
use std::path::Path;

/// Print the sidebar, highlighting the startup category
pub async fn categories_command(data: &Path, loader: PreferencesLoader) -> Result<()> {
    let session = Session::open(data, &loader).await?;
    println!("{}", session.render_sidebar());
    Ok(())
}
