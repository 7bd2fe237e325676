//! # kbase CLI
//!
//! Command-line interface for kbase - browse and filter a knowledge base index.
//!
//! ## Usage
//!
//! - `kbase search "md:install"` - Filter the index and print the first page
//! - `kbase categories` - Show the sidebar category tree
//! - `kbase shell` - Interactive filtering session
//! - `kbase prefs show|set|reset` - Manage stored preferences

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod output;

use commands::{categories_command, prefs_command, search_command, shell_command, PrefsAction};
use config::PreferencesLoader;

/// kbase - filter a local knowledge base index
#[derive(Parser)]
#[command(name = "kbase")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and filter a local knowledge base index")]
#[command(long_about = None)]
struct Cli {
    /// Index data file
    #[arg(long, env = "KBASE_DATA", default_value = "data_tables.json")]
    data: PathBuf,

    /// Preferences file path
    #[arg(long, env = "KBASE_PREFS")]
    prefs: Option<PathBuf>,

    /// Page query string, e.g. "currentCategoryName=Linux&pref_TablePageLength=50"
    #[arg(long)]
    url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the index with a search expression
    Search {
        /// `category|[subcategory|]term`, `handler:term` or plain text
        query: String,

        /// Sidebar category to select before searching
        #[arg(long)]
        category: Option<String>,

        /// Page to print (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Show the sidebar category tree
    Categories,

    /// Interactive filtering session
    Shell,

    /// Manage stored preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

/// Build a preferences loader from CLI arguments
fn build_preferences_loader(cli: &Cli) -> PreferencesLoader {
    let mut loader = PreferencesLoader::new();

    if let Some(prefs_path) = &cli.prefs {
        loader = loader.with_prefs_override(prefs_path.clone());
    }

    if let Some(query) = &cli.url {
        loader = loader.with_url_query(query.clone());
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries the table
    kbase_core::init_tracing_with_debug(cli.verbose);

    let loader = build_preferences_loader(&cli);

    match cli.command {
        Commands::Search {
            query,
            category,
            page,
        } => search_command(&cli.data, loader, query, category, page).await,
        Commands::Categories => categories_command(&cli.data, loader).await,
        Commands::Shell => shell_command(&cli.data, loader).await,
        Commands::Prefs { action } => prefs_command(loader, action).await,
    }
}
