//! # kbase Core
//!
//! Core library for kbase - the filtering engine behind a local knowledge base index.
//!
//! This library turns sidebar category selections and typed search expressions
//! (`category|subcategory|term`, `handler:term`, plain text) into column-level
//! search predicates applied to a tabular view of the catalog.

// Core modules
pub mod catalog;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod query;
pub mod sidebar;
pub mod url_state;
pub mod view;

// Re-export commonly used types
pub use catalog::{Catalog, Handler, Row};
pub use config::{IndexConfig, PreferenceStore, Preferences};
pub use controller::IndexController;
pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use filter::{CategoryState, FilterEngine, FilterMode};
pub use query::{CategoryPath, FilterIntent, QueryParser};
pub use sidebar::{Sidebar, SidebarEntry};
pub use url_state::UrlState;
pub use view::{Column, SearchSpec, TableView, ViewGateway};

/// Current version of the kbase-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
