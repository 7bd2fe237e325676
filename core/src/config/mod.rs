//! Configuration and preferences for kbase core
//!
//! `IndexConfig` holds the filtering knobs set in code. `Preferences` are the
//! user's persisted choices, stored by `PreferenceStore`.

pub mod preferences;
pub mod store;
pub mod types;

pub use preferences::Preferences;
pub use store::PreferenceStore;
pub use types::{IndexConfig, ALL_CATEGORIES};
