//! Preference discovery for the CLI

pub mod loader;

pub use loader::PreferencesLoader;
