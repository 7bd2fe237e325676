//! CLI command implementations

pub mod categories;
pub mod prefs;
pub mod search;
pub mod session;
pub mod shell;

pub use categories::categories_command;
pub use prefs::{prefs_command, PrefsAction};
pub use search::search_command;
pub use shell::shell_command;
