//! Terminal rendering for the index table and sidebar

pub mod formatter;

pub use formatter::TableFormatter;
