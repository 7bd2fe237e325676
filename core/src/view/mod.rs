//! Tabular view of the catalog
//!
//! [`ViewGateway`] is the seam between the filter engine and whatever renders
//! the index table. [`TableView`] is the in-memory implementation used by the
//! CLI. Tests use `RecordingView`, which logs every call.

pub mod gateway;
pub mod matcher;
#[cfg(test)]
pub mod recording;
pub mod table;

pub use gateway::{Column, SearchSpec, ViewGateway};
pub use matcher::Matcher;
#[cfg(test)]
pub use recording::{RecordingView, ViewCall};
pub use table::{TableView, DEFAULT_PAGE_LENGTH};
