//! The index catalog
//!
//! The catalog is the full set of rows shown by the index table. It is loaded
//! once at startup from the generated data file and never mutated afterwards.

pub mod handler;
pub mod row;

pub use handler::Handler;
pub use row::{split_category, Row, CATEGORY_SEPARATOR};

use crate::error::{CatalogError, Result};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Immutable collection of index rows, sorted by title
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rows: Vec<Row>,
}

impl Catalog {
    /// Create a catalog from rows
    pub fn new(mut rows: Vec<Row>) -> Self {
        rows.sort_by_cached_key(|row| row.title.to_lowercase());
        Self { rows }
    }

    /// Parse a catalog from the JSON contents of a data file
    pub fn from_json_str(content: &str) -> Result<Self> {
        let rows: Vec<Row> =
            serde_json::from_str(content).map_err(|e| CatalogError::InvalidData {
                message: e.to_string(),
            })?;
        Ok(Self::new(rows))
    }

    /// Load a catalog from a data file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CatalogError::FileNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(path).await?;
        let catalog = Self::from_json_str(&content)?;
        info!("Loaded {} rows from {}", catalog.len(), path.display());

        Ok(catalog)
    }

    /// All rows in display order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the catalog has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
