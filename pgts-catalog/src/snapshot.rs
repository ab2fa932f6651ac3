//! Catalog rows replayed from a JSON snapshot.

use std::path::Path;

use crate::{
    CatalogError, CatalogRows, CatalogSource, EnumRow, ForeignKeyRow, OverrideRow, Result,
    SchemaFilter, TableRow,
};

/// A catalog source that serves previously captured rows.
///
/// Rows are filtered per read the same way the live queries filter them,
/// so a snapshot of the whole database can be replayed for any schema
/// selection.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCatalog {
    rows: CatalogRows,
}

impl SnapshotCatalog {
    /// Load a snapshot written by `pgts snapshot`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::SnapshotIo {
            path: path.to_path_buf(),
            source,
        })?;
        let rows = serde_json::from_str(&content).map_err(|source| {
            CatalogError::SnapshotFormat {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self { rows })
    }

    pub fn from_rows(rows: CatalogRows) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &CatalogRows {
        &self.rows
    }
}

impl CatalogSource for SnapshotCatalog {
    async fn enum_rows(&self, filter: &SchemaFilter) -> Result<Vec<EnumRow>> {
        Ok(self
            .rows
            .enums
            .iter()
            .filter(|row| filter.includes(&row.schema))
            .cloned()
            .collect())
    }

    async fn table_rows(&self, filter: &SchemaFilter) -> Result<Vec<TableRow>> {
        Ok(self
            .rows
            .tables
            .iter()
            .filter(|row| filter.includes(&row.schema))
            .cloned()
            .collect())
    }

    async fn foreign_key_rows(&self, filter: &SchemaFilter) -> Result<Vec<ForeignKeyRow>> {
        Ok(self
            .rows
            .foreign_keys
            .iter()
            .filter(|row| filter.includes(&row.source_schema) && filter.includes(&row.target_schema))
            .cloned()
            .collect())
    }

    async fn override_rows(&self) -> Result<Vec<OverrideRow>> {
        Ok(self.rows.overrides.clone())
    }
}
