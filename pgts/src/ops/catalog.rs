//! Catalog reading shared by `generate` and `snapshot`.

use std::path::Path;

use eyre::{Context, Result};
use pgts_catalog::{
    CatalogRows, PostgresCatalog, SchemaFilter, SnapshotCatalog, fetch_catalog,
};
use tracing::info;

/// Where the catalog rows come from.
#[derive(Debug, Clone, Copy)]
pub enum CatalogInput<'a> {
    /// A live database behind this connection string.
    Database(&'a str),
    /// A JSON file written by `pgts snapshot`.
    Snapshot(&'a Path),
}

/// Read every catalog row kind for the schemas the filter selects.
pub async fn read_catalog(input: CatalogInput<'_>, filter: &SchemaFilter) -> Result<CatalogRows> {
    match input {
        CatalogInput::Database(url) => {
            info!(schemas = ?filter.schemas(), "reading catalog from database");
            let catalog = PostgresCatalog::connect(url).await?;
            fetch_catalog(&catalog, filter)
                .await
                .wrap_err("failed to read the database catalog")
        }
        CatalogInput::Snapshot(path) => {
            info!(path = %path.display(), "reading catalog snapshot");
            let source = SnapshotCatalog::from_file(path)?;
            fetch_catalog(&source, filter)
                .await
                .wrap_err("failed to read the catalog snapshot")
        }
    }
}
