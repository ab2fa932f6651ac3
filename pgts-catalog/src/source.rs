//! The catalog source abstraction and the combined fetch.

use tracing::debug;

use crate::{
    CatalogRows, EnumRow, ForeignKeyRow, OverrideRow, Result, SchemaFilter, TableRow,
};

/// Something that can answer the four catalog reads.
///
/// Each read receives the schema filter explicitly; sources keep no
/// filter state of their own.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Enum types with their labels.
    async fn enum_rows(&self, filter: &SchemaFilter) -> Result<Vec<EnumRow>>;

    /// Tables with their columns in catalog order.
    async fn table_rows(&self, filter: &SchemaFilter) -> Result<Vec<TableRow>>;

    /// Foreign keys, one row per (constraint, source column).
    async fn foreign_key_rows(&self, filter: &SchemaFilter) -> Result<Vec<ForeignKeyRow>>;

    /// Operator overrides from the reserved override table.
    async fn override_rows(&self) -> Result<Vec<OverrideRow>>;
}

/// Issue all four reads concurrently and wait for every one of them.
///
/// A failed enum, table or foreign-key read fails the whole fetch. A failed
/// override read is treated as "no overrides", since the override table is
/// provisioned by operators and is commonly absent.
pub async fn fetch_catalog<S: CatalogSource>(
    source: &S,
    filter: &SchemaFilter,
) -> Result<CatalogRows> {
    let (enums, tables, foreign_keys, overrides) = tokio::join!(
        source.enum_rows(filter),
        source.table_rows(filter),
        source.foreign_key_rows(filter),
        source.override_rows(),
    );

    let overrides = overrides.unwrap_or_else(|err| {
        debug!(error = %err, "override table unavailable, continuing without overrides");
        Vec::new()
    });

    let rows = CatalogRows {
        enums: enums?,
        tables: tables?,
        foreign_keys: foreign_keys?,
        overrides,
    };

    debug!(
        enums = rows.enums.len(),
        tables = rows.tables.len(),
        foreign_keys = rows.foreign_keys.len(),
        overrides = rows.overrides.len(),
        "catalog fetched"
    );

    Ok(rows)
}
