// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Catalog row provider for pgts.
//!
//! Reads the four row kinds the generator needs (enum types, tables with
//! their columns, foreign keys and operator overrides) from a
//! [`CatalogSource`]. Two sources are provided:
//!
//! - [`PostgresCatalog`] - a live PostgreSQL connection
//! - [`SnapshotCatalog`] - rows previously dumped to a JSON file
//!
//! ```ignore
//! let catalog = PostgresCatalog::connect(url).await?;
//! let rows = fetch_catalog(&catalog, &SchemaFilter::only(["public"])).await?;
//! ```

mod error;
mod filter;
mod postgres;
mod rows;
mod snapshot;
mod source;

pub use error::{CatalogError, ReadKind, Result};
pub use filter::SchemaFilter;
pub use postgres::PostgresCatalog;
pub use rows::{CatalogRows, ColumnRow, EnumRow, ForeignKeyRow, OverrideRow, TableRow};
pub use snapshot::SnapshotCatalog;
pub use source::{CatalogSource, fetch_catalog};
