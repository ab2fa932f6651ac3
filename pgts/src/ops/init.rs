//! Init operation - starter configuration and override table.

use std::path::Path;

use eyre::{Context, Result};
use pgts_catalog::PostgresCatalog;
use pgts_core::{File, WriteResult};
use pgts_ir::{OVERRIDE_SCHEMA, OVERRIDE_TABLE};
use pgts_manifest::STARTER_MANIFEST;
use tracing::info;

use crate::reports::InitReport;

/// Options for the init operation.
pub struct InitOptions<'a> {
    /// Where to write the starter configuration.
    pub config_path: &'a Path,
    /// Connection string of the database to provision, `None` to skip it.
    pub database: Option<&'a str>,
}

/// Execute the init operation.
///
/// Both steps are idempotent: an existing configuration file is kept and
/// the override schema and table are only created when missing.
pub async fn init(opts: InitOptions<'_>) -> Result<InitReport> {
    let written = File::new(opts.config_path, STARTER_MANIFEST)
        .if_missing()
        .write()
        .wrap_err("Failed to write the starter configuration")?;

    let override_table = match opts.database {
        Some(url) => {
            let catalog = PostgresCatalog::connect(url).await?;
            catalog.provision_overrides().await?;
            info!(schema = OVERRIDE_SCHEMA, table = OVERRIDE_TABLE, "override table ready");
            Some(format!("{}.{}", OVERRIDE_SCHEMA, OVERRIDE_TABLE))
        }
        None => None,
    };

    Ok(InitReport {
        config_path: opts.config_path.to_path_buf(),
        config_created: written == WriteResult::Written,
        override_table,
    })
}
