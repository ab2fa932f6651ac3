use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_config;
use crate::{
    ops::{self, CatalogInput},
    reports::{Report, TerminalOutput},
    settings::{Flags, Settings},
};

#[derive(Args)]
pub struct SnapshotCommand {
    /// PostgreSQL connection string (defaults to database.url or $DATABASE_URL)
    #[arg(short = 'c', long = "conn", value_name = "URL")]
    pub conn: Option<String>,

    /// Schema to include; repeat for several (defaults to all)
    #[arg(short = 's', long = "schema", value_name = "SCHEMA")]
    pub schemas: Vec<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to pgts.toml (defaults to ./pgts.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SnapshotCommand {
    pub async fn run(&self) -> Result<()> {
        let pgts_toml = load_config(self.config.as_deref());
        let settings = Settings::resolve(
            pgts_toml.manifest(),
            Flags {
                conn: self.conn.clone(),
                schemas: self.schemas.clone(),
                ..Flags::default()
            },
        )?;

        let input = CatalogInput::Database(settings.connection_url()?);
        let rows = ops::read_catalog(input, &settings.filter()).await?;

        let report = ops::snapshot(&rows, self.output.as_deref())?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
