use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pgts_manifest::EnumStyle;

use super::load_config;
use crate::{
    ops::{self, CatalogInput, GenerateOptions},
    reports::{Report, TerminalOutput},
    settings::{Flags, Settings},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// PostgreSQL connection string (defaults to database.url or $DATABASE_URL)
    #[arg(short = 'c', long = "conn", value_name = "URL")]
    pub conn: Option<String>,

    /// Output file (defaults to output.path from pgts.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Schema to include; repeat for several (defaults to all)
    #[arg(short = 's', long = "schema", value_name = "SCHEMA")]
    pub schemas: Vec<String>,

    /// Path to pgts.toml (defaults to ./pgts.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Root namespace of the generated file
    #[arg(long)]
    pub namespace: Option<String>,

    /// How enum types are rendered: union or enum
    #[arg(long, value_name = "STYLE")]
    pub enum_style: Option<EnumStyle>,

    /// Print the generated file instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Read catalog rows from a file written by `pgts snapshot`
    #[arg(long, value_name = "FILE", conflicts_with = "conn")]
    pub from_snapshot: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub async fn run(&self) -> Result<()> {
        let pgts_toml = load_config(self.config.as_deref());
        let settings = Settings::resolve(
            pgts_toml.manifest(),
            Flags {
                conn: self.conn.clone(),
                schemas: self.schemas.clone(),
                output: self.output.clone(),
                namespace: self.namespace.clone(),
                enum_style: self.enum_style,
            },
        )?;
        let output = settings.destination(self.dry_run)?;

        let input = match &self.from_snapshot {
            Some(path) => CatalogInput::Snapshot(path),
            None => CatalogInput::Database(settings.connection_url()?),
        };
        let rows = ops::read_catalog(input, &settings.filter()).await?;

        let report = ops::generate(
            rows,
            GenerateOptions {
                output,
                generator: settings.generator_options(),
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
