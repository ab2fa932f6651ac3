use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use pgts_manifest::PgtsToml;

use super::{DEFAULT_CONFIG, UnwrapOrExit};
use crate::{
    ops::{self, InitOptions},
    reports::{Report, TerminalOutput},
    settings::{Flags, Settings},
};

#[derive(Args)]
pub struct InitCommand {
    /// PostgreSQL connection string (defaults to database.url or $DATABASE_URL)
    #[arg(short = 'c', long = "conn", value_name = "URL")]
    pub conn: Option<String>,

    /// Where to create the configuration file
    #[arg(long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Only write pgts.toml, do not touch the database
    #[arg(long)]
    pub skip_database: bool,
}

impl InitCommand {
    /// Run the init command
    pub async fn run(&self) -> Result<()> {
        let connection = if self.skip_database {
            None
        } else {
            // An existing configuration may already name the database.
            let pgts_toml = PgtsToml::open_or_default(&self.config).unwrap_or_exit();
            let settings = Settings::resolve(
                pgts_toml.manifest(),
                Flags {
                    conn: self.conn.clone(),
                    ..Flags::default()
                },
            )?;
            Some(settings.connection_url()?.to_string())
        };

        let report = ops::init(InitOptions {
            config_path: &self.config,
            database: connection.as_deref(),
        })
        .await?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
