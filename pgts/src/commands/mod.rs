mod completions;
mod generate;
mod init;
mod snapshot;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use pgts_manifest::PgtsToml;
use snapshot::SnapshotCommand;

/// Configuration file looked up when `--config` is not given.
pub(crate) const DEFAULT_CONFIG: &str = "pgts.toml";

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pgts_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Load the configuration file.
///
/// An explicit `--config` must exist; the implicit `./pgts.toml` may be absent.
pub(crate) fn load_config(config: Option<&Path>) -> PgtsToml {
    match config {
        Some(path) => PgtsToml::open(path).unwrap_or_exit(),
        None => PgtsToml::open_or_default(PathBuf::from(DEFAULT_CONFIG)).unwrap_or_exit(),
    }
}

#[derive(Parser)]
#[command(name = "pgts")]
#[command(version)]
#[command(about = "Generate TypeScript declarations from a PostgreSQL catalog")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run().await,
            Commands::Init(cmd) => cmd.run().await,
            Commands::Snapshot(cmd) => cmd.run().await,
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the TypeScript declaration file
    Generate(GenerateCommand),

    /// Create pgts.toml and provision the type override table
    Init(InitCommand),

    /// Dump the catalog rows as JSON for offline generation
    Snapshot(SnapshotCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
