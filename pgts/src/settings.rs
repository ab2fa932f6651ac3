//! Run settings merged from command-line flags and pgts.toml.
//!
//! Precedence is flag, then configuration file, then environment variable,
//! then built-in default.

use std::path::{Path, PathBuf};

use eyre::{Result, bail, eyre};
use pgts_catalog::SchemaFilter;
use pgts_codegen_typescript::GeneratorOptions;
use pgts_manifest::{EnumStyle, Manifest, validate_identifier};

/// Values supplied on the command line. `None` and empty mean "not given".
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub conn: Option<String>,
    pub schemas: Vec<String>,
    pub output: Option<PathBuf>,
    pub namespace: Option<String>,
    pub enum_style: Option<EnumStyle>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    connection: Option<String>,
    database_env: String,
    pub schemas: Vec<String>,
    pub output: Option<PathBuf>,
    pub namespace: String,
    pub enum_style: EnumStyle,
}

impl Settings {
    pub fn resolve(manifest: &Manifest, flags: Flags) -> Result<Self> {
        let namespace = flags
            .namespace
            .unwrap_or_else(|| manifest.output.namespace.clone());
        if let Some(reason) = validate_identifier(&namespace) {
            bail!("invalid namespace '{}': {}", namespace, reason);
        }

        let schemas = if flags.schemas.is_empty() {
            manifest.database.schemas.clone()
        } else {
            flags.schemas
        };

        Ok(Self {
            connection: flags
                .conn
                .filter(|url| !url.is_empty())
                .or_else(|| manifest.database.connection_url()),
            database_env: manifest.database.env.clone(),
            schemas,
            output: flags.output.or_else(|| manifest.output.path.clone()),
            namespace,
            enum_style: flags.enum_style.unwrap_or(manifest.output.enum_style),
        })
    }

    /// The connection string, or an error explaining where to put one.
    pub fn connection_url(&self) -> Result<&str> {
        self.connection.as_deref().ok_or_else(|| {
            eyre!(
                "no connection string: pass --conn, set database.url in pgts.toml or export {}",
                self.database_env
            )
        })
    }

    /// Where the generated file goes. `None` means preview on stdout.
    pub fn destination(&self, dry_run: bool) -> Result<Option<&Path>> {
        match (dry_run, self.output.as_deref()) {
            (true, _) => Ok(None),
            (false, Some(path)) => Ok(Some(path)),
            (false, None) => {
                bail!("no output path: pass --output, set output.path in pgts.toml or use --dry-run")
            }
        }
    }

    pub fn filter(&self) -> SchemaFilter {
        SchemaFilter::only(self.schemas.iter().cloned())
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            namespace: self.namespace.clone(),
            enum_style: self.enum_style,
        }
    }
}
