//! Root configuration for pgts.toml.

use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;

use crate::{EnumStyle, Error, Result};

/// Environment variable consulted for the connection string by default.
pub const DEFAULT_DATABASE_ENV: &str = "DATABASE_URL";

/// Root namespace wrapping the generated declarations by default.
pub const DEFAULT_NAMESPACE: &str = "Db";

/// Root manifest for pgts.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where and what to introspect
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Shape of the generated artifact
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[database]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection string; takes precedence over `env`
    pub url: Option<String>,

    /// Environment variable holding the connection string
    #[serde(default = "default_env")]
    pub env: String,

    /// Schemas to introspect (empty means all)
    #[serde(default)]
    pub schemas: Vec<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            env: default_env(),
            schemas: Vec::new(),
        }
    }
}

impl DatabaseConfig {
    /// The configured connection string, falling back to the environment.
    pub fn connection_url(&self) -> Option<String> {
        self.url
            .clone()
            .or_else(|| std::env::var(&self.env).ok())
            .filter(|url| !url.is_empty())
    }
}

/// `[output]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Destination of the generated file
    pub path: Option<PathBuf>,

    /// Root namespace name
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// How enum types are rendered
    #[serde(default)]
    pub enum_style: EnumStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            namespace: default_namespace(),
            enum_style: EnumStyle::default(),
        }
    }
}

fn default_env() -> String {
    DEFAULT_DATABASE_ENV.to_string()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "pgts.toml")
    }
}

impl Manifest {
    /// Parse pgts.toml content with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        manifest.validate(content, filename)?;
        Ok(manifest)
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(&self.output.namespace) {
            return Err(Error::invalid_identifier(
                &self.output.namespace,
                "namespace",
                reason,
                src,
                filename,
            ));
        }

        if self.database.env.trim().is_empty() {
            return Err(Error::validation(
                "database.env must name an environment variable",
                src,
                filename,
                "env",
            ));
        }

        if self.database.schemas.iter().any(|s| s.trim().is_empty()) {
            return Err(Error::validation(
                "schema names must not be empty",
                src,
                filename,
                "schemas",
            ));
        }

        Ok(())
    }
}

/// Check that `name` is usable as a TypeScript identifier.
///
/// Returns the reason it is not, or `None` when it is valid.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => Some("identifier cannot be empty"),
        Some(c) if c.is_ascii_digit() => Some("identifier cannot start with a digit"),
        Some(c) if !is_ident_char(c) => Some("identifier contains an invalid character"),
        Some(_) if !chars.all(is_ident_char) => Some("identifier contains an invalid character"),
        Some(_) => None,
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = Manifest::from_str("").unwrap();
        assert_eq!(manifest.database.env, "DATABASE_URL");
        assert!(manifest.database.url.is_none());
        assert!(manifest.database.schemas.is_empty());
        assert_eq!(manifest.output.namespace, "Db");
        assert_eq!(manifest.output.enum_style, EnumStyle::Union);
        assert!(manifest.output.path.is_none());
    }

    #[test]
    fn test_full_manifest() {
        let manifest = Manifest::from_str(
            r#"
            [database]
            url = "postgres://localhost/shop"
            schemas = ["public", "shop"]

            [output]
            path = "src/db.ts"
            namespace = "Database"
            enum_style = "enum"
            "#,
        )
        .unwrap();

        assert_eq!(
            manifest.database.url.as_deref(),
            Some("postgres://localhost/shop")
        );
        assert_eq!(manifest.database.schemas, ["public", "shop"]);
        assert_eq!(manifest.output.path, Some(PathBuf::from("src/db.ts")));
        assert_eq!(manifest.output.namespace, "Database");
        assert_eq!(manifest.output.enum_style, EnumStyle::Enum);
    }

    #[test]
    fn test_url_takes_precedence_over_env() {
        let config = DatabaseConfig {
            url: Some("postgres://explicit".into()),
            env: "PGTS_TEST_UNSET_VARIABLE".into(),
            schemas: vec![],
        };
        assert_eq!(config.connection_url().as_deref(), Some("postgres://explicit"));
    }

    #[test]
    fn test_missing_env_yields_none() {
        let config = DatabaseConfig {
            url: None,
            env: "PGTS_TEST_SURELY_UNSET_VARIABLE".into(),
            schemas: vec![],
        };
        assert!(config.connection_url().is_none());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Manifest::from_str("[output]\nformat = \"ts\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_enum_style_is_rejected() {
        let err = Manifest::from_str("[output]\nenum_style = \"literal\"\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_namespace_is_rejected() {
        let err = Manifest::from_str("[output]\nnamespace = \"1Db\"\n").unwrap_err();
        match *err {
            Error::InvalidIdentifier { name, span, .. } => {
                assert_eq!(name, "1Db");
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_schema_name_is_rejected() {
        let err = Manifest::from_str("[database]\nschemas = [\"public\", \" \"]\n").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("Db").is_none());
        assert!(validate_identifier("_db$").is_none());
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("9lives").is_some());
        assert!(validate_identifier("my-db").is_some());
    }
}
