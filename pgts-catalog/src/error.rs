use std::{fmt, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// The four independent catalog reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadKind {
    Enums,
    Tables,
    ForeignKeys,
    Overrides,
}

impl ReadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadKind::Enums => "enum types",
            ReadKind::Tables => "tables",
            ReadKind::ForeignKeys => "foreign keys",
            ReadKind::Overrides => "type overrides",
        }
    }
}

impl fmt::Display for ReadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum CatalogError {
    #[error("failed to connect to the database")]
    #[diagnostic(
        code(pgts::catalog::connect),
        help("check the connection string and that the server accepts connections")
    )]
    Connect(#[source] tokio_postgres::Error),

    #[error("failed to read {kind} from the catalog")]
    #[diagnostic(code(pgts::catalog::query))]
    Query {
        kind: ReadKind,
        #[source]
        source: tokio_postgres::Error,
    },

    #[error("unexpected {kind} row: {message}")]
    #[diagnostic(code(pgts::catalog::decode))]
    Decode { kind: ReadKind, message: String },

    #[error("failed to provision the override table")]
    #[diagnostic(
        code(pgts::catalog::provision),
        help("the role needs CREATE privileges on the database")
    )]
    Provision(#[source] tokio_postgres::Error),

    #[error("failed to read catalog snapshot '{path}'")]
    #[diagnostic(code(pgts::catalog::snapshot))]
    SnapshotIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog snapshot '{path}'")]
    #[diagnostic(
        code(pgts::catalog::snapshot_format),
        help("snapshots are produced by 'pgts snapshot'")
    )]
    SnapshotFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Create a decode error for a read.
    pub fn decode(kind: ReadKind, message: impl Into<String>) -> Self {
        CatalogError::Decode {
            kind,
            message: message.into(),
        }
    }

    /// The read that failed, if the error belongs to one.
    pub fn kind(&self) -> Option<ReadKind> {
        match self {
            CatalogError::Query { kind, .. } | CatalogError::Decode { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_message() {
        let err = CatalogError::decode(ReadKind::Tables, "column 'columns' is not an array");
        assert_eq!(
            err.to_string(),
            "unexpected tables row: column 'columns' is not an array"
        );
        assert_eq!(err.kind(), Some(ReadKind::Tables));
    }
}
