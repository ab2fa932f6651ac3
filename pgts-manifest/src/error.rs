use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'pgts init' to create a starter pgts.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse pgts.toml")]
    #[diagnostic(code(pgts::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(pgts::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid {context} '{name}'")]
    #[diagnostic(
        code(pgts::invalid_identifier),
        help("{reason}. Use only letters, digits, '_' and '$', not starting with a digit.")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error pointing at `needle` when it occurs in the source
    pub fn validation(message: impl Into<String>, src: &str, filename: &str, needle: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span: find_span(src, needle),
            message: message.into(),
        })
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        let name = name.into();
        Box::new(Error::InvalidIdentifier {
            span: find_span(src, &format!("\"{}\"", name)),
            src: NamedSource::new(filename, src.to_string()),
            name,
            context: context.into(),
            reason: reason.into(),
        })
    }
}

/// Locate the first occurrence of `needle` in the source.
fn find_span(src: &str, needle: &str) -> Option<SourceSpan> {
    if needle.is_empty() {
        return None;
    }
    src.find(needle)
        .map(|offset| SourceSpan::from((offset, needle.len())))
}
