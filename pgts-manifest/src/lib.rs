// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Configuration file support for pgts.
//!
//! A `pgts.toml` is optional; every value it carries can also be supplied on
//! the command line. See [`Manifest`] for the recognized keys.

mod enum_style;
mod error;
mod file;
mod manifest;

pub use enum_style::EnumStyle;
pub use error::{Error, Result};
pub use file::{PgtsToml, STARTER_MANIFEST};
pub use manifest::{
    DEFAULT_DATABASE_ENV, DEFAULT_NAMESPACE, DatabaseConfig, Manifest, OutputConfig,
    validate_identifier,
};
