//! Core operations.
//!
//! This module contains the business logic for pgts commands,
//! separated from CLI argument parsing and output rendering.

pub mod catalog;
pub mod generate;
pub mod init;
pub mod snapshot;

pub use catalog::{CatalogInput, read_catalog};
pub use generate::{GenerateOptions, generate};
pub use init::{InitOptions, init};
pub use snapshot::snapshot;
