//! Core utilities shared across the pgts workspace.
//!
//! This crate provides the identifier transforms applied to catalog names
//! and the atomic file writer used for generated artifacts.

mod file;
mod naming;

// File operations
pub use file::{File, FileRules, Overwrite, WriteResult};
// Identifier transforms
pub use naming::{to_enum_member, to_pascal_case};
