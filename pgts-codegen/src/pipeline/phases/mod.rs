//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the raw catalog rows and collects diagnostics
//! - [`LowerPhase`] - folds the rows into a schema model

mod lower;
mod validate;

pub use lower::LowerPhase;
pub use validate::{
    DuplicateOverrideLint, EmptyEnumLint, ForeignKeyCollisionLint, Lint, NameCollisionLint,
    ValidatePhase,
};
