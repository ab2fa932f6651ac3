//! Schema model for the pgts code generation pipeline.
//!
//! This crate holds the normalized, in-memory picture of a database catalog
//! that generators consume. A [`SchemaModel`] is assembled once per run through
//! a [`SchemaModelBuilder`] and is read-only afterwards.
//!
//! # Architecture
//!
//! ```text
//! catalog rows → pgts-codegen (lowering) → pgts-ir (SchemaModel) → emitter
//! ```
//!
//! The model is language-agnostic: identifiers are stored exactly as the
//! catalog reports them, and naming transforms happen at emission time.

mod builder;
mod entities;
mod model;
mod reserved;

pub use builder::SchemaModelBuilder;
pub use entities::{Column, EnumType, ForeignKey, Table, TypeOverride};
pub use model::{Schema, SchemaModel};
pub use reserved::{
    CUSTOM_TYPE_MARKER, INFORMATION_SCHEMA, OVERRIDE_SCHEMA, OVERRIDE_TABLE, SYSTEM_CATALOG,
    TOAST_SCHEMA, is_reserved_schema,
};
