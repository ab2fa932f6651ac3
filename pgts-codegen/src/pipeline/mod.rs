//! Compilation pipeline for code generation.
//!
//! The [`Pipeline`] runs the phases that turn fetched catalog rows into a
//! [`SchemaModel`](pgts_ir::SchemaModel):
//!
//! - Explicit phase boundaries (validate → lower)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use pgts_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().run(rows)?;
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//! let model = ctx.take_model()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
