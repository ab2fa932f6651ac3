//! TypeScript declaration emitter for pgts.
//!
//! Turns a [`SchemaModel`](pgts_ir::SchemaModel) into a single `.ts` file: a
//! root namespace holding a shared `Json` alias, an optional namespace of
//! operator overrides, and one namespace per user schema with its enum types
//! and table interfaces.
//!
//! ```ignore
//! use pgts_codegen::pipeline::Pipeline;
//! use pgts_codegen_typescript::{Generator, GeneratorOptions};
//!
//! let ctx = Pipeline::new().run(rows)?;
//! let emission = Generator::from_context(ctx, GeneratorOptions::default())?.emit();
//! std::fs::write("db.ts", &emission.content)?;
//! ```

mod code_file;
mod generator;
mod naming;
mod sanitize;
mod type_mapper;

pub mod ast;

pub use code_file::CodeFile;
pub use generator::{Emission, Generator, GeneratorOptions};
pub use naming::{property_name, type_name};
pub use sanitize::{escape_literal, sanitize_comment, sanitize_line};
pub use type_mapper::TypeScriptTypeMapper;
