//! Shared code generation utilities for pgts.
//!
//! This crate provides the language-agnostic part of the generator: the
//! compilation pipeline that turns catalog rows into a schema model, the
//! column type resolver, and the code building blocks emitters render with.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific seams (TypeMapper)
//! - [`pipeline`] - Compilation phases, lints and diagnostics
//! - [`resolve`] - Precedence-ordered column type resolution

pub mod builder;
pub mod language;
pub mod pipeline;
pub mod resolve;
