//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the compilation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase can read and
/// modify the compilation context, filling in the model or adding
/// diagnostics.
///
/// Built-in phases:
/// - `ValidatePhase` - lints the raw catalog rows
/// - `LowerPhase` - folds the rows into a `SchemaModel`
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
