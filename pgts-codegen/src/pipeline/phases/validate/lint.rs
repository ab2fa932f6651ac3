//! Lint trait for catalog validation.

use pgts_catalog::CatalogRows;

use crate::pipeline::Diagnostic;

/// A lint that checks the catalog rows for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the rows and add any diagnostics.
    fn check(&self, rows: &CatalogRows, diagnostics: &mut Vec<Diagnostic>);
}
