//! Lint for override names delivered more than once.

use std::collections::HashSet;

use pgts_catalog::CatalogRows;
use pgts_ir::{OVERRIDE_SCHEMA, OVERRIDE_TABLE};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when two overrides share a name.
///
/// Every copy is still emitted; the warning points at the conflict.
pub struct DuplicateOverrideLint;

impl Lint for DuplicateOverrideLint {
    fn name(&self) -> &'static str {
        "duplicate-override"
    }

    fn description(&self) -> &'static str {
        "Detect type overrides declared more than once"
    }

    fn check(&self, rows: &CatalogRows, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for row in &rows.overrides {
            if !seen.insert(row.name.as_str()) && reported.insert(row.name.as_str()) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!("type override '{}' is declared more than once", row.name),
                    )
                    .at(format!("{}.{}.{}", OVERRIDE_SCHEMA, OVERRIDE_TABLE, row.name)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pgts_catalog::OverrideRow;

    use super::*;

    fn rows(names: &[&str]) -> CatalogRows {
        CatalogRows {
            overrides: names
                .iter()
                .map(|name| OverrideRow {
                    name: name.to_string(),
                    value: "string".into(),
                })
                .collect(),
            ..CatalogRows::default()
        }
    }

    #[test]
    fn test_no_duplicates() {
        let mut diagnostics = Vec::new();
        DuplicateOverrideLint.check(&rows(&["Money", "Id"]), &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_reported_once() {
        let mut diagnostics = Vec::new();
        DuplicateOverrideLint.check(&rows(&["Money", "Money", "Money"]), &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("psql_to_ts.custom.Money")
        );
    }
}
