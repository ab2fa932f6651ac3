//! Lint for enum types without labels.

use pgts_catalog::CatalogRows;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about enums with no labels. They render as `never`.
pub struct EmptyEnumLint;

impl Lint for EmptyEnumLint {
    fn name(&self) -> &'static str {
        "empty-enum"
    }

    fn description(&self) -> &'static str {
        "Detect enum types without any labels"
    }

    fn check(&self, rows: &CatalogRows, diagnostics: &mut Vec<Diagnostic>) {
        for row in rows.enums.iter().filter(|row| row.values.is_empty()) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("enum type '{}' has no labels", row.type_name),
                )
                .at(format!("{}.{}", row.schema, row.type_name)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use pgts_catalog::EnumRow;

    use super::*;

    fn row(name: &str, values: &[&str]) -> EnumRow {
        EnumRow {
            schema: "public".into(),
            type_name: name.into(),
            values: values.iter().map(|v| v.to_string()).collect(),
            description: None,
        }
    }

    #[test]
    fn test_empty_enum() {
        let rows = CatalogRows {
            enums: vec![row("mood", &["happy"]), row("nothing", &[])],
            ..CatalogRows::default()
        };

        let mut diagnostics = Vec::new();
        EmptyEnumLint.check(&rows, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("public.nothing"));
    }
}
