//! Lint for columns that carry more than one foreign key.

use std::collections::HashMap;

use pgts_catalog::CatalogRows;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when one source column is constrained by several
/// foreign keys. Only the last one observed narrows the column type.
pub struct ForeignKeyCollisionLint;

impl Lint for ForeignKeyCollisionLint {
    fn name(&self) -> &'static str {
        "foreign-key-collision"
    }

    fn description(&self) -> &'static str {
        "Detect columns referenced by more than one foreign key"
    }

    fn check(&self, rows: &CatalogRows, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<(&str, &str, &str), &str> = HashMap::new();

        for row in &rows.foreign_keys {
            let column = (
                row.source_schema.as_str(),
                row.source_table.as_str(),
                row.source_column.as_str(),
            );
            if let Some(previous) = seen.insert(column, row.constraint.as_str())
                && previous != row.constraint
            {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "column '{}' has foreign keys '{}' and '{}'; using '{}'",
                            row.source_column, previous, row.constraint, row.constraint
                        ),
                    )
                    .at(format!(
                        "{}.{}.{}",
                        row.source_schema, row.source_table, row.source_column
                    )),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pgts_catalog::ForeignKeyRow;

    use super::*;

    fn fk(constraint: &str, column: &str) -> ForeignKeyRow {
        ForeignKeyRow {
            constraint: constraint.into(),
            source_schema: "shop".into(),
            source_table: "orders".into(),
            source_column: column.into(),
            target_schema: "shop".into(),
            target_table: "customers".into(),
            target_column: "id".into(),
        }
    }

    #[test]
    fn test_distinct_columns() {
        let rows = CatalogRows {
            foreign_keys: vec![fk("a_fk", "customer_id"), fk("b_fk", "seller_id")],
            ..CatalogRows::default()
        };

        let mut diagnostics = Vec::new();
        ForeignKeyCollisionLint.check(&rows, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_collision_names_both_constraints() {
        let rows = CatalogRows {
            foreign_keys: vec![fk("a_fk", "customer_id"), fk("b_fk", "customer_id")],
            ..CatalogRows::default()
        };

        let mut diagnostics = Vec::new();
        ForeignKeyCollisionLint.check(&rows, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'a_fk' and 'b_fk'"));
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("shop.orders.customer_id")
        );
    }
}
