//! Lint for declarations whose emitted names clash.

use std::collections::HashMap;

use pgts_catalog::CatalogRows;
use pgts_core::to_pascal_case;
use pgts_ir::is_reserved_schema;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when enum types and tables of one schema end up with the
/// same PascalCase name (`user_role`, `userRole` and `user__role` all become
/// `UserRole`).
///
/// The declarations are still emitted; TypeScript rejects the duplicates.
pub struct NameCollisionLint;

impl Lint for NameCollisionLint {
    fn name(&self) -> &'static str {
        "name-collision"
    }

    fn description(&self) -> &'static str {
        "Detect enum types and tables that share an emitted name"
    }

    fn check(&self, rows: &CatalogRows, diagnostics: &mut Vec<Diagnostic>) {
        // (schema, emitted name) -> first raw name
        let mut seen: HashMap<(&str, String), &str> = HashMap::new();

        let declarations = rows
            .enums
            .iter()
            .map(|row| (row.schema.as_str(), row.type_name.as_str()))
            .chain(
                rows.tables
                    .iter()
                    .map(|row| (row.schema.as_str(), row.table.as_str())),
            )
            .filter(|(schema, _)| !is_reserved_schema(schema));

        for (schema, raw) in declarations {
            let emitted = to_pascal_case(raw);
            match seen.get(&(schema, emitted.clone())) {
                Some(&first) if first != raw => diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "'{}' and '{}' are both emitted as '{}'",
                            first, raw, emitted
                        ),
                    )
                    .at(format!("{}.{}", schema, raw)),
                ),
                Some(_) => {}
                None => {
                    seen.insert((schema, emitted), raw);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pgts_catalog::{EnumRow, TableRow};

    use super::*;

    fn enum_row(schema: &str, name: &str) -> EnumRow {
        EnumRow {
            schema: schema.into(),
            type_name: name.into(),
            values: vec!["a".into()],
            description: None,
        }
    }

    fn table_row(schema: &str, name: &str) -> TableRow {
        TableRow {
            schema: schema.into(),
            table: name.into(),
            columns: vec![],
            description: None,
        }
    }

    #[test]
    fn test_distinct_names() {
        let rows = CatalogRows {
            enums: vec![enum_row("shop", "order_status")],
            tables: vec![table_row("shop", "orders"), table_row("public", "orders")],
            ..CatalogRows::default()
        };
        let mut diagnostics = Vec::new();
        NameCollisionLint.check(&rows, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_enum_and_tables_collide() {
        let rows = CatalogRows {
            enums: vec![enum_row("public", "user_role")],
            tables: vec![
                table_row("public", "userRole"),
                table_row("public", "user__role"),
            ],
            ..CatalogRows::default()
        };
        let mut diagnostics = Vec::new();
        NameCollisionLint.check(&rows, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics[0].message,
            "'user_role' and 'userRole' are both emitted as 'UserRole'"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("public.userRole"));
        assert_eq!(diagnostics[1].location.as_deref(), Some("public.user__role"));
    }

    #[test]
    fn test_reserved_schemas_ignored() {
        let rows = CatalogRows {
            tables: vec![
                table_row("pg_catalog", "pg_class"),
                table_row("pg_catalog", "pgClass"),
            ],
            ..CatalogRows::default()
        };
        let mut diagnostics = Vec::new();
        NameCollisionLint.check(&rows, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
