//! Lower phase - folds catalog rows into the schema model.

use eyre::Result;
use pgts_catalog::{CatalogRows, ColumnRow};
use pgts_ir::{Column, ForeignKey, SchemaModel, SchemaModelBuilder};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that transforms catalog rows into a [`SchemaModel`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Fold catalog rows into the schema model"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.model = Some(lower_rows(&ctx.rows));
        Ok(())
    }
}

/// Lower catalog rows into a schema model.
///
/// Enums are recorded before tables so a schema's discovery order follows
/// its first enum when it has any.
fn lower_rows(rows: &CatalogRows) -> SchemaModel {
    let mut builder = SchemaModelBuilder::new();

    for row in &rows.enums {
        builder.add_enum(
            &row.schema,
            &row.type_name,
            row.values.iter().cloned(),
            row.description.clone(),
        );
    }

    for row in &rows.tables {
        builder.add_table(
            &row.schema,
            &row.table,
            row.columns.iter().map(lower_column).collect(),
            row.description.clone(),
        );
    }

    for row in &rows.foreign_keys {
        builder.add_foreign_key(
            &row.source_schema,
            &row.source_table,
            &row.source_column,
            ForeignKey {
                constraint: row.constraint.clone(),
                target_schema: row.target_schema.clone(),
                target_table: row.target_table.clone(),
                target_column: row.target_column.clone(),
            },
        );
    }

    for row in &rows.overrides {
        builder.add_override(&row.name, &row.value);
    }

    builder.build()
}

fn lower_column(row: &ColumnRow) -> Column {
    Column {
        name: row.name.clone(),
        type_name: row.type_name.clone(),
        type_namespace: row.type_namespace.clone(),
        nullable: row.nullable,
        description: row.description.clone(),
    }
}
