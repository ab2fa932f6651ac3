//! Incremental construction of a [`SchemaModel`].

use crate::{Column, EnumType, ForeignKey, SchemaModel, Table, TypeOverride};

/// Accumulates catalog entities and produces an immutable [`SchemaModel`].
///
/// # Example
///
/// ```
/// use pgts_ir::SchemaModelBuilder;
///
/// let mut builder = SchemaModelBuilder::new();
/// builder.add_enum("shop", "order_status", ["pending", "paid"], None);
/// let model = builder.build();
///
/// let status = model.enum_type("shop", "order_status").unwrap();
/// assert_eq!(status.labels, ["paid", "pending"]);
/// ```
#[derive(Debug, Default)]
pub struct SchemaModelBuilder {
    model: SchemaModel,
}

impl SchemaModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an enum type.
    ///
    /// Labels are stored sorted ascending and deduplicated. When the same
    /// `(schema, name)` is seen again its labels are merged in and the first
    /// description is kept.
    pub fn add_enum<I, S>(
        &mut self,
        schema: &str,
        name: &str,
        labels: I,
        description: Option<String>,
    ) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let types = &mut self.model.schemas.entry(schema.to_string()).or_default().types;
        let entry = types.entry(name.to_string()).or_insert_with(|| EnumType {
            schema: schema.to_string(),
            name: name.to_string(),
            labels: Vec::new(),
            description,
        });
        entry.labels.extend(labels.into_iter().map(Into::into));
        entry.labels.sort();
        entry.labels.dedup();
        self
    }

    /// Record a table with its columns in catalog order.
    ///
    /// A later table with the same `(schema, name)` replaces the earlier one.
    pub fn add_table(
        &mut self,
        schema: &str,
        name: &str,
        columns: Vec<Column>,
        description: Option<String>,
    ) -> &mut Self {
        self.model
            .schemas
            .entry(schema.to_string())
            .or_default()
            .tables
            .insert(
                name.to_string(),
                Table {
                    schema: schema.to_string(),
                    name: name.to_string(),
                    columns,
                    description,
                },
            );
        self
    }

    /// Record a foreign key for a source column, returning the entry it replaced.
    ///
    /// At most one target is kept per column; the last one recorded wins.
    pub fn add_foreign_key(
        &mut self,
        schema: &str,
        table: &str,
        column: &str,
        key: ForeignKey,
    ) -> Option<ForeignKey> {
        self.model
            .foreign_keys
            .entry(schema.to_string())
            .or_default()
            .entry(table.to_string())
            .or_default()
            .insert(column.to_string(), key)
    }

    /// Append an operator override. Duplicate names are kept.
    pub fn add_override(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.model.overrides.push(TypeOverride {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Finish building.
    pub fn build(self) -> SchemaModel {
        self.model
    }
}
