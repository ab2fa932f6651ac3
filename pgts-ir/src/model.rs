//! The assembled schema model and its lookups.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::{EnumType, ForeignKey, Table, TypeOverride};

/// Source table → source column → foreign key.
pub(crate) type TableForeignKeys = HashMap<String, HashMap<String, ForeignKey>>;

/// Everything known about one schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    pub(crate) types: IndexMap<String, EnumType>,
    pub(crate) tables: IndexMap<String, Table>,
}

impl Schema {
    /// Enum types in discovery order.
    pub fn types(&self) -> impl Iterator<Item = &EnumType> {
        self.types.values()
    }

    /// Tables in discovery order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    /// Look up an enum type by raw name.
    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.types.get(name)
    }

    /// Look up a table by raw name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Returns true when the schema declares neither types nor tables.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.tables.is_empty()
    }
}

/// Normalized model of a database catalog.
///
/// Built once per run by [`SchemaModelBuilder`](crate::SchemaModelBuilder);
/// there is no way to mutate it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaModel {
    pub(crate) schemas: IndexMap<String, Schema>,
    pub(crate) foreign_keys: HashMap<String, TableForeignKeys>,
    pub(crate) overrides: Vec<TypeOverride>,
}

impl SchemaModel {
    /// Schemas in discovery order: schemas seen through enum types first,
    /// then those only seen through tables.
    pub fn schemas(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.schemas.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    /// Look up a schema by name.
    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Look up an enum type defined in `namespace`.
    pub fn enum_type(&self, namespace: &str, name: &str) -> Option<&EnumType> {
        self.schema(namespace).and_then(|s| s.enum_type(name))
    }

    /// Look up a table (row type) defined in `namespace`.
    pub fn table(&self, namespace: &str, name: &str) -> Option<&Table> {
        self.schema(namespace).and_then(|s| s.table(name))
    }

    /// Foreign key recorded for a source column, if any.
    pub fn foreign_key(&self, schema: &str, table: &str, column: &str) -> Option<&ForeignKey> {
        self.foreign_keys
            .get(schema)
            .and_then(|tables| tables.get(table))
            .and_then(|columns| columns.get(column))
    }

    /// Operator overrides in delivery order, duplicates included.
    pub fn overrides(&self) -> &[TypeOverride] {
        &self.overrides
    }

    /// Total number of enum types across all schemas.
    pub fn type_count(&self) -> usize {
        self.schemas.values().map(|s| s.types.len()).sum()
    }

    /// Total number of tables across all schemas.
    pub fn table_count(&self) -> usize {
        self.schemas.values().map(|s| s.tables.len()).sum()
    }
}
