//! Raw row shapes delivered by a catalog source.
//!
//! The serialized form (camelCase JSON) doubles as the catalog snapshot
//! format and as the column aggregate produced by the table query.

use serde::{Deserialize, Serialize};

/// One enum type with its aggregated labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumRow {
    pub schema: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One table with its full column list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub schema: String,
    pub table: String,
    pub columns: Vec<ColumnRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A column inside a [`TableRow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRow {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub type_namespace: String,
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One (constraint, source column) pair of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForeignKeyRow {
    pub constraint: String,
    pub source_schema: String,
    pub source_table: String,
    pub source_column: String,
    pub target_schema: String,
    pub target_table: String,
    pub target_column: String,
}

/// An operator-supplied type expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRow {
    pub name: String,
    pub value: String,
}

/// Everything one run reads from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRows {
    #[serde(default)]
    pub enums: Vec<EnumRow>,
    #[serde(default)]
    pub tables: Vec<TableRow>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKeyRow>,
    #[serde(default)]
    pub overrides: Vec<OverrideRow>,
}

impl CatalogRows {
    /// Serialize the rows as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
