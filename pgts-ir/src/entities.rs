//! Catalog entities.

use crate::CUSTOM_TYPE_MARKER;

/// A named finite set of string labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    /// Schema the type is defined in.
    pub schema: String,
    /// Raw catalog type name.
    pub name: String,
    /// Labels, unique and sorted ascending (byte order).
    pub labels: Vec<String>,
    /// Catalog comment, if any.
    pub description: Option<String>,
}

/// A table (or any relation exposing a row type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Schema the table lives in.
    pub schema: String,
    /// Raw table name.
    pub name: String,
    /// Columns in catalog order.
    pub columns: Vec<Column>,
    /// Catalog comment, if any.
    pub description: Option<String>,
}

/// A table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Raw catalog type name (e.g. `int4`, `_text`, `order_status`).
    pub type_name: String,
    /// Namespace the type is defined in. Unrelated to the table's schema.
    pub type_namespace: String,
    /// Whether the column accepts NULL.
    pub nullable: bool,
    /// Catalog comment, if any.
    pub description: Option<String>,
}

impl Column {
    /// `namespace.type`, used in diagnostics.
    pub fn qualified_type(&self) -> String {
        format!("{}.{}", self.type_namespace, self.type_name)
    }

    /// The type expression attached to the description with `@custom `.
    ///
    /// Everything after the first marker is returned untouched, including
    /// any later markers. A marker followed only by whitespace carries no
    /// type and yields `None`.
    pub fn custom_type(&self) -> Option<&str> {
        self.description
            .as_deref()
            .and_then(|desc| desc.split_once(CUSTOM_TYPE_MARKER))
            .map(|(_, ty)| ty)
            .filter(|ty| !ty.trim().is_empty())
    }
}

/// The target of a single-column foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    /// Constraint name.
    pub constraint: String,
    /// Schema of the referenced table.
    pub target_schema: String,
    /// Referenced table.
    pub target_table: String,
    /// Referenced column.
    pub target_column: String,
}

/// An operator-supplied type expression, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOverride {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(description: Option<&str>) -> Column {
        Column {
            name: "meta".into(),
            type_name: "jsonb".into(),
            type_namespace: "pg_catalog".into(),
            nullable: false,
            description: description.map(Into::into),
        }
    }

    #[test]
    fn test_custom_type() {
        assert_eq!(column(None).custom_type(), None);
        assert_eq!(column(Some("plain comment")).custom_type(), None);
        assert_eq!(
            column(Some("Settings @custom { theme: string }")).custom_type(),
            Some("{ theme: string }")
        );
    }

    #[test]
    fn test_custom_type_keeps_later_markers() {
        assert_eq!(
            column(Some("@custom A @custom B")).custom_type(),
            Some("A @custom B")
        );
    }

    #[test]
    fn test_custom_marker_without_type_is_ignored() {
        assert_eq!(column(Some("note @custom ")).custom_type(), None);
        assert_eq!(column(Some("note @custom \n\t")).custom_type(), None);
    }

    #[test]
    fn test_custom_marker_requires_trailing_space() {
        assert_eq!(column(Some("@customX")).custom_type(), None);
    }

    #[test]
    fn test_qualified_type() {
        assert_eq!(column(None).qualified_type(), "pg_catalog.jsonb");
    }
}
