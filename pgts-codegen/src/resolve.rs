//! Column type resolution.
//!
//! Every column is resolved by the first matching rule, in this order:
//!
//! 1. foreign key recorded for the column
//! 2. `@custom ` type expression in the column comment
//! 3. builtin type from the system catalog
//! 4. enum in the column's type namespace
//! 5. table row type in the column's type namespace
//! 6. array (`_` prefixed) of an enum in the column's type namespace
//! 7. unknown
//!
//! Nullable columns are wrapped once, after the rule has produced its type.

use pgts_ir::{Column, ForeignKey, SYSTEM_CATALOG, SchemaModel, Table, is_reserved_schema};

use crate::{language::TypeMapper, pipeline::Diagnostic};

/// Prefix the catalog gives to array types (`_int4` is `int4[]`).
const ARRAY_PREFIX: char = '_';

/// Which resolution rule produced a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSource {
    ForeignKey,
    Custom,
    Builtin,
    Enum,
    Table,
    EnumArray,
    Unknown,
}

/// The type expression chosen for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub expr: String,
    pub source: TypeSource,
}

impl ResolvedType {
    pub fn is_unknown(&self) -> bool {
        self.source == TypeSource::Unknown
    }

    /// The warning to surface for an unresolved column, if this is one.
    pub fn diagnostic(&self, table: &Table, column: &Column) -> Option<Diagnostic> {
        self.is_unknown().then(|| {
            Diagnostic::warning(
                "emit",
                format!(
                    "unknown type '{}' for column '{}'",
                    column.qualified_type(),
                    column.name
                ),
            )
            .at(format!("{}.{}.{}", table.schema, table.name, column.name))
        })
    }
}

/// Resolves column types against a schema model.
///
/// Resolution is a pure function of the column, the model and the column's
/// foreign key.
pub struct TypeResolver<'a, M> {
    model: &'a SchemaModel,
    mapper: &'a M,
}

impl<'a, M: TypeMapper> TypeResolver<'a, M> {
    pub fn new(model: &'a SchemaModel, mapper: &'a M) -> Self {
        Self { model, mapper }
    }

    /// Resolve a column of `table`, looking up its foreign key in the model.
    pub fn resolve(&self, table: &Table, column: &Column) -> ResolvedType {
        let key = self
            .model
            .foreign_key(&table.schema, &table.name, &column.name);
        self.resolve_with(column, key)
    }

    /// Resolve a column with an explicitly supplied foreign key.
    pub fn resolve_with(&self, column: &Column, key: Option<&ForeignKey>) -> ResolvedType {
        let (expr, source) = self.resolve_base(column, key);
        let expr = if column.nullable {
            self.mapper.map_nullable(&expr)
        } else {
            expr
        };
        ResolvedType { expr, source }
    }

    fn resolve_base(&self, column: &Column, key: Option<&ForeignKey>) -> (String, TypeSource) {
        if let Some(key) = key {
            return (self.mapper.map_foreign_key(key), TypeSource::ForeignKey);
        }

        if let Some(custom) = column.custom_type() {
            return (custom.to_string(), TypeSource::Custom);
        }

        let namespace = column.type_namespace.as_str();
        let name = column.type_name.as_str();

        if namespace == SYSTEM_CATALOG
            && let Some(ty) = self.mapper.map_builtin(name)
        {
            return (ty, TypeSource::Builtin);
        }

        // Reserved namespaces are never emitted, so nothing in them can be referenced.
        if !is_reserved_schema(namespace) {
            if self.model.enum_type(namespace, name).is_some() {
                return (self.mapper.map_enum(namespace, name), TypeSource::Enum);
            }

            if self.model.table(namespace, name).is_some() {
                return (self.mapper.map_table(namespace, name), TypeSource::Table);
            }

            if let Some(element) = name.strip_prefix(ARRAY_PREFIX)
                && self.model.enum_type(namespace, element).is_some()
            {
                let element = self.mapper.map_enum(namespace, element);
                return (self.mapper.map_array(&element), TypeSource::EnumArray);
            }
        }

        (
            self.mapper.map_unknown(&column.qualified_type()),
            TypeSource::Unknown,
        )
    }
}

#[cfg(test)]
mod tests {
    use pgts_ir::SchemaModelBuilder;

    use super::*;

    /// Spells every rule distinctly so tests can tell them apart.
    struct TagMapper;

    impl TypeMapper for TagMapper {
        fn language(&self) -> &'static str {
            "tags"
        }

        fn map_builtin(&self, type_name: &str) -> Option<String> {
            match type_name {
                "int4" => Some("number".into()),
                "_text" => Some("string[]".into()),
                _ => None,
            }
        }

        fn map_enum(&self, namespace: &str, name: &str) -> String {
            format!("enum:{}.{}", namespace, name)
        }

        fn map_table(&self, namespace: &str, name: &str) -> String {
            format!("table:{}.{}", namespace, name)
        }

        fn map_foreign_key(&self, key: &ForeignKey) -> String {
            format!("fk:{}.{}.{}", key.target_schema, key.target_table, key.target_column)
        }

        fn map_nullable(&self, ty: &str) -> String {
            format!("{} | null", ty)
        }

        fn map_unknown(&self, qualified: &str) -> String {
            format!("unknown:{}", qualified)
        }
    }

    fn column(ty: &str, namespace: &str) -> Column {
        Column {
            name: "c".into(),
            type_name: ty.into(),
            type_namespace: namespace.into(),
            nullable: false,
            description: None,
        }
    }

    fn key() -> ForeignKey {
        ForeignKey {
            constraint: "orders_customer_fk".into(),
            target_schema: "shop".into(),
            target_table: "customers".into(),
            target_column: "id".into(),
        }
    }

    fn model() -> SchemaModel {
        let mut builder = SchemaModelBuilder::new();
        builder
            .add_enum("shop", "order_status", ["pending", "paid"], None)
            .add_table("shop", "address", vec![], None)
            .add_table("pg_catalog", "pg_class", vec![], None);
        builder.build()
    }

    fn resolve(column: &Column, key: Option<&ForeignKey>) -> ResolvedType {
        let model = model();
        TypeResolver::new(&model, &TagMapper).resolve_with(column, key)
    }

    #[test]
    fn test_foreign_key_beats_builtin() {
        let resolved = resolve(&column("int4", "pg_catalog"), Some(&key()));
        assert_eq!(resolved.expr, "fk:shop.customers.id");
        assert_eq!(resolved.source, TypeSource::ForeignKey);
    }

    #[test]
    fn test_foreign_key_beats_custom() {
        let mut col = column("int4", "pg_catalog");
        col.description = Some("@custom Brand<number>".into());
        assert_eq!(resolve(&col, Some(&key())).source, TypeSource::ForeignKey);
    }

    #[test]
    fn test_custom_beats_builtin_and_enum() {
        let mut col = column("order_status", "shop");
        col.description = Some("Status @custom 'a' | 'b'".into());
        let resolved = resolve(&col, None);
        assert_eq!(resolved.expr, "'a' | 'b'");
        assert_eq!(resolved.source, TypeSource::Custom);

        let mut col = column("int4", "pg_catalog");
        col.description = Some("@custom bigint".into());
        assert_eq!(resolve(&col, None).expr, "bigint");
    }

    #[test]
    fn test_empty_custom_type_falls_through() {
        let mut col = column("int4", "pg_catalog");
        col.nullable = true;
        col.description = Some("note @custom ".into());
        let resolved = resolve(&col, None);
        assert_eq!(resolved.expr, "number | null");
        assert_eq!(resolved.source, TypeSource::Builtin);
    }

    #[test]
    fn test_builtin() {
        let resolved = resolve(&column("_text", "pg_catalog"), None);
        assert_eq!(resolved.expr, "string[]");
        assert_eq!(resolved.source, TypeSource::Builtin);
    }

    #[test]
    fn test_builtin_requires_system_catalog() {
        let resolved = resolve(&column("int4", "shop"), None);
        assert_eq!(resolved.source, TypeSource::Unknown);
    }

    #[test]
    fn test_unmapped_catalog_type_falls_through() {
        let resolved = resolve(&column("tsvector", "pg_catalog"), None);
        assert_eq!(resolved.expr, "unknown:pg_catalog.tsvector");
    }

    #[test]
    fn test_enum_reference() {
        let resolved = resolve(&column("order_status", "shop"), None);
        assert_eq!(resolved.expr, "enum:shop.order_status");
        assert_eq!(resolved.source, TypeSource::Enum);
    }

    #[test]
    fn test_enum_lookup_uses_type_namespace() {
        let resolved = resolve(&column("order_status", "public"), None);
        assert!(resolved.is_unknown());
    }

    #[test]
    fn test_table_reference() {
        let resolved = resolve(&column("address", "shop"), None);
        assert_eq!(resolved.expr, "table:shop.address");
        assert_eq!(resolved.source, TypeSource::Table);
    }

    #[test]
    fn test_reserved_namespace_tables_are_not_referenced() {
        let resolved = resolve(&column("pg_class", "pg_catalog"), None);
        assert!(resolved.is_unknown());
    }

    #[test]
    fn test_enum_array() {
        let resolved = resolve(&column("_order_status", "shop"), None);
        assert_eq!(resolved.expr, "enum:shop.order_status[]");
        assert_eq!(resolved.source, TypeSource::EnumArray);
    }

    #[test]
    fn test_nullable_wraps_once_after_resolution() {
        let mut col = column("int4", "pg_catalog");
        col.nullable = true;
        assert_eq!(resolve(&col, None).expr, "number | null");

        assert_eq!(resolve(&col, Some(&key())).expr, "fk:shop.customers.id | null");

        col.description = Some("@custom Money".into());
        assert_eq!(resolve(&col, None).expr, "Money | null");
    }

    #[test]
    fn test_resolve_looks_up_foreign_key() {
        let mut builder = SchemaModelBuilder::new();
        builder.add_foreign_key("shop", "orders", "customer_id", key());
        let model = builder.build();

        let table = Table {
            schema: "shop".into(),
            name: "orders".into(),
            columns: vec![],
            description: None,
        };
        let mut col = column("int4", "pg_catalog");
        col.name = "customer_id".into();

        let resolved = TypeResolver::new(&model, &TagMapper).resolve(&table, &col);
        assert_eq!(resolved.source, TypeSource::ForeignKey);
    }

    #[test]
    fn test_unknown_diagnostic() {
        let table = Table {
            schema: "public".into(),
            name: "docs".into(),
            columns: vec![],
            description: None,
        };
        let mut col = column("ltree", "public");
        col.name = "path".into();

        let resolved = resolve(&col, None);
        let diag = resolved.diagnostic(&table, &col).unwrap();
        assert!(diag.severity.is_warning());
        assert_eq!(diag.location.as_deref(), Some("public.docs.path"));
        assert!(diag.message.contains("public.ltree"));

        let known = resolve(&column("int4", "pg_catalog"), None);
        assert!(known.diagnostic(&table, &col).is_none());
    }
}
