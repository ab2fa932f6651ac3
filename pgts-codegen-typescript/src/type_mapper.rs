//! TypeScript type mapper implementation.

use pgts_codegen::language::TypeMapper;
use pgts_ir::ForeignKey;

use crate::{escape_literal, type_name};

/// TypeScript type mapper implementation.
///
/// References are spelled relative to the root namespace, which every
/// schema namespace is nested in.
pub struct TypeScriptTypeMapper {
    json: String,
}

impl TypeScriptTypeMapper {
    /// Create a mapper for declarations nested in `root`.
    pub fn new(root: &str) -> Self {
        Self {
            json: format!("{}.Json", root),
        }
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_builtin(&self, type_name: &str) -> Option<String> {
        let ty = match type_name.to_ascii_lowercase().as_str() {
            "bpchar" | "char" | "varchar" | "text" | "citext" | "uuid" | "bytea" | "inet"
            | "time" | "timetz" | "interval" | "name" | "date" | "timestamp" | "timestamptz" => {
                "string"
            }
            "int2" | "int4" | "int8" | "float4" | "float8" | "numeric" | "money" | "oid" => {
                "number"
            }
            "bool" => "boolean",
            "json" | "jsonb" => return Some(self.json.clone()),
            "_int2" | "_int4" | "_int8" | "_float4" | "_float8" | "_numeric" | "_money"
            | "_oid" => "number[]",
            "_bool" => "boolean[]",
            "_bpchar" | "_char" | "_varchar" | "_text" | "_citext" | "_uuid" | "_bytea"
            | "_inet" | "_name" => "string[]",
            "_date" | "_time" | "_timetz" | "_interval" | "_timestamp" | "_timestamptz" => {
                "string[]"
            }
            "_json" | "_jsonb" => return Some(self.map_array(&self.json)),
            _ => return None,
        };
        Some(ty.to_string())
    }

    fn map_enum(&self, namespace: &str, name: &str) -> String {
        format!("{}.{}", type_name(namespace), type_name(name))
    }

    fn map_table(&self, namespace: &str, name: &str) -> String {
        format!("{}.{}", type_name(namespace), type_name(name))
    }

    fn map_foreign_key(&self, key: &ForeignKey) -> String {
        format!(
            "{}.{}['{}']",
            type_name(&key.target_schema),
            type_name(&key.target_table),
            escape_literal(&key.target_column)
        )
    }

    fn map_nullable(&self, ty: &str) -> String {
        format!("{} | null", ty)
    }

    fn map_unknown(&self, qualified: &str) -> String {
        format!("unknown /* {} */", qualified.replace("*/", "*\u{2215}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> TypeScriptTypeMapper {
        TypeScriptTypeMapper::new("Db")
    }

    #[test]
    fn test_scalar_types() {
        let m = mapper();
        assert_eq!(m.map_builtin("int4").as_deref(), Some("number"));
        assert_eq!(m.map_builtin("numeric").as_deref(), Some("number"));
        assert_eq!(m.map_builtin("uuid").as_deref(), Some("string"));
        assert_eq!(m.map_builtin("timestamptz").as_deref(), Some("string"));
        assert_eq!(m.map_builtin("bool").as_deref(), Some("boolean"));
        assert_eq!(m.map_builtin("jsonb").as_deref(), Some("Db.Json"));
    }

    #[test]
    fn test_array_types() {
        let m = mapper();
        assert_eq!(m.map_builtin("_int8").as_deref(), Some("number[]"));
        assert_eq!(m.map_builtin("_bool").as_deref(), Some("boolean[]"));
        assert_eq!(m.map_builtin("_text").as_deref(), Some("string[]"));
        assert_eq!(m.map_builtin("_timestamp").as_deref(), Some("string[]"));
        assert_eq!(m.map_builtin("_date").as_deref(), Some("string[]"));
        assert_eq!(m.map_builtin("_json").as_deref(), Some("Db.Json[]"));
    }

    #[test]
    fn test_mapping_ignores_case() {
        assert_eq!(mapper().map_builtin("INT4").as_deref(), Some("number"));
    }

    #[test]
    fn test_unmapped_types() {
        let m = mapper();
        assert_eq!(m.map_builtin("tsvector"), None);
        assert_eq!(m.map_builtin("point"), None);
    }

    #[test]
    fn test_json_follows_root_namespace() {
        let m = TypeScriptTypeMapper::new("Database");
        assert_eq!(m.map_builtin("json").as_deref(), Some("Database.Json"));
    }

    #[test]
    fn test_references() {
        let m = mapper();
        assert_eq!(m.map_enum("shop", "order_status"), "Shop.OrderStatus");
        assert_eq!(m.map_table("shop", "order_item"), "Shop.OrderItem");
        let key = ForeignKey {
            constraint: "orders_customer_fk".into(),
            target_schema: "shop".into(),
            target_table: "customers".into(),
            target_column: "id".into(),
        };
        assert_eq!(m.map_foreign_key(&key), "Shop.Customers['id']");
    }

    #[test]
    fn test_unknown_and_nullable() {
        let m = mapper();
        assert_eq!(m.map_unknown("public.ltree"), "unknown /* public.ltree */");
        assert_eq!(m.map_nullable("number"), "number | null");
    }
}
