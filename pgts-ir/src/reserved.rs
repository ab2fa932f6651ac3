//! Schema names that never produce an emitted namespace.

/// Namespace holding the builtin catalog types (`int4`, `text`, ...).
pub const SYSTEM_CATALOG: &str = "pg_catalog";

/// The SQL-standard metadata views.
pub const INFORMATION_SCHEMA: &str = "information_schema";

/// Out-of-line storage for oversized values.
pub const TOAST_SCHEMA: &str = "pg_toast";

/// Schema of the operator-provisioned override table.
pub const OVERRIDE_SCHEMA: &str = "psql_to_ts";

/// Table holding operator-supplied type overrides.
pub const OVERRIDE_TABLE: &str = "custom";

/// Marker in a column comment introducing a literal type expression.
pub const CUSTOM_TYPE_MARKER: &str = "@custom ";

const RESERVED: &[&str] = &[SYSTEM_CATALOG, INFORMATION_SCHEMA, TOAST_SCHEMA, OVERRIDE_SCHEMA];

/// Returns true for system schemas and the override table's own schema.
pub fn is_reserved_schema(name: &str) -> bool {
    RESERVED.contains(&name)
}
