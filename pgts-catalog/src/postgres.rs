//! Live PostgreSQL catalog source.

use pgts_ir::{OVERRIDE_SCHEMA, OVERRIDE_TABLE};
use tokio_postgres::{Client, NoTls, Row, types::Json};
use tracing::{debug, warn};

use crate::{
    CatalogError, CatalogSource, ColumnRow, EnumRow, ForeignKeyRow, OverrideRow, ReadKind,
    Result, SchemaFilter, TableRow,
};

const ENUMS_SQL: &str = r#"
SELECT n.nspname::text AS schema,
       t.typname::text AS type,
       array_agg(e.enumlabel::text ORDER BY e.enumsortorder) AS labels,
       obj_description(t.oid, 'pg_type') AS description
  FROM pg_catalog.pg_type t
  JOIN pg_catalog.pg_enum e ON e.enumtypid = t.oid
  JOIN pg_catalog.pg_namespace n ON n.oid = t.typnamespace
 WHERE ($1::text[] IS NULL OR n.nspname::text = ANY ($1))
 GROUP BY n.nspname, t.typname, t.oid
 ORDER BY n.nspname, t.typname
"#;

const TABLES_SQL: &str = r#"
SELECT c.table_schema::text AS schema,
       c.table_name::text AS name,
       json_agg(json_build_object(
           'name', c.column_name,
           'type', c.udt_name,
           'typeNamespace', c.udt_schema,
           'nullable', c.is_nullable = 'YES',
           'description', col_description(format('%I.%I', c.table_schema, c.table_name)::regclass, c.ordinal_position::int)
       ) ORDER BY c.ordinal_position) AS columns,
       obj_description(format('%I.%I', c.table_schema, c.table_name)::regclass, 'pg_class') AS description
  FROM information_schema.columns c
 WHERE ($1::text[] IS NULL OR c.table_schema::text = ANY ($1))
 GROUP BY c.table_schema, c.table_name
 ORDER BY c.table_schema, c.table_name
"#;

const FOREIGN_KEYS_SQL: &str = r#"
SELECT o.conname::text AS constraint_name,
       sn.nspname::text AS source_schema,
       s.relname::text AS source_table,
       sa.attname::text AS source_column,
       tn.nspname::text AS target_schema,
       t.relname::text AS target_table,
       ta.attname::text AS target_column
  FROM pg_catalog.pg_constraint o
  JOIN pg_catalog.pg_class s ON s.oid = o.conrelid
  JOIN pg_catalog.pg_class t ON t.oid = o.confrelid
  JOIN pg_catalog.pg_namespace sn ON sn.oid = s.relnamespace
  JOIN pg_catalog.pg_namespace tn ON tn.oid = t.relnamespace
 CROSS JOIN LATERAL unnest(o.conkey, o.confkey) AS k(source_attnum, target_attnum)
  JOIN pg_catalog.pg_attribute sa
    ON sa.attrelid = s.oid AND sa.attnum = k.source_attnum AND NOT sa.attisdropped
  JOIN pg_catalog.pg_attribute ta
    ON ta.attrelid = t.oid AND ta.attnum = k.target_attnum AND NOT ta.attisdropped
 WHERE o.contype = 'f'
   AND s.relkind IN ('r', 'p')
   AND ($1::text[] IS NULL OR (sn.nspname::text = ANY ($1) AND tn.nspname::text = ANY ($1)))
 ORDER BY sn.nspname, s.relname, o.conname, sa.attnum
"#;

/// A catalog source backed by a live PostgreSQL connection.
pub struct PostgresCatalog {
    client: Client,
}

impl PostgresCatalog {
    /// Connect to the database at `url`.
    pub async fn connect(url: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(url, NoTls)
            .await
            .map_err(CatalogError::Connect)?;

        // The connection drives the socket and must be polled on its own task.
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                warn!(error = %e, "database connection closed with an error");
            }
        });

        debug!("connected to database");
        Ok(Self { client })
    }

    /// Create the override schema and table if they do not exist yet.
    pub async fn provision_overrides(&self) -> Result<()> {
        let sql = format!(
            "CREATE SCHEMA IF NOT EXISTS \"{schema}\";
             CREATE TABLE IF NOT EXISTS \"{schema}\".\"{table}\" (
                 name varchar(255) NOT NULL PRIMARY KEY,
                 value text NOT NULL
             );",
            schema = OVERRIDE_SCHEMA,
            table = OVERRIDE_TABLE,
        );
        self.client
            .batch_execute(&sql)
            .await
            .map_err(CatalogError::Provision)?;
        debug!(schema = OVERRIDE_SCHEMA, table = OVERRIDE_TABLE, "override table ready");
        Ok(())
    }

    async fn query(&self, kind: ReadKind, sql: &str, filter: &SchemaFilter) -> Result<Vec<Row>> {
        let schemas = filter.as_param();
        let rows = self
            .client
            .query(sql, &[&schemas])
            .await
            .map_err(|source| CatalogError::Query { kind, source })?;
        debug!(kind = %kind, rows = rows.len(), "catalog read complete");
        Ok(rows)
    }
}

fn column<'a, T>(row: &'a Row, kind: ReadKind, name: &str) -> Result<T>
where
    T: tokio_postgres::types::FromSql<'a>,
{
    row.try_get(name)
        .map_err(|e| CatalogError::decode(kind, format!("column '{}': {}", name, e)))
}

impl CatalogSource for PostgresCatalog {
    async fn enum_rows(&self, filter: &SchemaFilter) -> Result<Vec<EnumRow>> {
        let kind = ReadKind::Enums;
        self.query(kind, ENUMS_SQL, filter)
            .await?
            .iter()
            .map(|row| {
                Ok(EnumRow {
                    schema: column(row, kind, "schema")?,
                    type_name: column(row, kind, "type")?,
                    values: column(row, kind, "labels")?,
                    description: column(row, kind, "description")?,
                })
            })
            .collect()
    }

    async fn table_rows(&self, filter: &SchemaFilter) -> Result<Vec<TableRow>> {
        let kind = ReadKind::Tables;
        self.query(kind, TABLES_SQL, filter)
            .await?
            .iter()
            .map(|row| {
                let Json(columns): Json<Vec<ColumnRow>> = column(row, kind, "columns")?;
                Ok(TableRow {
                    schema: column(row, kind, "schema")?,
                    table: column(row, kind, "name")?,
                    columns,
                    description: column(row, kind, "description")?,
                })
            })
            .collect()
    }

    async fn foreign_key_rows(&self, filter: &SchemaFilter) -> Result<Vec<ForeignKeyRow>> {
        let kind = ReadKind::ForeignKeys;
        self.query(kind, FOREIGN_KEYS_SQL, filter)
            .await?
            .iter()
            .map(|row| {
                Ok(ForeignKeyRow {
                    constraint: column(row, kind, "constraint_name")?,
                    source_schema: column(row, kind, "source_schema")?,
                    source_table: column(row, kind, "source_table")?,
                    source_column: column(row, kind, "source_column")?,
                    target_schema: column(row, kind, "target_schema")?,
                    target_table: column(row, kind, "target_table")?,
                    target_column: column(row, kind, "target_column")?,
                })
            })
            .collect()
    }

    async fn override_rows(&self) -> Result<Vec<OverrideRow>> {
        let kind = ReadKind::Overrides;
        let sql = format!(
            "SELECT name::text AS name, value FROM \"{}\".\"{}\" ORDER BY name",
            OVERRIDE_SCHEMA, OVERRIDE_TABLE
        );
        let rows = self
            .client
            .query(&sql, &[])
            .await
            .map_err(|source| CatalogError::Query { kind, source })?;
        rows.iter()
            .map(|row| {
                Ok(OverrideRow {
                    name: column(row, kind, "name")?,
                    value: column(row, kind, "value")?,
                })
            })
            .collect()
    }
}
