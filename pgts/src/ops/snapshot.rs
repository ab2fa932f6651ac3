//! Snapshot operation - catalog rows to a JSON file.

use std::path::Path;

use eyre::{Context, Result};
use pgts_catalog::CatalogRows;
use pgts_core::File;

use crate::reports::{SnapshotReport, SnapshotResult};

/// Serialize the rows and write them to `output`, or keep them for stdout.
pub fn snapshot(rows: &CatalogRows, output: Option<&Path>) -> Result<SnapshotReport> {
    let json = rows.to_json().wrap_err("Failed to serialize the catalog rows")?;

    let result = match output {
        Some(path) => {
            File::new(path, json)
                .write()
                .wrap_err("Failed to write the snapshot")?;
            SnapshotResult::Written(path.to_path_buf())
        }
        None => SnapshotResult::Stdout(json),
    };

    Ok(SnapshotReport {
        enums: rows.enums.len(),
        tables: rows.tables.len(),
        foreign_keys: rows.foreign_keys.len(),
        overrides: rows.overrides.len(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use pgts_catalog::{OverrideRow, SnapshotCatalog};
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_written_snapshot_reads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        let rows = CatalogRows {
            overrides: vec![OverrideRow {
                name: "Point".into(),
                value: "{ x: number; y: number }".into(),
            }],
            ..CatalogRows::default()
        };

        let report = snapshot(&rows, Some(&path)).unwrap();

        assert_eq!(report.overrides, 1);
        assert!(matches!(report.result, SnapshotResult::Written(_)));
        let loaded = SnapshotCatalog::from_file(&path).unwrap();
        assert_eq!(loaded.rows(), &rows);
    }

    #[test]
    fn test_stdout_snapshot_is_json() {
        let report = snapshot(&CatalogRows::default(), None).unwrap();

        let SnapshotResult::Stdout(json) = report.result else {
            panic!("expected stdout output");
        };
        assert!(json.contains("\"foreignKeys\": []"));
    }
}
