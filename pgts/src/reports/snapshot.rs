//! Snapshot command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a catalog dump.
#[derive(Debug)]
pub struct SnapshotReport {
    pub enums: usize,
    pub tables: usize,
    pub foreign_keys: usize,
    pub overrides: usize,
    pub result: SnapshotResult,
}

/// Where the snapshot went.
#[derive(Debug)]
pub enum SnapshotResult {
    Written(PathBuf),
    /// No destination was given; the JSON goes to stdout.
    Stdout(String),
}

impl Report for SnapshotReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            SnapshotResult::Stdout(json) => out.preformatted(json),
            SnapshotResult::Written(path) => {
                out.key_value("Snapshot", &path.display().to_string());
                out.key_value_indented("enum types", &self.enums.to_string());
                out.key_value_indented("tables", &self.tables.to_string());
                out.key_value_indented("foreign keys", &self.foreign_keys.to_string());
                out.key_value_indented("overrides", &self.overrides.to_string());
            }
        }
    }
}
