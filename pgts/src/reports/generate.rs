//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Root namespace of the emitted file.
    pub namespace: String,

    /// What went into the file.
    pub stats: CatalogStats,

    /// Warning messages from the pipeline and the emitter.
    pub warnings: Vec<String>,

    /// Where the file went.
    pub result: GenerationResult,
}

/// Counts of emitted declarations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub schemas: usize,
    pub enums: usize,
    pub tables: usize,
    pub overrides: usize,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written to disk.
    Written(PathBuf),
    /// Dry-run preview with the full file content.
    Preview(String),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            // The preview is the artifact itself so it can be piped.
            GenerationResult::Preview(content) => out.preformatted(content),
            GenerationResult::Written(path) => {
                out.key_value("Generated", &path.display().to_string());
                out.key_value_indented("namespace", &self.namespace);
                out.key_value_indented("schemas", &self.stats.schemas.to_string());
                out.key_value_indented("enum types", &self.stats.enums.to_string());
                out.key_value_indented("tables", &self.stats.tables.to_string());
                if self.stats.overrides > 0 {
                    out.key_value_indented("overrides", &self.stats.overrides.to_string());
                }
            }
        }
    }
}
