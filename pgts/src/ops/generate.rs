//! Generate operation - catalog rows to a TypeScript file.

use std::path::Path;

use eyre::{Context, Result};
use pgts_catalog::CatalogRows;
use pgts_codegen::pipeline::{Diagnostic, Pipeline};
use pgts_codegen_typescript::{Generator, GeneratorOptions};
use pgts_core::File;
use pgts_ir::{SchemaModel, is_reserved_schema};
use tracing::debug;

use crate::reports::{CatalogStats, GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Destination of the generated file, or `None` to preview it.
    pub output: Option<&'a Path>,
    /// Shape of the emitted file.
    pub generator: GeneratorOptions,
}

/// Execute the generate operation.
///
/// Nothing touches the disk until the whole file has been rendered, so a
/// failed run leaves any previous artifact in place.
pub fn generate(rows: CatalogRows, opts: GenerateOptions) -> Result<GenerateReport> {
    let ctx = Pipeline::new().run(rows).wrap_err("Pipeline failed")?;
    let namespace = opts.generator.namespace.clone();
    let generator = Generator::from_context(ctx, opts.generator)?;
    let stats = stats(generator.model());

    let emission = generator.emit();
    debug!(bytes = emission.content.len(), "file rendered");
    let warnings = emission.warnings().map(warning_text).collect();

    let result = match opts.output {
        None => GenerationResult::Preview(emission.content),
        Some(path) => {
            File::new(path, emission.content)
                .write()
                .wrap_err("Failed to write the generated file")?;
            GenerationResult::Written(path.to_path_buf())
        }
    };

    Ok(GenerateReport {
        namespace,
        stats,
        warnings,
        result,
    })
}

fn stats(model: &SchemaModel) -> CatalogStats {
    model
        .schemas()
        .filter(|(name, _)| !is_reserved_schema(name))
        .fold(
            CatalogStats {
                overrides: model.overrides().len(),
                ..CatalogStats::default()
            },
            |mut stats, (_, schema)| {
                stats.schemas += 1;
                stats.enums += schema.types().count();
                stats.tables += schema.tables().count();
                stats
            },
        )
}

fn warning_text(diagnostic: &Diagnostic) -> String {
    match &diagnostic.location {
        Some(location) => format!("{} (at {})", diagnostic.message, location),
        None => diagnostic.message.clone(),
    }
}
