//! Init command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from `pgts init`.
#[derive(Debug)]
pub struct InitReport {
    /// Path of the configuration file.
    pub config_path: PathBuf,

    /// False when a configuration file was already present.
    pub config_created: bool,

    /// Qualified name of the provisioned override table, if the database
    /// step ran.
    pub override_table: Option<String>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let config = self.config_path.display().to_string();
        if self.config_created {
            out.added_item(&config);
        } else {
            out.list_item(&format!("{} already exists, left unchanged", config));
        }

        let Some(table) = &self.override_table else {
            return;
        };
        out.added_item(table);
        out.newline();

        out.section("Declare a custom type");
        out.preformatted(&format!(
            "  INSERT INTO {} (name, value) VALUES ('Point', '{{ x: number; y: number }}');",
            table
        ));
        out.newline();
        out.section("Use it for a column");
        out.preformatted(
            "  COMMENT ON COLUMN public.places.location IS 'Where it is @custom PsqlToTs.Point';",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_existing_config_without_database() {
        let report = InitReport {
            config_path: PathBuf::from("pgts.toml"),
            config_created: false,
            override_table: None,
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.stdout, ["  - pgts.toml already exists, left unchanged"]);
    }

    #[test]
    fn test_provisioned_table_prints_usage() {
        let report = InitReport {
            config_path: PathBuf::from("pgts.toml"),
            config_created: true,
            override_table: Some("psql_to_ts.custom".into()),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.stdout[0], "  + pgts.toml");
        assert_eq!(out.stdout[1], "  + psql_to_ts.custom");
        assert!(
            out.stdout
                .iter()
                .any(|line| line.contains("INSERT INTO psql_to_ts.custom (name, value)"))
        );
        assert!(out.stdout.iter().any(|line| line.contains("@custom PsqlToTs.Point")));
    }
}
