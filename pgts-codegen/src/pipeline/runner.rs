//! Pipeline orchestrator.

use eyre::{Result, WrapErr};
use pgts_catalog::CatalogRows;

use super::{
    CompilationContext, Phase,
    phases::{LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, lower) followed by any user phases.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().phase(MyCustomPhase);
/// let ctx = pipeline.run(rows)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the default lints.
    pub fn new() -> Self {
        Self::with_validation(ValidatePhase::new())
    }

    /// Create a pipeline with a custom validate phase.
    pub fn with_validation(validate: ValidatePhase) -> Self {
        Self {
            validate,
            phases: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on fetched catalog rows.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - lints rows, collects diagnostics
    /// 2. LowerPhase - builds the schema model
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, rows: CatalogRows) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(rows);

        run_phase(&self.validate, &mut ctx)?;
        run_phase(&LowerPhase, &mut ctx)?;
        for phase in &self.phases {
            run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }
}

fn run_phase(phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
    phase
        .run(ctx)
        .wrap_err_with(|| format!("{} phase failed", phase.name()))
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pgts_catalog::{EnumRow, OverrideRow};

    use super::*;
    use crate::pipeline::Diagnostic;

    struct CountTypesPhase;

    impl Phase for CountTypesPhase {
        fn name(&self) -> &'static str {
            "count"
        }

        fn description(&self) -> &'static str {
            "Report how many enum types were lowered"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let count = ctx.model.as_ref().map_or(0, |m| m.type_count());
            ctx.add_diagnostic(Diagnostic::info("count", format!("{} types", count)));
            Ok(())
        }
    }

    fn rows() -> CatalogRows {
        CatalogRows {
            enums: vec![EnumRow {
                schema: "shop".into(),
                type_name: "order_status".into(),
                values: vec!["pending".into(), "paid".into()],
                description: None,
            }],
            overrides: vec![
                OverrideRow {
                    name: "Money".into(),
                    value: "string".into(),
                },
                OverrideRow {
                    name: "Money".into(),
                    value: "number".into(),
                },
            ],
            ..CatalogRows::default()
        }
    }

    #[test]
    fn test_pipeline_builds_model() {
        let mut ctx = Pipeline::new().run(rows()).expect("pipeline should succeed");

        let model = ctx.take_model().unwrap();
        assert_eq!(model.type_count(), 1);
        assert_eq!(model.overrides().len(), 2);
    }

    #[test]
    fn test_pipeline_keeps_lint_warnings() {
        let ctx = Pipeline::new().run(rows()).unwrap();

        assert_eq!(ctx.warning_count(), 1);
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_user_phase_runs_after_lowering() {
        let ctx = Pipeline::new()
            .phase(CountTypesPhase)
            .run(rows())
            .unwrap();

        let info = ctx.diagnostics.last().unwrap();
        assert_eq!(info.message, "1 types");
    }
}
