use anyhow::Result;
use std::path::Path;

use crate::classifier::StageProgress;
use crate::config::OutputFormat;
use crate::models::StageKey;

use super::display::write_stage_detail;
use super::{print_json, Settings};

/// Show one stage of a student's progress in detail
pub fn execute(
    settings: &Settings,
    student_id: &str,
    stage: StageKey,
    file: Option<&Path>,
) -> Result<()> {
    let records = settings.load_student(student_id, file)?;
    let progress = StageProgress::build(stage, &records.viva_teams, &records.submissions);
    tracing::info!(student_id, %stage, status = %progress.status, "classified stage");

    match settings.format {
        OutputFormat::Json => print_json(&progress),
        OutputFormat::Text => {
            let mut out = String::new();
            write_stage_detail(&mut out, &progress)?;
            print!("{out}");
            Ok(())
        }
    }
}
