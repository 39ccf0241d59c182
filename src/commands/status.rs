use anyhow::Result;
use std::path::Path;

use crate::config::OutputFormat;

use super::display::write_report;
use super::{print_json, Settings};

/// Show the progress dashboard for a student
pub fn execute(settings: &Settings, student_id: &str, file: Option<&Path>) -> Result<()> {
    let records = settings.load_student(student_id, file)?;
    let report = records.progress();
    tracing::info!(
        student_id,
        current = ?report.current_stage().map(|s| s.stage),
        "classified student progress"
    );

    match settings.format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Text => {
            let mut out = String::new();
            write_report(&mut out, &report)?;
            print!("{out}");
            Ok(())
        }
    }
}
