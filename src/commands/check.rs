use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::catalog::StageCatalog;
use crate::config::OutputFormat;
use crate::records::{load_records_file, RecordIssue, StudentRecords};

use super::display::write_issues;
use super::print_json;

#[derive(Serialize)]
struct CheckReport<'a> {
    path: String,
    viva_teams: usize,
    submissions: usize,
    /// Recognised submissions whose type belongs to no stage
    unstaged_submissions: usize,
    issues: &'a [RecordIssue],
}

/// Submissions with a known type that no stage collects, such as
/// corrections. They load fine but never appear in a stage view.
fn unstaged_submissions(records: &StudentRecords) -> usize {
    records
        .submissions
        .iter()
        .filter_map(|submission| submission.submission_type())
        .filter(|ty| StageCatalog::stage_for_submission_type(*ty).is_none())
        .count()
}

/// Load a records file and report fields that had to be coerced.
///
/// Unparseable files are an error; coerced fields are only reported.
pub fn execute(path: &Path, format: OutputFormat) -> Result<()> {
    let records = load_records_file(path)
        .with_context(|| format!("Failed to check {}", path.display()))?;
    let issues = records.issues();
    let unstaged = unstaged_submissions(&records);

    match format {
        OutputFormat::Json => print_json(&CheckReport {
            path: path.display().to_string(),
            viva_teams: records.viva_teams.len(),
            submissions: records.submissions.len(),
            unstaged_submissions: unstaged,
            issues: &issues,
        }),
        OutputFormat::Text => {
            println!(
                "{}: {} viva team(s), {} submission(s)",
                path.display(),
                records.viva_teams.len(),
                records.submissions.len()
            );
            if unstaged > 0 {
                println!("{unstaged} submission(s) belong to no stage");
            }
            let mut out = String::new();
            write_issues(&mut out, &issues)?;
            print!("{out}");
            Ok(())
        }
    }
}
