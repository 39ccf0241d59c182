//! Text rendering of progress reports.
//!
//! Renderers write into any `fmt::Write` so the command layer can print them
//! and tests can inspect them.

use colored::Colorize;
use std::fmt::{self, Write};

use crate::catalog::StageCatalog;
use crate::classifier::{ProgressReport, StageProgress, SubmissionSummary};
use crate::models::{SubmissionRecord, VivaTeamRecord};
use crate::records::RecordIssue;

use super::indicators::{
    status_indicator, status_label, submission_status_label, viva_status_label,
};

const RULE_WIDTH: usize = 50;

fn summary_text(summary: &SubmissionSummary) -> String {
    if summary.total() == 0 {
        return "none".to_string();
    }

    let parts: Vec<String> = [
        (summary.approved, "approved"),
        (summary.awaiting_review, "awaiting review"),
        (summary.needs_action, "needs action"),
        (summary.draft, "draft"),
        (summary.unknown, "unknown"),
    ]
    .into_iter()
    .filter(|(count, _)| *count > 0)
    .map(|(count, label)| format!("{count} {label}"))
    .collect();

    parts.join(", ")
}

fn lock_note(progress: &StageProgress) -> Option<String> {
    if progress.available {
        return None;
    }
    progress
        .requires
        .map(|prior| format!("locked until {} is completed", StageCatalog::get(prior).title))
}

/// One line per stage plus its deadline and submissions.
pub fn write_stage_summary<W: Write>(
    w: &mut W,
    position: usize,
    progress: &StageProgress,
) -> fmt::Result {
    write!(
        w,
        "  {} [{}] {:<14} {}",
        status_indicator(&progress.status),
        position,
        progress.title,
        status_label(&progress.status)
    )?;
    if let Some(note) = lock_note(progress) {
        write!(w, "  {}", format!("({note})").dimmed())?;
    }
    writeln!(w)?;
    writeln!(w, "        Deadline: {}", progress.deadline_label)?;
    writeln!(
        w,
        "        Submissions ({}): {}",
        progress.submission_type,
        summary_text(&progress.submission_summary)
    )
}

pub fn write_report<W: Write>(w: &mut W, report: &ProgressReport) -> fmt::Result {
    let heading = match &report.student_id {
        Some(id) => format!("Progress for {id}"),
        None => "Progress".to_string(),
    };
    writeln!(w, "{}", heading.bold().blue())?;
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))?;

    for (index, progress) in report.stages.iter().enumerate() {
        write_stage_summary(w, index + 1, progress)?;
    }

    writeln!(w)?;
    match report.current_stage() {
        Some(current) => writeln!(w, "{} {}", "Current stage:".bold(), current.title),
        None if report.is_complete() => {
            writeln!(w, "{}", "All stages completed".green().bold())
        }
        None => writeln!(w, "{}", "No stage currently available".yellow()),
    }
}

fn write_viva_team<W: Write>(w: &mut W, index: usize, team: &VivaTeamRecord) -> fmt::Result {
    let id = team.id.as_deref().unwrap_or("-");
    write!(w, "    #{index} {id:<12} {}", viva_status_label(team.status()))?;
    if let Some(outcome) = &team.outcome {
        write!(w, " ({outcome})")?;
    }
    if let Some(at) = team.proposed_at {
        write!(w, "  proposed {}", at.format("%Y-%m-%d"))?;
    }
    writeln!(w)
}

fn write_submission<W: Write>(
    w: &mut W,
    index: usize,
    submission: &SubmissionRecord,
) -> fmt::Result {
    let id = submission.id.as_deref().unwrap_or("-");
    write!(
        w,
        "    #{index} {id:<12} {}",
        submission_status_label(submission.status())
    )?;
    if let Some(title) = &submission.title {
        write!(w, "  {title}")?;
    }
    if let Some(at) = submission.submitted_at {
        write!(w, "  submitted {}", at.format("%Y-%m-%d"))?;
    }
    writeln!(w)
}

/// Detailed view of a single stage.
pub fn write_stage_detail<W: Write>(w: &mut W, progress: &StageProgress) -> fmt::Result {
    writeln!(
        w,
        "{} {}",
        progress.title.bold().blue(),
        status_label(&progress.status)
    )?;
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(w, "Deadline:  {}", progress.deadline_label)?;

    let availability = match lock_note(progress) {
        Some(note) => note.yellow(),
        None => "available".green(),
    };
    writeln!(w, "Access:    {availability}")?;
    if let Some(next) = StageCatalog::next(progress.stage) {
        writeln!(w, "Unlocks:   {} once completed", next.title)?;
    }

    writeln!(w, "\n{}", "Viva teams".bold())?;
    if progress.viva_teams.is_empty() {
        writeln!(w, "    {}", "none proposed".dimmed())?;
    }
    for (index, team) in progress.viva_teams.iter().enumerate() {
        write_viva_team(w, index, team)?;
    }

    writeln!(
        w,
        "\n{} ({})",
        "Submissions".bold(),
        progress.submission_type
    )?;
    if progress.submissions.is_empty() {
        writeln!(w, "    {}", "none".dimmed())?;
    }
    for (index, submission) in progress.submissions.iter().enumerate() {
        write_submission(w, index, submission)?;
    }
    Ok(())
}

pub fn write_catalog<W: Write>(w: &mut W) -> fmt::Result {
    writeln!(w, "{}", "Stages".bold().blue())?;
    writeln!(w, "{}", "=".repeat(RULE_WIDTH))?;
    for definition in StageCatalog::all() {
        writeln!(
            w,
            "  [{}] {:<14} {:<14} {}",
            definition.order,
            definition.title,
            definition.submission_type,
            definition.deadline_label.dimmed()
        )?;
    }
    Ok(())
}

pub fn write_issues<W: Write>(w: &mut W, issues: &[RecordIssue]) -> fmt::Result {
    if issues.is_empty() {
        return writeln!(w, "{}", "No issues found".green().bold());
    }
    for issue in issues {
        writeln!(w, "{} {issue}", "WARN:".yellow().bold())?;
    }
    writeln!(
        w,
        "\n{} {}",
        "Found".yellow().bold(),
        format!("{} issue(s)", issues.len()).yellow().bold()
    )
}
