//! Colored status indicators for progress display.

use colored::{ColoredString, Colorize};

use crate::models::{StageStatus, SubmissionStatus, VivaStatus};

/// Status indicator with color for display
pub fn status_indicator(status: &StageStatus) -> ColoredString {
    match status {
        StageStatus::Completed => "✓".green().bold(),
        StageStatus::VivaApproved => "▶".cyan().bold(),
        StageStatus::VivaProposed => "?".yellow().bold(),
        StageStatus::InProgress => "●".blue().bold(),
        StageStatus::Pending => "○".white().dimmed(),
    }
}

pub fn status_label(status: &StageStatus) -> ColoredString {
    let label = status.label();
    match status {
        StageStatus::Completed => label.green().bold(),
        StageStatus::VivaApproved => label.cyan(),
        StageStatus::VivaProposed => label.yellow(),
        StageStatus::InProgress => label.blue(),
        StageStatus::Pending => label.dimmed(),
    }
}

pub fn viva_status_label(status: Option<VivaStatus>) -> ColoredString {
    match status {
        Some(VivaStatus::Completed) => "completed".green(),
        Some(s @ (VivaStatus::Approved | VivaStatus::Scheduled)) => s.as_str().cyan(),
        Some(VivaStatus::Proposed) => "proposed".yellow(),
        Some(VivaStatus::Rejected) => "rejected".red(),
        None => "unknown".dimmed(),
    }
}

pub fn submission_status_label(status: Option<SubmissionStatus>) -> ColoredString {
    match status {
        Some(SubmissionStatus::Approved) => "approved".green(),
        Some(s @ (SubmissionStatus::Submitted | SubmissionStatus::UnderReview)) => {
            s.as_str().cyan()
        }
        Some(s @ (SubmissionStatus::Rejected | SubmissionStatus::RevisionRequired)) => {
            s.as_str().red()
        }
        Some(SubmissionStatus::Draft) => "draft".dimmed(),
        None => "unknown".dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_keep_text() {
        colored::control::set_override(false);
        assert_eq!(status_label(&StageStatus::VivaApproved).to_string(), "Viva Approved");
        assert_eq!(viva_status_label(Some(VivaStatus::Scheduled)).to_string(), "scheduled");
        assert_eq!(viva_status_label(None).to_string(), "unknown");
        assert_eq!(
            submission_status_label(Some(SubmissionStatus::RevisionRequired)).to_string(),
            "revision_required"
        );
    }
}
