use serde::Serialize;
use std::fmt;

use crate::models::{Lenient, VivaStatus};

use super::StudentRecords;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    VivaTeam,
    Submission,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::VivaTeam => write!(f, "viva team"),
            RecordKind::Submission => write!(f, "submission"),
        }
    }
}

/// A record field that could not be used as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssue {
    pub kind: RecordKind,
    /// Position of the record in its collection
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    pub field: &'static str,
    /// Raw value when present but unrecognised; `None` when missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.kind, self.index)?;
        if let Some(id) = &self.record_id {
            write!(f, " ({id})")?;
        }
        match &self.value {
            Some(value) => write!(f, ": unrecognised {} '{value}'", self.field),
            None => write!(f, ": missing {}", self.field),
        }
    }
}

fn check_field<T>(
    issues: &mut Vec<RecordIssue>,
    kind: RecordKind,
    index: usize,
    record_id: &Option<String>,
    field: &'static str,
    value: &Option<Lenient<T>>,
) {
    let raw = match value {
        Some(value) => match value.unrecognized() {
            Some(raw) => Some(raw.to_string()),
            None => return,
        },
        None => None,
    };
    issues.push(RecordIssue {
        kind,
        index,
        record_id: record_id.clone(),
        field,
        value: raw,
    });
}

pub(super) fn collect(records: &StudentRecords) -> Vec<RecordIssue> {
    let mut issues = Vec::new();

    for (index, team) in records.viva_teams.iter().enumerate() {
        let kind = RecordKind::VivaTeam;
        check_field(&mut issues, kind, index, &team.id, "stage", &team.stage);
        check_field(&mut issues, kind, index, &team.id, "status", &team.status);

        // A missing outcome only matters once the viva has taken place.
        if team.outcome.is_some() || team.status() == Some(VivaStatus::Completed) {
            check_field(&mut issues, kind, index, &team.id, "outcome", &team.outcome);
        }
    }

    for (index, submission) in records.submissions.iter().enumerate() {
        let kind = RecordKind::Submission;
        check_field(
            &mut issues,
            kind,
            index,
            &submission.id,
            "submission_type",
            &submission.submission_type,
        );
        check_field(&mut issues, kind, index, &submission.id, "status", &submission.status);
    }

    issues
}
