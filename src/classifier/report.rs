use serde::Serialize;

use crate::catalog::StageCatalog;
use crate::models::{
    StageKey, StageStatus, SubmissionRecord, SubmissionStatus, SubmissionType, VivaTeamRecord,
};

use super::classify::{
    classify_stage, filter_submissions_by_type, is_stage_available, viva_teams_for_stage,
};

/// Submission counts for one stage, grouped by review state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionSummary {
    pub draft: usize,
    /// Submitted or under review
    pub awaiting_review: usize,
    pub approved: usize,
    /// Rejected or returned for revision
    pub needs_action: usize,
    pub unknown: usize,
}

impl SubmissionSummary {
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SubmissionRecord>,
    {
        let mut summary = Self::default();
        for record in records {
            match record.status() {
                Some(SubmissionStatus::Draft) => summary.draft += 1,
                Some(SubmissionStatus::Submitted | SubmissionStatus::UnderReview) => {
                    summary.awaiting_review += 1
                }
                Some(SubmissionStatus::Approved) => summary.approved += 1,
                Some(SubmissionStatus::Rejected | SubmissionStatus::RevisionRequired) => {
                    summary.needs_action += 1
                }
                None => summary.unknown += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.draft + self.awaiting_review + self.approved + self.needs_action + self.unknown
    }
}

/// Classified view of one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageProgress {
    pub stage: StageKey,
    pub title: &'static str,
    pub deadline_label: &'static str,
    pub status: StageStatus,
    pub available: bool,
    /// Stage that has to be completed first, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<StageKey>,
    pub submission_type: SubmissionType,
    pub viva_teams: Vec<VivaTeamRecord>,
    pub submissions: Vec<SubmissionRecord>,
    pub submission_summary: SubmissionSummary,
}

impl StageProgress {
    /// Classify a single stage against the student's records.
    pub fn build(
        stage: StageKey,
        viva_teams: &[VivaTeamRecord],
        submissions: &[SubmissionRecord],
    ) -> Self {
        let definition = StageCatalog::get(stage);
        let stage_submissions = filter_submissions_by_type(submissions, definition.submission_type);

        Self {
            stage,
            title: definition.title,
            deadline_label: definition.deadline_label,
            status: classify_stage(stage, viva_teams),
            available: is_stage_available(stage, viva_teams),
            requires: StageCatalog::previous(stage).map(|prior| prior.key),
            submission_type: definition.submission_type,
            viva_teams: viva_teams_for_stage(stage, viva_teams)
                .into_iter()
                .cloned()
                .collect(),
            submission_summary: SubmissionSummary::from_records(stage_submissions.iter().copied()),
            submissions: stage_submissions.into_iter().cloned().collect(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == StageStatus::Completed
    }
}

/// Progress of every catalog stage for one student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    pub stages: Vec<StageProgress>,
}

impl ProgressReport {
    pub fn with_student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    pub fn stage(&self, key: StageKey) -> Option<&StageProgress> {
        self.stages.iter().find(|progress| progress.stage == key)
    }

    /// The stage the student is working towards: the first available stage
    /// that is not yet completed.
    pub fn current_stage(&self) -> Option<&StageProgress> {
        self.stages
            .iter()
            .find(|progress| progress.available && !progress.is_completed())
    }

    pub fn is_complete(&self) -> bool {
        self.stages.iter().all(StageProgress::is_completed)
    }
}

/// Classify every stage in catalog order.
pub fn classify_student(
    viva_teams: &[VivaTeamRecord],
    submissions: &[SubmissionRecord],
) -> ProgressReport {
    let stages = StageCatalog::all()
        .iter()
        .map(|definition| StageProgress::build(definition.key, viva_teams, submissions))
        .collect();

    ProgressReport {
        student_id: None,
        stages,
    }
}
