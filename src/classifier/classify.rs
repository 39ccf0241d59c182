use crate::catalog::StageCatalog;
use crate::models::{
    StageKey, StageStatus, SubmissionRecord, SubmissionType, VivaStatus, VivaTeamRecord,
};

/// Viva-team records that belong to `stage`, in input order.
pub fn viva_teams_for_stage(
    stage: StageKey,
    viva_teams: &[VivaTeamRecord],
) -> Vec<&VivaTeamRecord> {
    viva_teams
        .iter()
        .filter(|team| team.stage() == Some(stage))
        .collect()
}

/// Derive the progress status of `stage` from the student's viva teams.
///
/// Precedence is fixed: `Completed` > `Viva Approved` > `Viva Proposed` >
/// the stage default. Any single passing record completes the stage, no
/// matter how many other records coexist. Rejected teams and records with
/// unrecognised statuses never decide the result on their own.
///
/// # Arguments
/// * `stage` - The stage to classify
/// * `viva_teams` - All of the student's viva-team records, unfiltered
pub fn classify_stage(stage: StageKey, viva_teams: &[VivaTeamRecord]) -> StageStatus {
    let stage_teams = viva_teams_for_stage(stage, viva_teams);

    if stage_teams.iter().any(|team| team.is_passed()) {
        return StageStatus::Completed;
    }

    if stage_teams.iter().any(|team| {
        matches!(
            team.status(),
            Some(VivaStatus::Approved) | Some(VivaStatus::Scheduled)
        )
    }) {
        return StageStatus::VivaApproved;
    }

    if stage_teams
        .iter()
        .any(|team| team.status() == Some(VivaStatus::Proposed))
    {
        return StageStatus::VivaProposed;
    }

    StageStatus::default_for(stage)
}

/// Submissions of the given type, insertion order preserved.
pub fn filter_submissions_by_type(
    submissions: &[SubmissionRecord],
    submission_type: SubmissionType,
) -> Vec<&SubmissionRecord> {
    submissions
        .iter()
        .filter(|submission| submission.submission_type() == Some(submission_type))
        .collect()
}

/// Whether the student may interact with `stage`.
///
/// Registration is always available. Every later stage requires the stage
/// before it to classify as `Completed`; a stage's own viva never unlocks it.
pub fn is_stage_available(stage: StageKey, viva_teams: &[VivaTeamRecord]) -> bool {
    match StageCatalog::previous(stage) {
        None => true,
        Some(prior) => classify_stage(prior.key, viva_teams).unlocks_next(),
    }
}
