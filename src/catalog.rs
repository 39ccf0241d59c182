//! Static catalog of the academic stages.
//!
//! The catalog is the only place that knows which submission type belongs to
//! which stage and in which order stages unlock. It is a `'static` table, so
//! nothing can change it while a classification is running.

use serde::Serialize;

use crate::models::{StageKey, SubmissionType};

/// Static description of one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StageDefinition {
    pub key: StageKey,
    pub title: &'static str,
    /// Submission type the student uploads for this stage
    pub submission_type: SubmissionType,
    /// Unlock order, starting at 0
    pub order: u8,
    /// Display-only; never compared against dates
    pub deadline_label: &'static str,
}

static STAGES: [StageDefinition; 3] = [
    StageDefinition {
        key: StageKey::Registration,
        title: "Registration",
        submission_type: SubmissionType::Registration,
        order: 0,
        deadline_label: "Within 12 months of enrolment",
    },
    StageDefinition {
        key: StageKey::Progression,
        title: "Progression",
        submission_type: SubmissionType::AnnualReport,
        order: 1,
        deadline_label: "Within 24 months of enrolment",
    },
    StageDefinition {
        key: StageKey::Final,
        title: "Final Thesis",
        submission_type: SubmissionType::Thesis,
        order: 2,
        deadline_label: "Within 48 months of enrolment",
    },
];

/// Lookup facade over the stage table.
pub struct StageCatalog;

impl StageCatalog {
    /// All stages, ordered by unlock order.
    pub fn all() -> &'static [StageDefinition] {
        &STAGES
    }

    pub fn get(key: StageKey) -> &'static StageDefinition {
        match key {
            StageKey::Registration => &STAGES[0],
            StageKey::Progression => &STAGES[1],
            StageKey::Final => &STAGES[2],
        }
    }

    /// The stage that must be completed before `key` unlocks.
    pub fn previous(key: StageKey) -> Option<&'static StageDefinition> {
        let order = Self::get(key).order as usize;
        order.checked_sub(1).map(|prev| &STAGES[prev])
    }

    pub fn next(key: StageKey) -> Option<&'static StageDefinition> {
        STAGES.get(Self::get(key).order as usize + 1)
    }

    /// Reverse lookup: the stage a submission type belongs to.
    ///
    /// Submission types outside the catalog (viva documents, corrections)
    /// are not tied to a single stage.
    pub fn stage_for_submission_type(submission_type: SubmissionType) -> Option<StageKey> {
        STAGES
            .iter()
            .find(|def| def.submission_type == submission_type)
            .map(|def| def.key)
    }
}

/// Resolve the submission type for a raw stage key.
///
/// Unknown keys fall back to the registration submission type instead of
/// failing.
pub fn resolve_submission_type_for_stage(stage: &str) -> SubmissionType {
    match stage.parse::<StageKey>() {
        Ok(key) => StageCatalog::get(key).submission_type,
        Err(err) => {
            tracing::debug!(%err, "falling back to registration submission type");
            StageCatalog::get(StageKey::Registration).submission_type
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_ordered() {
        let orders: Vec<u8> = StageCatalog::all().iter().map(|d| d.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);

        let keys: Vec<StageKey> = StageCatalog::all().iter().map(|d| d.key).collect();
        assert_eq!(keys, StageKey::ALL.to_vec());
    }

    #[test]
    fn test_get_matches_key() {
        for key in StageKey::ALL {
            assert_eq!(StageCatalog::get(key).key, key);
        }
    }

    #[test]
    fn test_previous_and_next() {
        assert!(StageCatalog::previous(StageKey::Registration).is_none());
        assert_eq!(
            StageCatalog::previous(StageKey::Progression).map(|d| d.key),
            Some(StageKey::Registration)
        );
        assert_eq!(
            StageCatalog::previous(StageKey::Final).map(|d| d.key),
            Some(StageKey::Progression)
        );
        assert_eq!(
            StageCatalog::next(StageKey::Registration).map(|d| d.key),
            Some(StageKey::Progression)
        );
        assert!(StageCatalog::next(StageKey::Final).is_none());
    }

    #[test]
    fn test_resolve_submission_type() {
        assert_eq!(
            resolve_submission_type_for_stage("registration"),
            SubmissionType::Registration
        );
        assert_eq!(
            resolve_submission_type_for_stage("progression"),
            SubmissionType::AnnualReport
        );
        assert_eq!(resolve_submission_type_for_stage("final"), SubmissionType::Thesis);
    }

    #[test]
    fn test_resolve_unknown_stage_falls_back_to_registration() {
        assert_eq!(
            resolve_submission_type_for_stage("unknown"),
            SubmissionType::Registration
        );
        assert_eq!(resolve_submission_type_for_stage(""), SubmissionType::Registration);
    }

    #[test]
    fn test_stage_for_submission_type() {
        assert_eq!(
            StageCatalog::stage_for_submission_type(SubmissionType::AnnualReport),
            Some(StageKey::Progression)
        );
        assert_eq!(
            StageCatalog::stage_for_submission_type(SubmissionType::Thesis),
            Some(StageKey::Final)
        );
        assert_eq!(
            StageCatalog::stage_for_submission_type(SubmissionType::Correction),
            None
        );
    }
}
