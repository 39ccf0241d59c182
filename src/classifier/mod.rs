//! Stage-progress classification.
//!
//! Everything in this module is a pure function of the records passed in:
//! no I/O, no caching, no interior state. Callers recompute from fresh
//! records whenever they change.

mod classify;
mod report;

#[cfg(test)]
mod tests;

pub use classify::{
    classify_stage, filter_submissions_by_type, is_stage_available, viva_teams_for_stage,
};
pub use report::{classify_student, ProgressReport, StageProgress, SubmissionSummary};
