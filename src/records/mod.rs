//! Loading student records at the boundary of the classifier.
//!
//! Records are exported by the PGR backend as JSON or YAML documents. This
//! module is the only place that touches the filesystem; malformed fields are
//! coerced here and reported as [`RecordIssue`]s so classification never
//! has to fail.

mod error;
mod file;
mod issues;

pub use error::RecordsError;
pub use file::{load_records_file, FileRecordsSource, RecordsFormat};
pub use issues::{RecordIssue, RecordKind};

use serde::{Deserialize, Serialize};

use crate::classifier::{classify_student, ProgressReport};
use crate::models::{SubmissionRecord, VivaTeamRecord};

/// Both record collections for one student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecords {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default)]
    pub viva_teams: Vec<VivaTeamRecord>,
    #[serde(default)]
    pub submissions: Vec<SubmissionRecord>,
}

impl StudentRecords {
    /// Classify every stage from these records.
    pub fn progress(&self) -> ProgressReport {
        let report = classify_student(&self.viva_teams, &self.submissions);
        match &self.student_id {
            Some(id) => report.with_student_id(id.clone()),
            None => report,
        }
    }

    /// Ensure the document belongs to `student_id`, filling the id in when
    /// the document omits it.
    pub fn ensure_student(&mut self, student_id: &str) -> Result<(), RecordsError> {
        if let Some(found) = &self.student_id {
            if found != student_id {
                return Err(RecordsError::StudentMismatch {
                    expected: student_id.to_string(),
                    found: found.clone(),
                });
            }
            return Ok(());
        }

        self.student_id = Some(student_id.to_string());
        Ok(())
    }

    /// Fields that were missing or unrecognised and have been coerced.
    pub fn issues(&self) -> Vec<RecordIssue> {
        issues::collect(self)
    }
}

/// Where student records come from.
pub trait RecordsSource {
    fn load(&self, student_id: &str) -> Result<StudentRecords, RecordsError>;
}
