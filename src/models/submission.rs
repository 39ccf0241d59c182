use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::serialization::Lenient;

/// Kind of document a student submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionType {
    Registration,
    AnnualReport,
    Thesis,
    VivaDocument,
    Correction,
}

impl SubmissionType {
    pub const ALL: [SubmissionType; 5] = [
        SubmissionType::Registration,
        SubmissionType::AnnualReport,
        SubmissionType::Thesis,
        SubmissionType::VivaDocument,
        SubmissionType::Correction,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionType::Registration => "registration",
            SubmissionType::AnnualReport => "annual_report",
            SubmissionType::Thesis => "thesis",
            SubmissionType::VivaDocument => "viva_document",
            SubmissionType::Correction => "correction",
        }
    }
}

impl fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SubmissionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubmissionType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("unknown submission type: {s}"))
    }
}

/// Review status of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    UnderReview,
    Approved,
    Rejected,
    RevisionRequired,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 6] = [
        SubmissionStatus::Draft,
        SubmissionStatus::Submitted,
        SubmissionStatus::UnderReview,
        SubmissionStatus::Approved,
        SubmissionStatus::Rejected,
        SubmissionStatus::RevisionRequired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "draft",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::UnderReview => "under_review",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
            SubmissionStatus::RevisionRequired => "revision_required",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubmissionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown submission status: {s}"))
    }
}

/// A document submitted by the student for review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub submission_type: Option<Lenient<SubmissionType>>,
    #[serde(default)]
    pub status: Option<Lenient<SubmissionStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl SubmissionRecord {
    pub fn new(submission_type: SubmissionType, status: SubmissionStatus) -> Self {
        Self {
            submission_type: Some(submission_type.into()),
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn submission_type(&self) -> Option<SubmissionType> {
        self.submission_type.as_ref().and_then(Lenient::known).copied()
    }

    pub fn status(&self) -> Option<SubmissionStatus> {
        self.status.as_ref().and_then(Lenient::known).copied()
    }
}
