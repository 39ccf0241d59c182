use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three sequential academic milestones of a PGR student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKey {
    Registration,
    Progression,
    Final,
}

impl StageKey {
    /// All stages in unlock order.
    pub const ALL: [StageKey; 3] = [StageKey::Registration, StageKey::Progression, StageKey::Final];

    pub fn as_str(&self) -> &'static str {
        match self {
            StageKey::Registration => "registration",
            StageKey::Progression => "progression",
            StageKey::Final => "final",
        }
    }
}

impl fmt::Display for StageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown stage '{0}' (expected registration, progression or final)")]
pub struct UnknownStage(pub String);

impl FromStr for StageKey {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registration" => Ok(StageKey::Registration),
            "progression" => Ok(StageKey::Progression),
            "final" => Ok(StageKey::Final),
            _ => Err(UnknownStage(s.to_string())),
        }
    }
}

/// Presentation-facing progress of a stage, derived from viva-team records.
///
/// Variants are ordered by how far the stage has advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StageStatus {
    #[serde(rename = "Pending")]
    Pending,

    #[serde(rename = "In Progress")]
    InProgress,

    #[serde(rename = "Viva Proposed")]
    VivaProposed,

    #[serde(rename = "Viva Approved")]
    VivaApproved,

    #[serde(rename = "Completed")]
    Completed,
}

impl StageStatus {
    /// Status reported for a stage with no decisive viva-team record.
    ///
    /// Registration starts as soon as the student is enrolled, so it is
    /// already in progress; later stages wait.
    pub fn default_for(stage: StageKey) -> Self {
        match stage {
            StageKey::Registration => StageStatus::InProgress,
            StageKey::Progression | StageKey::Final => StageStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StageStatus::Pending => "Pending",
            StageStatus::InProgress => "In Progress",
            StageStatus::VivaProposed => "Viva Proposed",
            StageStatus::VivaApproved => "Viva Approved",
            StageStatus::Completed => "Completed",
        }
    }

    /// Whether a stage in this status unlocks the stage after it.
    pub fn unlocks_next(&self) -> bool {
        matches!(self, StageStatus::Completed)
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
