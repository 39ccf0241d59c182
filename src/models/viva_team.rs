use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::serialization::Lenient;
use super::stage::StageKey;

/// Lifecycle status of a proposed viva team, as reported by the backend.
///
/// Transitions happen server-side:
/// - `Proposed` -> `Approved` | `Rejected`
/// - `Approved` -> `Scheduled`
/// - `Scheduled` -> `Completed` (with an outcome)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VivaStatus {
    Proposed,
    Approved,
    Rejected,
    Scheduled,
    Completed,
}

impl VivaStatus {
    pub const ALL: [VivaStatus; 5] = [
        VivaStatus::Proposed,
        VivaStatus::Approved,
        VivaStatus::Rejected,
        VivaStatus::Scheduled,
        VivaStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VivaStatus::Proposed => "proposed",
            VivaStatus::Approved => "approved",
            VivaStatus::Rejected => "rejected",
            VivaStatus::Scheduled => "scheduled",
            VivaStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for VivaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for VivaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VivaStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown viva status: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VivaOutcome {
    Pass,
    Fail,
}

impl VivaOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            VivaOutcome::Pass => "pass",
            VivaOutcome::Fail => "fail",
        }
    }
}

impl fmt::Display for VivaOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for VivaOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass" => Ok(VivaOutcome::Pass),
            "fail" => Ok(VivaOutcome::Fail),
            _ => Err(format!("unknown viva outcome: {s}")),
        }
    }
}

/// A viva team proposed for one of the student's stages.
///
/// Fields are optional because exported records are not guaranteed to be
/// complete; a record with no recognisable stage never matches any stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VivaTeamRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub stage: Option<Lenient<StageKey>>,
    #[serde(default)]
    pub status: Option<Lenient<VivaStatus>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Lenient<VivaOutcome>>,
    /// When the team was proposed, if the export carries it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_at: Option<DateTime<Utc>>,
}

impl VivaTeamRecord {
    pub fn new(stage: StageKey, status: VivaStatus) -> Self {
        Self {
            stage: Some(stage.into()),
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn with_outcome(mut self, outcome: VivaOutcome) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn stage(&self) -> Option<StageKey> {
        self.stage.as_ref().and_then(Lenient::known).copied()
    }

    pub fn status(&self) -> Option<VivaStatus> {
        self.status.as_ref().and_then(Lenient::known).copied()
    }

    pub fn outcome(&self) -> Option<VivaOutcome> {
        self.outcome.as_ref().and_then(Lenient::known).copied()
    }

    /// A completed viva with a pass outcome.
    pub fn is_passed(&self) -> bool {
        self.status() == Some(VivaStatus::Completed) && self.outcome() == Some(VivaOutcome::Pass)
    }
}
