pub mod serialization;
pub mod stage;
pub mod submission;
pub mod viva_team;

pub use serialization::Lenient;
pub use stage::{StageKey, StageStatus, UnknownStage};
pub use submission::{SubmissionRecord, SubmissionStatus, SubmissionType};
pub use viva_team::{VivaOutcome, VivaStatus, VivaTeamRecord};
