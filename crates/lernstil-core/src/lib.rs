//! Core types for the lernstil learning-style assessment.
//!
//! The activity results, score vector, session state and the snapshot
//! persistence seam live here; the scoring rules and the controller are in
//! `lernstil-engine`.

pub mod activity;
pub mod error;
pub mod scores;
pub mod session;

pub use activity::{
    ActivityResult, ActivityType, AudioVisualTelemetry, MemoryChallengeTelemetry,
    ParseActivityTypeError, ProblemSolvingTelemetry, ReadingWritingTelemetry, Telemetry,
};
pub use error::{PersistenceError, ValidationError};
pub use scores::{LearningType, LearningTypeScores, ParseLearningTypeError};
pub use session::{AssessmentSnapshot, AssessmentState, UserLearningProfile, TOTAL_ACTIVITIES};

/// Logical key under which the assessment snapshot is stored.
pub const SNAPSHOT_KEY: &str = "learning-assessment";

/// Persistence collaborator for assessment snapshots.
///
/// Implementations store the snapshot as-is and return it unchanged from
/// [`SnapshotStore::load`]. `Ok(None)` means nothing was stored yet.
pub trait SnapshotStore {
    fn save(&mut self, snapshot: &AssessmentSnapshot) -> Result<(), PersistenceError>;
    fn load(&self) -> Result<Option<AssessmentSnapshot>, PersistenceError>;
}
