use lernstil_core::{ActivityType, PersistenceError, ValidationError};
use thiserror::Error;

/// A call that is not allowed in the current session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("no assessment session; initialize one first")]
    NoSession,
    #[error("assessment is complete; reset it to start over")]
    AssessmentComplete,
    #[error("cannot start {requested}: {active} is still in progress")]
    ActivityInProgress {
        active: ActivityType,
        requested: ActivityType,
    },
    #[error("no activity is in progress")]
    NoActiveActivity,
    #[error("result is for {reported} but {active} is in progress")]
    ActivityMismatch {
        active: ActivityType,
        reported: ActivityType,
    },
    #[error("{0} was already completed")]
    AlreadyCompleted(ActivityType),
}

#[derive(Debug, Error)]
pub enum AssessmentError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("invalid state: {0}")]
    State(#[from] StateError),
    /// The store failed. For mutating calls the in-memory transition has
    /// already been applied when this is returned.
    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistenceError),
}

impl AssessmentError {
    /// True when the operation changed the session despite the error.
    #[must_use]
    pub fn transition_applied(&self) -> bool {
        matches!(self, AssessmentError::Persistence(_))
    }
}

pub type Result<T> = std::result::Result<T, AssessmentError>;
