use thiserror::Error;

/// Input that cannot be accepted by the assessment.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("user id must not be empty")]
    EmptyUserId,
    #[error("activity id must not be empty")]
    EmptyActivityId,
    #[error("activity ended before it started")]
    EndsBeforeStart,
    #[error("field `{field}` must be a finite, non-negative number (got {value})")]
    NotNonNegative { field: &'static str, value: f64 },
    #[error("field `{field}` must lie within {min}..={max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("{correct} correct answers exceed {total} questions")]
    AnswersExceedQuestions { correct: u32, total: u32 },
    #[error("result belongs to user `{result}` but the session is for `{session}`")]
    UserMismatch { session: String, result: String },
}

/// The snapshot store could not read or write.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("snapshot store unavailable: {0}")]
    Unavailable(String),
}
