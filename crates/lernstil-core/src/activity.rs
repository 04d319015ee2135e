//! Activity types and the telemetry each activity reports back.
//!
//! An [`ActivityResult`] is produced by one of the four activity UIs and handed
//! to the assessment controller. The telemetry payload is a sum type keyed by
//! [`ActivityType`], so the JSON form carries an `activityType` tag next to the
//! common fields:
//!
//! ```json
//! {
//!   "activityId": "mc-1",
//!   "userId": "user-42",
//!   "startTime": "2024-03-01T10:00:00Z",
//!   "endTime": "2024-03-01T10:04:00Z",
//!   "completionTime": 240000,
//!   "activityType": "memory_challenge",
//!   "recallAccuracy": 80.0,
//!   ...
//! }
//! ```

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::OffsetDateTime;

/// The four fixed assessment activities, in canonical priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    MemoryChallenge,
    ProblemSolving,
    AudioVisual,
    ReadingWriting,
}

impl ActivityType {
    /// All activity types in canonical order (recommendation and tie-break order).
    pub const ALL: [ActivityType; 4] = [
        ActivityType::MemoryChallenge,
        ActivityType::ProblemSolving,
        ActivityType::AudioVisual,
        ActivityType::ReadingWriting,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityType::MemoryChallenge => "memory_challenge",
            ActivityType::ProblemSolving => "problem_solving",
            ActivityType::AudioVisual => "audio_visual",
            ActivityType::ReadingWriting => "reading_writing",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown activity type: {0}")]
pub struct ParseActivityTypeError(String);

impl FromStr for ActivityType {
    type Err = ParseActivityTypeError;

    /// Accepts the snake_case wire name as well as a kebab-case spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ActivityType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ParseActivityTypeError(s.to_string()))
    }
}

/// Telemetry from the memory challenge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryChallengeTelemetry {
    /// Percentage, 0–100.
    pub recall_accuracy: f64,
    /// Average response time in milliseconds.
    pub response_time: f64,
    /// 1–10 scale.
    pub engagement_level: f64,
    pub correct_answers: u32,
    pub total_questions: u32,
    pub visual_elements_recalled: u32,
}

/// Telemetry from the drag-and-drop problem solving task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSolvingTelemetry {
    pub interaction_count: u32,
    pub steps_to_complete: u32,
    pub efficiency: f64,
    pub drag_drop_actions: u32,
    pub click_actions: u32,
    pub task_completed: bool,
}

/// Telemetry from the audio/visual comprehension task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioVisualTelemetry {
    /// 1–10 scale.
    pub audio_preference: f64,
    /// Percentage, 0–100.
    pub answer_accuracy: f64,
    /// Milliseconds.
    pub time_listening: u64,
    /// Milliseconds.
    pub time_viewing: u64,
    pub video_muted: bool,
    /// `time_listening / total_time`, 0–1.
    pub audio_focus_ratio: f64,
}

/// Telemetry from the reading and summary writing task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingWritingTelemetry {
    /// Words per minute.
    pub reading_speed: f64,
    /// Highlights and notes.
    pub text_interactions: u32,
    /// Percentage, 0–100.
    pub response_accuracy: f64,
    /// 1–10 scale.
    pub summary_quality: f64,
    pub words_written: u32,
    /// Milliseconds.
    pub time_spent_reading: u64,
}

/// Activity-specific telemetry, discriminated by the activity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "activityType", rename_all = "snake_case")]
pub enum Telemetry {
    MemoryChallenge(MemoryChallengeTelemetry),
    ProblemSolving(ProblemSolvingTelemetry),
    AudioVisual(AudioVisualTelemetry),
    ReadingWriting(ReadingWritingTelemetry),
}

impl Telemetry {
    #[must_use]
    pub fn activity_type(&self) -> ActivityType {
        match self {
            Telemetry::MemoryChallenge(_) => ActivityType::MemoryChallenge,
            Telemetry::ProblemSolving(_) => ActivityType::ProblemSolving,
            Telemetry::AudioVisual(_) => ActivityType::AudioVisual,
            Telemetry::ReadingWriting(_) => ActivityType::ReadingWriting,
        }
    }

    /// Checks the ranges each payload documents.
    ///
    /// Scores are derived from these numbers, so anything non-finite or
    /// negative is rejected before it can reach the score vector.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Telemetry::MemoryChallenge(t) => {
                percentage("recallAccuracy", t.recall_accuracy)?;
                non_negative("responseTime", t.response_time)?;
                scale("engagementLevel", t.engagement_level)?;
                if t.correct_answers > t.total_questions {
                    return Err(ValidationError::AnswersExceedQuestions {
                        correct: t.correct_answers,
                        total: t.total_questions,
                    });
                }
            }
            Telemetry::ProblemSolving(t) => {
                non_negative("efficiency", t.efficiency)?;
            }
            Telemetry::AudioVisual(t) => {
                scale("audioPreference", t.audio_preference)?;
                percentage("answerAccuracy", t.answer_accuracy)?;
                within("audioFocusRatio", t.audio_focus_ratio, 0.0, 1.0)?;
            }
            Telemetry::ReadingWriting(t) => {
                non_negative("readingSpeed", t.reading_speed)?;
                percentage("responseAccuracy", t.response_accuracy)?;
                scale("summaryQuality", t.summary_quality)?;
            }
        }
        Ok(())
    }
}

/// Outcome of one completed activity as reported by the activity UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResult {
    pub activity_id: String,
    pub user_id: String,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
    /// Completion duration in milliseconds.
    pub completion_time: u64,
    #[serde(flatten)]
    pub telemetry: Telemetry,
}

impl ActivityResult {
    #[must_use]
    pub fn activity_type(&self) -> ActivityType {
        self.telemetry.activity_type()
    }

    /// Validates the common fields and the telemetry payload.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.activity_id.trim().is_empty() {
            return Err(ValidationError::EmptyActivityId);
        }
        if self.user_id.trim().is_empty() {
            return Err(ValidationError::EmptyUserId);
        }
        if self.end_time < self.start_time {
            return Err(ValidationError::EndsBeforeStart);
        }
        self.telemetry.validate()
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::NotNonNegative { field, value })
    }
}

fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    non_negative(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn percentage(field: &'static str, value: f64) -> Result<(), ValidationError> {
    within(field, value, 0.0, 100.0)
}

fn scale(field: &'static str, value: f64) -> Result<(), ValidationError> {
    within(field, value, 1.0, 10.0)
}
