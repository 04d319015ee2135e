//! Session state owned by the assessment controller and the snapshot that
//! leaves the engine for persistence.

use crate::activity::ActivityType;
use crate::scores::{LearningType, LearningTypeScores};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Number of activities in a full assessment.
pub const TOTAL_ACTIVITIES: usize = 4;

/// Progress of the activity sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentState {
    pub current_activity: Option<ActivityType>,
    /// Start of the running activity; absent when none is running.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub activity_started_at: Option<OffsetDateTime>,
    pub completed_activities: Vec<ActivityType>,
    /// Percentage, 0–100.
    pub progress: u8,
    pub is_assessment_active: bool,
}

impl Default for AssessmentState {
    /// The idle state: no session.
    fn default() -> Self {
        Self {
            current_activity: None,
            activity_started_at: None,
            completed_activities: Vec::new(),
            progress: 0,
            is_assessment_active: false,
        }
    }
}

impl AssessmentState {
    /// State right after a session was initialized.
    #[must_use]
    pub fn started() -> Self {
        Self {
            is_assessment_active: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_completed(&self, activity: ActivityType) -> bool {
        self.completed_activities.contains(&activity)
    }
}

/// Progress percentage for `completed` activities, capped at 100.
#[must_use]
pub fn progress_for(completed: usize) -> u8 {
    let pct = (completed.min(TOTAL_ACTIVITIES) * 100) / TOTAL_ACTIVITIES;
    u8::try_from(pct).unwrap_or(100)
}

/// Classification result for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLearningProfile {
    pub user_id: String,
    pub primary_learning_type: LearningType,
    pub learning_type_scores: LearningTypeScores,
    /// 0–1; stays 0 until the assessment is complete.
    pub confidence: f64,
    pub activities_completed: Vec<ActivityType>,
    pub total_activities: usize,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
    pub assessment_complete: bool,
}

impl UserLearningProfile {
    /// Fresh profile: undetermined type, all-zero scores.
    #[must_use]
    pub fn new(user_id: impl Into<String>, now: OffsetDateTime) -> Self {
        Self {
            user_id: user_id.into(),
            primary_learning_type: LearningType::Undetermined,
            learning_type_scores: LearningTypeScores::default(),
            confidence: 0.0,
            activities_completed: Vec::new(),
            total_activities: TOTAL_ACTIVITIES,
            last_updated: now,
            assessment_complete: false,
        }
    }
}

/// What the persistence collaborator stores and hands back on resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSnapshot {
    pub user_profile: Option<UserLearningProfile>,
    pub assessment_state: AssessmentState,
}
