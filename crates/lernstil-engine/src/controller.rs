//! The assessment session state machine.
//!
//! ```text
//! Idle --initialize--> Ready --start--> InProgress(type) --complete--> Ready ... --> Complete
//!   ^                                                                               |
//!   +------------------------------------ reset ------------------------------------+
//! ```
//!
//! Every mutating call runs to completion in memory first and then writes an
//! [`AssessmentSnapshot`] to the injected [`SnapshotStore`]. A store failure is
//! returned as [`AssessmentError::Persistence`] but does not undo the
//! transition.

use crate::aggregate::aggregate;
use crate::classify::{calculate_confidence, determine_primary_learning_type};
use crate::config::EngineConfig;
use crate::error::{AssessmentError, Result, StateError};
use lernstil_core::session::progress_for;
use lernstil_core::{
    ActivityResult, ActivityType, AssessmentSnapshot, AssessmentState, SnapshotStore,
    UserLearningProfile, ValidationError,
};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

/// Where the session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No profile, no session.
    Idle,
    /// Session active, waiting for the next activity.
    Ready,
    InProgress(ActivityType),
    /// All activities done; terminal until reset.
    Complete,
}

/// Owns one user's assessment session.
#[derive(Debug)]
pub struct AssessmentController<S> {
    store: S,
    config: EngineConfig,
    profile: Option<UserLearningProfile>,
    state: AssessmentState,
}

impl<S: SnapshotStore> AssessmentController<S> {
    /// Idle controller with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    pub fn with_config(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            config,
            profile: None,
            state: AssessmentState::default(),
        }
    }

    /// Restores the snapshot held by `store` verbatim; idle if it holds none.
    pub fn resume(store: S, config: EngineConfig) -> Result<Self> {
        let snapshot = store.load()?.unwrap_or_default();
        debug!(
            has_profile = snapshot.user_profile.is_some(),
            progress = snapshot.assessment_state.progress,
            "resumed assessment snapshot"
        );
        Ok(Self {
            store,
            config,
            profile: snapshot.user_profile,
            state: snapshot.assessment_state,
        })
    }

    /// Starts a fresh session for `user_id`, replacing any current one.
    pub fn initialize_assessment(&mut self, user_id: &str) -> Result<()> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(ValidationError::EmptyUserId.into());
        }

        self.profile = Some(UserLearningProfile::new(user_id, OffsetDateTime::now_utc()));
        self.state = AssessmentState::started();
        info!(user_id, "assessment initialized");
        self.persist()
    }

    /// Marks `activity` as running and records its start time.
    pub fn start_activity(&mut self, activity: ActivityType) -> Result<()> {
        match self.phase() {
            SessionPhase::Idle => return Err(StateError::NoSession.into()),
            SessionPhase::Complete => return Err(StateError::AssessmentComplete.into()),
            SessionPhase::InProgress(active) => {
                return Err(StateError::ActivityInProgress {
                    active,
                    requested: activity,
                }
                .into())
            }
            SessionPhase::Ready => {}
        }

        if self.state.is_completed(activity) {
            if self.config.reject_repeated_activities {
                return Err(StateError::AlreadyCompleted(activity).into());
            }
            warn!(%activity, "starting an activity that was already completed");
        }

        self.state.current_activity = Some(activity);
        self.state.activity_started_at = Some(OffsetDateTime::now_utc());
        debug!(%activity, "activity started");
        self.persist()
    }

    /// Scores `result` for the running activity and advances the session.
    ///
    /// The result must belong to the session user and report the activity
    /// type that is in progress. Confidence stays 0 until the final activity
    /// completes the assessment.
    pub fn complete_activity(&mut self, result: &ActivityResult) -> Result<()> {
        let profile = self.profile.as_ref().ok_or(StateError::NoSession)?;
        let active = self
            .state
            .current_activity
            .ok_or(StateError::NoActiveActivity)?;
        let reported = result.activity_type();
        if reported != active {
            return Err(StateError::ActivityMismatch { active, reported }.into());
        }
        if result.user_id != profile.user_id {
            return Err(ValidationError::UserMismatch {
                session: profile.user_id.clone(),
                result: result.user_id.clone(),
            }
            .into());
        }
        result.validate()?;

        let mut state = self.state.clone();
        state.completed_activities.push(active);
        state.progress = progress_for(state.completed_activities.len());
        state.current_activity = None;
        state.activity_started_at = None;
        state.is_assessment_active = state.progress < 100;

        let scores = aggregate(&profile.learning_type_scores, result);
        let complete = !state.is_assessment_active;
        let next = UserLearningProfile {
            user_id: profile.user_id.clone(),
            primary_learning_type: determine_primary_learning_type(&scores),
            learning_type_scores: scores,
            confidence: if complete {
                calculate_confidence(&scores)
            } else {
                0.0
            },
            activities_completed: state.completed_activities.clone(),
            total_activities: profile.total_activities,
            last_updated: OffsetDateTime::now_utc(),
            assessment_complete: complete,
        };

        debug!(
            %active,
            visual = scores.visual,
            auditory = scores.auditory,
            kinesthetic = scores.kinesthetic,
            reading_writing = scores.reading_writing,
            "scores refreshed"
        );
        if complete {
            info!(
                user_id = %next.user_id,
                primary = %next.primary_learning_type,
                confidence = next.confidence,
                "assessment complete"
            );
        } else {
            info!(%active, progress = state.progress, "activity completed");
        }

        self.state = state;
        self.profile = Some(next);
        self.persist()
    }

    /// Discards the session and returns to idle.
    pub fn reset_assessment(&mut self) -> Result<()> {
        self.profile = None;
        self.state = AssessmentState::default();
        info!("assessment reset");
        self.persist()
    }

    /// First activity in canonical order that is not completed yet.
    #[must_use]
    pub fn recommended_next_activity(&self) -> Option<ActivityType> {
        ActivityType::ALL
            .into_iter()
            .find(|activity| !self.state.is_completed(*activity))
    }

    #[must_use]
    pub fn can_proceed_to_next_activity(&self) -> bool {
        self.state.current_activity.is_none() && self.state.progress < 100
    }

    #[must_use]
    pub fn is_activity_completed(&self, activity: ActivityType) -> bool {
        self.state.is_completed(activity)
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.profile.is_none() {
            return SessionPhase::Idle;
        }
        if self.state.progress >= 100 {
            return SessionPhase::Complete;
        }
        match self.state.current_activity {
            Some(activity) => SessionPhase::InProgress(activity),
            None => SessionPhase::Ready,
        }
    }

    #[must_use]
    pub fn profile(&self) -> Option<&UserLearningProfile> {
        self.profile.as_ref()
    }

    /// The profile for downstream consumers; `None` until the assessment is complete.
    #[must_use]
    pub fn final_profile(&self) -> Option<&UserLearningProfile> {
        self.profile.as_ref().filter(|p| p.assessment_complete)
    }

    #[must_use]
    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn snapshot(&self) -> AssessmentSnapshot {
        AssessmentSnapshot {
            user_profile: self.profile.clone(),
            assessment_state: self.state.clone(),
        }
    }

    fn persist(&mut self) -> Result<()> {
        let snapshot = self.snapshot();
        self.store.save(&snapshot).map_err(|err| {
            warn!(error = %err, "could not persist assessment snapshot; continuing in memory");
            AssessmentError::Persistence(err)
        })
    }
}
