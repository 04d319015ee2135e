//! Folding activity telemetry into the score vector.

use lernstil_core::{ActivityResult, LearningTypeScores, Telemetry};

/// Points a single activity can add to its primary dimension.
pub const DIMENSION_WEIGHT: f64 = 25.0;
/// Points the audio/visual task adds to `visual` for non-listening time.
pub const AUDIO_VISUAL_VISUAL_WEIGHT: f64 = 15.0;
/// Interaction count that yields the full kinesthetic weight. Not a cap.
pub const INTERACTION_REFERENCE: f64 = 50.0;

/// Score delta contributed by one activity result.
///
/// Only the dimensions the activity speaks to are non-zero.
#[must_use]
pub fn contribution(result: &ActivityResult) -> LearningTypeScores {
    let mut delta = LearningTypeScores::default();
    match &result.telemetry {
        Telemetry::MemoryChallenge(t) => {
            delta.visual = (t.recall_accuracy / 100.0) * DIMENSION_WEIGHT;
        }
        Telemetry::ProblemSolving(t) => {
            delta.kinesthetic =
                (f64::from(t.interaction_count) / INTERACTION_REFERENCE) * DIMENSION_WEIGHT;
        }
        Telemetry::AudioVisual(t) => {
            delta.auditory = t.audio_focus_ratio * DIMENSION_WEIGHT;
            delta.visual = (1.0 - t.audio_focus_ratio) * AUDIO_VISUAL_VISUAL_WEIGHT;
        }
        Telemetry::ReadingWriting(t) => {
            delta.reading_writing = (t.response_accuracy / 100.0) * DIMENSION_WEIGHT;
        }
    }
    delta
}

/// Returns `current` plus the contribution of `result`.
///
/// Applying the same result twice counts it twice.
#[must_use]
pub fn aggregate(current: &LearningTypeScores, result: &ActivityResult) -> LearningTypeScores {
    current.plus(&contribution(result))
}
