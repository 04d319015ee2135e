#![allow(dead_code)]

use lernstil_core::{
    ActivityResult, ActivityType, AudioVisualTelemetry, MemoryChallengeTelemetry,
    ProblemSolvingTelemetry, ReadingWritingTelemetry, Telemetry,
};
use time::{Duration, OffsetDateTime};

pub const USER: &str = "user-42";

pub fn envelope(activity_id: &str, telemetry: Telemetry) -> ActivityResult {
    let start_time = OffsetDateTime::UNIX_EPOCH + Duration::hours(1);
    ActivityResult {
        activity_id: activity_id.into(),
        user_id: USER.into(),
        start_time,
        end_time: start_time + Duration::minutes(5),
        completion_time: 300_000,
        telemetry,
    }
}

pub fn memory_challenge(recall_accuracy: f64) -> ActivityResult {
    envelope(
        "mc-1",
        Telemetry::MemoryChallenge(MemoryChallengeTelemetry {
            recall_accuracy,
            response_time: 900.0,
            engagement_level: 7.0,
            correct_answers: 7,
            total_questions: 10,
            visual_elements_recalled: 5,
        }),
    )
}

pub fn problem_solving(interaction_count: u32) -> ActivityResult {
    envelope(
        "ps-1",
        Telemetry::ProblemSolving(ProblemSolvingTelemetry {
            interaction_count,
            steps_to_complete: 12,
            efficiency: 0.7,
            drag_drop_actions: interaction_count / 2,
            click_actions: interaction_count - interaction_count / 2,
            task_completed: true,
        }),
    )
}

pub fn audio_visual(audio_focus_ratio: f64) -> ActivityResult {
    envelope(
        "av-1",
        Telemetry::AudioVisual(AudioVisualTelemetry {
            audio_preference: 6.0,
            answer_accuracy: 80.0,
            time_listening: 180_000,
            time_viewing: 120_000,
            video_muted: false,
            audio_focus_ratio,
        }),
    )
}

pub fn reading_writing(response_accuracy: f64) -> ActivityResult {
    envelope(
        "rw-1",
        Telemetry::ReadingWriting(ReadingWritingTelemetry {
            reading_speed: 230.0,
            text_interactions: 6,
            response_accuracy,
            summary_quality: 7.0,
            words_written: 150,
            time_spent_reading: 240_000,
        }),
    )
}

/// The result used for `activity` in the reference full session.
pub fn reference_result(activity: ActivityType) -> ActivityResult {
    match activity {
        ActivityType::MemoryChallenge => memory_challenge(100.0),
        ActivityType::ProblemSolving => problem_solving(50),
        ActivityType::AudioVisual => audio_visual(0.6),
        ActivityType::ReadingWriting => reading_writing(90.0),
    }
}

pub fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
