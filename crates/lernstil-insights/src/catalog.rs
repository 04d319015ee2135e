use lernstil_core::ActivityType;
use serde::{Deserialize, Serialize};

/// Presentation metadata for one assessment activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityConfig {
    pub id: String,
    pub activity_type: ActivityType,
    pub title: String,
    pub description: String,
    pub estimated_minutes: u32,
    /// 1–5
    pub difficulty: u8,
    pub required_for_assessment: bool,
}

impl ActivityConfig {
    #[must_use]
    pub fn for_activity(activity_type: ActivityType) -> Self {
        let (title, description, estimated_minutes, difficulty) = match activity_type {
            ActivityType::MemoryChallenge => (
                "Memory Challenge",
                "Study a set of images, then recall what you saw.",
                5,
                2,
            ),
            ActivityType::ProblemSolving => (
                "Problem Solving",
                "Solve a puzzle by dragging and clicking the pieces into place.",
                7,
                3,
            ),
            ActivityType::AudioVisual => (
                "Audio-Visual Comprehension",
                "Watch and listen to a short clip, then answer questions about it.",
                5,
                2,
            ),
            ActivityType::ReadingWriting => (
                "Reading & Writing",
                "Read a short text and write a summary of it.",
                8,
                3,
            ),
        };
        Self {
            id: activity_type.as_str().replace('_', "-"),
            activity_type,
            title: title.to_string(),
            description: description.to_string(),
            estimated_minutes,
            difficulty,
            required_for_assessment: true,
        }
    }
}

/// All activities in canonical order.
#[must_use]
pub fn activity_catalog() -> Vec<ActivityConfig> {
    ActivityType::ALL
        .into_iter()
        .map(ActivityConfig::for_activity)
        .collect()
}
