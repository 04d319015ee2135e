use lernstil_core::LearningType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Article,
    Interactive,
    Audio,
}

/// A piece of sample content suited to a learning type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecommendation {
    pub id: String,
    pub title: String,
    pub kind: ContentKind,
    /// 1–5
    pub difficulty: u8,
    pub estimated_minutes: u32,
    /// 0–1
    pub learning_type_match: f32,
}

fn item(
    id: &str,
    title: &str,
    kind: ContentKind,
    difficulty: u8,
    estimated_minutes: u32,
    learning_type_match: f32,
) -> ContentRecommendation {
    ContentRecommendation {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        difficulty,
        estimated_minutes,
        learning_type_match,
    }
}

/// Sample content for `learning_type`, best match first. Empty for
/// [`LearningType::Undetermined`].
#[must_use]
pub fn recommendations_for(learning_type: LearningType) -> Vec<ContentRecommendation> {
    use ContentKind::{Article, Audio, Interactive, Video};

    match learning_type {
        LearningType::Visual => vec![
            item("vis_1", "Interactive Data Visualization Tutorial", Interactive, 3, 15, 0.95),
            item("vis_2", "Mind Mapping Techniques Video", Video, 2, 12, 0.90),
        ],
        LearningType::Auditory => vec![
            item("aud_1", "Learning Strategies Podcast", Audio, 2, 20, 0.95),
            item("aud_2", "Study Music for Focus", Audio, 1, 60, 0.85),
        ],
        LearningType::Kinesthetic => vec![
            item("kin_1", "Hands-on Programming Exercise", Interactive, 4, 30, 0.95),
            item("kin_2", "Virtual Lab Simulation", Interactive, 3, 25, 0.90),
        ],
        LearningType::ReadingWriting => vec![
            item("rw_1", "Comprehensive Study Guide", Article, 3, 35, 0.95),
            item("rw_2", "Note-Taking Strategies Article", Article, 2, 15, 0.90),
        ],
        LearningType::Undetermined => Vec::new(),
    }
}
