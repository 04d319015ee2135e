use lernstil_core::LearningType;
use serde::{Deserialize, Serialize};

/// Human-readable summary of a learning type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTypeDescription {
    pub title: String,
    pub description: String,
    pub characteristics: Vec<String>,
    pub strategies: Vec<String>,
}

struct Entry {
    title: &'static str,
    description: &'static str,
    characteristics: [&'static str; 5],
    strategies: [&'static str; 5],
}

const VISUAL: Entry = Entry {
    title: "Visual Learner",
    description: "You learn best through seeing and observing. Visual aids, diagrams, and imagery help you understand and remember information.",
    characteristics: [
        "Prefers charts, diagrams, and visual aids",
        "Thinks in pictures and mental images",
        "Notices visual details and patterns",
        "Benefits from color-coding and highlighting",
        "Remembers faces better than names",
    ],
    strategies: [
        "Use mind maps and flowcharts",
        "Watch educational videos and tutorials",
        "Create visual study notes with diagrams",
        "Use color-coding for organization",
        "Practice with interactive visual tools",
    ],
};

const AUDITORY: Entry = Entry {
    title: "Auditory Learner",
    description: "You learn best through listening and speaking. Discussions, lectures, and audio content are most effective for you.",
    characteristics: [
        "Prefers lectures and discussions",
        "Learns through listening and talking",
        "Remembers spoken instructions well",
        "Benefits from reading aloud",
        "Enjoys music and sound patterns",
    ],
    strategies: [
        "Listen to podcasts and audio books",
        "Participate in study groups and discussions",
        "Read material aloud",
        "Use mnemonic devices and rhymes",
        "Record and replay lessons",
    ],
};

const KINESTHETIC: Entry = Entry {
    title: "Kinesthetic Learner",
    description: "You learn best through hands-on activities and physical engagement. Movement and touch help you understand concepts.",
    characteristics: [
        "Prefers hands-on activities",
        "Learns through movement and touch",
        "Needs frequent breaks and activity",
        "Benefits from practical application",
        "Remembers through muscle memory",
    ],
    strategies: [
        "Use interactive simulations and tools",
        "Take frequent study breaks with movement",
        "Practice with real-world applications",
        "Use manipulatives and models",
        "Engage in project-based learning",
    ],
};

const READING_WRITING: Entry = Entry {
    title: "Reading/Writing Learner",
    description: "You learn best through reading and writing activities. Text-based information and note-taking are your preferred methods.",
    characteristics: [
        "Prefers reading and writing",
        "Learns through text-based information",
        "Enjoys taking detailed notes",
        "Benefits from lists and written instructions",
        "Likes to research and read extensively",
    ],
    strategies: [
        "Take comprehensive written notes",
        "Read extensively on topics",
        "Write summaries and outlines",
        "Use written practice exercises",
        "Create glossaries and word lists",
    ],
};

/// Description of `learning_type`; `None` for [`LearningType::Undetermined`].
#[must_use]
pub fn describe(learning_type: LearningType) -> Option<LearningTypeDescription> {
    let entry = match learning_type {
        LearningType::Visual => &VISUAL,
        LearningType::Auditory => &AUDITORY,
        LearningType::Kinesthetic => &KINESTHETIC,
        LearningType::ReadingWriting => &READING_WRITING,
        LearningType::Undetermined => return None,
    };
    Some(LearningTypeDescription {
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        characteristics: entry.characteristics.iter().map(|s| (*s).to_string()).collect(),
        strategies: entry.strategies.iter().map(|s| (*s).to_string()).collect(),
    })
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn every_dimension_has_a_description() {
        for learning_type in LearningType::DIMENSIONS {
            let description = describe(learning_type).expect("dimension has a description");
            assert_eq!(description.characteristics.len(), 5);
            assert_eq!(description.strategies.len(), 5);
        }
    }

    #[test]
    fn undetermined_has_no_description() {
        assert!(describe(LearningType::Undetermined).is_none());
    }

    #[test]
    fn titles_match_learning_type() {
        let title = describe(LearningType::ReadingWriting).map(|d| d.title);
        assert_eq!(title.as_deref(), Some("Reading/Writing Learner"));
    }
}
