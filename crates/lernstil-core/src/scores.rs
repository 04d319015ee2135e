//! Learning-style labels and the four-dimensional score vector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A learning style. `Undetermined` is only used before any activity is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningType {
    Visual,
    Auditory,
    Kinesthetic,
    ReadingWriting,
    Undetermined,
}

impl LearningType {
    /// The scored dimensions in canonical order. Ties resolve to the earliest entry.
    pub const DIMENSIONS: [LearningType; 4] = [
        LearningType::Visual,
        LearningType::Auditory,
        LearningType::Kinesthetic,
        LearningType::ReadingWriting,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LearningType::Visual => "visual",
            LearningType::Auditory => "auditory",
            LearningType::Kinesthetic => "kinesthetic",
            LearningType::ReadingWriting => "reading_writing",
            LearningType::Undetermined => "undetermined",
        }
    }
}

impl fmt::Display for LearningType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown learning type: {0}")]
pub struct ParseLearningTypeError(String);

impl FromStr for LearningType {
    type Err = ParseLearningTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        LearningType::DIMENSIONS
            .into_iter()
            .chain([LearningType::Undetermined])
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ParseLearningTypeError(s.to_string()))
    }
}

/// Accumulated evidence per learning-style dimension.
///
/// Starts at zero and only grows during a session. No upper bound applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningTypeScores {
    pub visual: f64,
    pub auditory: f64,
    pub kinesthetic: f64,
    pub reading_writing: f64,
}

impl LearningTypeScores {
    /// Score of one dimension. `Undetermined` has no score and yields `0.0`.
    #[must_use]
    pub fn get(&self, learning_type: LearningType) -> f64 {
        match learning_type {
            LearningType::Visual => self.visual,
            LearningType::Auditory => self.auditory,
            LearningType::Kinesthetic => self.kinesthetic,
            LearningType::ReadingWriting => self.reading_writing,
            LearningType::Undetermined => 0.0,
        }
    }

    /// `(dimension, score)` pairs in canonical order.
    #[must_use]
    pub fn entries(&self) -> [(LearningType, f64); 4] {
        LearningType::DIMENSIONS.map(|t| (t, self.get(t)))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.visual + self.auditory + self.kinesthetic + self.reading_writing
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.entries()
            .iter()
            .map(|(_, v)| *v)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Component-wise sum.
    #[must_use]
    pub fn plus(&self, delta: &LearningTypeScores) -> LearningTypeScores {
        LearningTypeScores {
            visual: self.visual + delta.visual,
            auditory: self.auditory + delta.auditory,
            kinesthetic: self.kinesthetic + delta.kinesthetic,
            reading_writing: self.reading_writing + delta.reading_writing,
        }
    }

    /// True if no component of `self` is below the matching one in `other`.
    #[must_use]
    pub fn dominates(&self, other: &LearningTypeScores) -> bool {
        self.entries()
            .iter()
            .zip(other.entries().iter())
            .all(|((_, a), (_, b))| a >= b)
    }
}
