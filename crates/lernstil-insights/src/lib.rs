#![warn(clippy::unwrap_used, clippy::expect_used)]

//! What a finished assessment means for the learner.
//!
//! This crate turns a completed [`UserLearningProfile`] into a
//! [`ProfileReport`]: the ranked dimensions, a confidence band, a description
//! of the primary learning type and matching sample content. The report is the
//! payload handed to the downstream path-generation service.

pub mod catalog;
pub mod descriptions;
pub mod recommendations;

pub use catalog::{activity_catalog, ActivityConfig};
pub use descriptions::{describe, LearningTypeDescription};
pub use recommendations::{recommendations_for, ContentKind, ContentRecommendation};

use lernstil_core::{LearningType, LearningTypeScores, UserLearningProfile};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

// Confidence bands
/// Confidence below this is reported as low
const CONFIDENCE_MODERATE_THRESHOLD: f64 = 0.1;
/// Confidence at or above this is reported as high
const CONFIDENCE_HIGH_THRESHOLD: f64 = 0.3;

/// Version of the report format
const REPORT_VERSION: &str = "0.1.0";
/// Fallback timestamp when formatting fails
const FALLBACK_TIMESTAMP: &str = "1970-01-01T00:00:00Z";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InsightError {
    #[error("assessment incomplete: {completed} of {total} activities done")]
    Incomplete { completed: usize, total: usize },
}

/// Coarse reading of the confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    Low,
    Moderate,
    High,
}

impl ConfidenceBand {
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= CONFIDENCE_HIGH_THRESHOLD {
            ConfidenceBand::High
        } else if confidence >= CONFIDENCE_MODERATE_THRESHOLD {
            ConfidenceBand::Moderate
        } else {
            ConfidenceBand::Low
        }
    }
}

/// One dimension's score and its share of the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionShare {
    pub learning_type: LearningType,
    pub score: f64,
    /// 0–1
    pub share: f64,
}

/// Final assessment outcome for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReport {
    pub version: String,
    pub ts: String,
    pub user_id: String,
    pub primary_learning_type: LearningType,
    pub confidence: f64,
    pub confidence_band: ConfidenceBand,
    pub learning_type_scores: LearningTypeScores,
    /// Highest score first; ties keep canonical order.
    pub ranking: Vec<DimensionShare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<LearningTypeDescription>,
    pub recommendations: Vec<ContentRecommendation>,
}

impl ProfileReport {
    /// Builds the report for a completed profile.
    pub fn from_profile(profile: &UserLearningProfile) -> Result<Self, InsightError> {
        if !profile.assessment_complete {
            return Err(InsightError::Incomplete {
                completed: profile.activities_completed.len(),
                total: profile.total_activities,
            });
        }

        let primary = profile.primary_learning_type;
        Ok(Self {
            version: REPORT_VERSION.to_string(),
            ts: iso8601_now(),
            user_id: profile.user_id.clone(),
            primary_learning_type: primary,
            confidence: profile.confidence,
            confidence_band: ConfidenceBand::from_confidence(profile.confidence),
            learning_type_scores: profile.learning_type_scores,
            ranking: rank_dimensions(&profile.learning_type_scores),
            description: describe(primary),
            recommendations: recommendations_for(primary),
        })
    }
}

/// Dimensions ordered by score, highest first.
#[must_use]
pub fn rank_dimensions(scores: &LearningTypeScores) -> Vec<DimensionShare> {
    let total = scores.total();
    let mut ranking: Vec<DimensionShare> = scores
        .entries()
        .iter()
        .map(|(learning_type, score)| DimensionShare {
            learning_type: *learning_type,
            score: *score,
            share: if total > 0.0 { score / total } else { 0.0 },
        })
        .collect();
    // stable: equal scores stay in canonical order
    ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranking
}

fn iso8601_now() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_string())
}
