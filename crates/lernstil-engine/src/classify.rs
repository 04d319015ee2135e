//! Primary learning type and confidence from a score vector.

use lernstil_core::{LearningType, LearningTypeScores};

/// The first dimension, in canonical order, holding the maximum score.
///
/// Ties, including the all-zero vector, go to `Visual` first.
#[must_use]
pub fn determine_primary_learning_type(scores: &LearningTypeScores) -> LearningType {
    let max = scores.max();
    scores
        .entries()
        .iter()
        .find(|(_, value)| *value == max)
        .map_or(LearningType::Visual, |(learning_type, _)| *learning_type)
}

/// How clearly the leading dimension dominates, in `[0, 1]`.
///
/// The runner-up is the largest value strictly below the maximum: every
/// dimension tied with the maximum is excluded, so a two-way tie for first
/// compares against third place. With all four equal there is no runner-up
/// and the result is `1.0`.
#[must_use]
pub fn calculate_confidence(scores: &LearningTypeScores) -> f64 {
    let total = scores.total();
    if total == 0.0 {
        return 0.0;
    }

    let max = scores.max();
    let second_max = scores
        .entries()
        .iter()
        .map(|(_, value)| *value)
        .filter(|value| *value != max)
        .fold(f64::NEG_INFINITY, f64::max);

    ((max - second_max) / total).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(
        visual: f64,
        auditory: f64,
        kinesthetic: f64,
        reading_writing: f64,
    ) -> LearningTypeScores {
        LearningTypeScores {
            visual,
            auditory,
            kinesthetic,
            reading_writing,
        }
    }

    #[test]
    fn zero_vector_is_visual_with_zero_confidence() {
        let zero = LearningTypeScores::default();
        assert_eq!(determine_primary_learning_type(&zero), LearningType::Visual);
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(calculate_confidence(&zero), 0.0);
        }
    }

    #[test]
    fn highest_dimension_wins() {
        assert_eq!(
            determine_primary_learning_type(&scores(1.0, 2.0, 3.0, 4.0)),
            LearningType::ReadingWriting
        );
        assert_eq!(
            determine_primary_learning_type(&scores(0.0, 9.0, 3.0, 4.0)),
            LearningType::Auditory
        );
    }

    #[test]
    fn ties_resolve_in_canonical_order() {
        assert_eq!(
            determine_primary_learning_type(&scores(0.0, 10.0, 10.0, 0.0)),
            LearningType::Auditory
        );
        assert_eq!(
            determine_primary_learning_type(&scores(5.0, 0.0, 0.0, 5.0)),
            LearningType::Visual
        );
    }

    #[test]
    fn full_session_confidence() {
        let c = calculate_confidence(&scores(31.0, 15.0, 25.0, 22.5));
        assert!((c - 6.0 / 93.5).abs() < 1e-12);
        assert!((c - 0.0642).abs() < 1e-4);
    }

    #[test]
    fn tie_at_the_top_compares_against_third_place() {
        // 10 and 10 are both excluded from the runner-up candidates.
        let c = calculate_confidence(&scores(10.0, 10.0, 5.0, 0.0));
        assert!((c - 0.2).abs() < 1e-12);
    }

    #[test]
    fn four_way_tie_has_full_confidence() {
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(calculate_confidence(&scores(5.0, 5.0, 5.0, 5.0)), 1.0);
        }
    }

    #[test]
    fn single_nonzero_dimension_is_full_confidence() {
        let c = calculate_confidence(&scores(20.0, 0.0, 0.0, 0.0));
        assert!((c - 1.0).abs() < 1e-12);
    }

    #[test]
    fn confidence_stays_within_unit_interval() {
        let cases = [
            scores(0.0, 0.0, 0.0, 0.1),
            scores(25.0, 15.0, 75.0, 0.0),
            scores(1e-9, 2e-9, 3e-9, 4e-9),
            scores(1e6, 1e5, 1e4, 1e3),
            scores(3.0, 3.0, 3.0, 1.0),
            scores(0.0, 12.5, 12.5, 12.5),
        ];
        for case in cases {
            let c = calculate_confidence(&case);
            assert!((0.0..=1.0).contains(&c), "confidence {c} out of range for {case:?}");
        }
    }

    #[test]
    fn classification_is_deterministic() {
        let s = scores(7.0, 7.0, 3.0, 1.0);
        assert_eq!(
            determine_primary_learning_type(&s),
            determine_primary_learning_type(&s)
        );
    }
}
