use lernstil_core::{ActivityResult, ActivityType, AssessmentSnapshot, LearningType};
use std::fs;

#[test]
fn session_results_fixture_deserializes_in_canonical_order() {
    let content = fs::read_to_string("../../tests/fixtures/assessment/session.results.jsonl")
        .expect("Failed to read results fixture");

    let results: Vec<ActivityResult> = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("result line should deserialize"))
        .collect();

    let types: Vec<ActivityType> = results.iter().map(ActivityResult::activity_type).collect();
    assert_eq!(types, ActivityType::ALL.to_vec());
    assert!(results.iter().all(|r| r.validate().is_ok()));
}

#[test]
fn snapshot_fixture_deserializes() {
    let content = fs::read_to_string("../../tests/fixtures/assessment/snapshot.ok.json")
        .expect("Failed to read snapshot fixture");

    let snapshot: AssessmentSnapshot =
        serde_json::from_str(&content).expect("snapshot fixture should deserialize");

    let profile = snapshot.user_profile.expect("fixture has a profile");
    assert_eq!(profile.primary_learning_type, LearningType::Visual);
    assert_eq!(snapshot.assessment_state.progress, 50);
    assert_eq!(
        snapshot.assessment_state.current_activity,
        Some(ActivityType::AudioVisual)
    );
    assert!(snapshot.assessment_state.activity_started_at.is_some());
}
