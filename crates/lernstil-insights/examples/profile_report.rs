//! Runs the reference session and prints what the learner gets to see.
//!
//! Run with: cargo run -p lernstil-insights --example profile_report

use lernstil_core::ActivityResult;
use lernstil_engine::{AssessmentController, MemoryStore};
use lernstil_insights::{activity_catalog, ProfileReport};
use std::error::Error;

const RESULTS: &str = include_str!("../../../tests/fixtures/assessment/session.results.jsonl");

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== lernstil: Learning-Style Assessment ===\n");

    println!("Activities:");
    for activity in activity_catalog() {
        println!(
            "  {:<28} ~{} min, difficulty {}/5",
            activity.title, activity.estimated_minutes, activity.difficulty
        );
    }
    println!();

    let mut controller = AssessmentController::new(MemoryStore::default());
    controller.initialize_assessment("user-42")?;
    for line in RESULTS.lines().filter(|l| !l.trim().is_empty()) {
        let result: ActivityResult = serde_json::from_str(line)?;
        controller.start_activity(result.activity_type())?;
        controller.complete_activity(&result)?;
    }

    let Some(profile) = controller.final_profile() else {
        return Err("assessment did not complete".into());
    };
    let report = ProfileReport::from_profile(profile)?;

    println!("Ranking:");
    for dim in &report.ranking {
        println!(
            "  {:<16} {:>6.2} pts ({:>5.1}%)",
            dim.learning_type,
            dim.score,
            dim.share * 100.0
        );
    }
    println!(
        "\nPrimary: {} (confidence {:.4}, {:?})",
        report.primary_learning_type, report.confidence, report.confidence_band
    );
    if let Some(description) = &report.description {
        println!("\n{}\n  {}", description.title, description.description);
        for strategy in &description.strategies {
            println!("  - {strategy}");
        }
    }
    println!("\nRecommended content:");
    for item in &report.recommendations {
        println!(
            "  [{}] {} ({:?}, {} min)",
            item.id, item.title, item.kind, item.estimated_minutes
        );
    }

    Ok(())
}
