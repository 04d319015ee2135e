//! Drives one complete assessment from a JSONL file of activity results and
//! prints the final snapshot.
//!
//! Run with: cargo run -p lernstil-engine --example run_session -- tests/fixtures/assessment/session.results.jsonl

use lernstil_core::ActivityResult;
use lernstil_engine::{AssessmentController, MemoryStore};
use std::error::Error;
use std::fs;

const DEFAULT_RESULTS: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../tests/fixtures/assessment/session.results.jsonl"
);

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_RESULTS.to_string());
    let content = fs::read_to_string(path)?;

    let results = content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(serde_json::from_str::<ActivityResult>)
        .collect::<Result<Vec<_>, _>>()?;

    let Some(first) = results.first() else {
        return Err("no activity results in input".into());
    };

    let mut controller = AssessmentController::new(MemoryStore::default());
    controller.initialize_assessment(&first.user_id)?;

    for result in &results {
        controller.start_activity(result.activity_type())?;
        controller.complete_activity(result)?;
        println!(
            "{:<18} progress {:>3}%  next: {}",
            result.activity_type(),
            controller.state().progress,
            controller
                .recommended_next_activity()
                .map_or("-".to_string(), |a| a.to_string())
        );
    }

    serde_json::to_writer_pretty(std::io::stdout(), &controller.snapshot())?;
    println!();

    Ok(())
}
