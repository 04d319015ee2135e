use lernstil_core::ActivityResult;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

fn main() -> Result<(), Box<dyn Error>> {
    let path = std::env::args().nth(1);
    let reader: Box<dyn BufRead> = match path {
        Some(p) => Box::new(BufReader::new(File::open(p)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result: ActivityResult = serde_json::from_str(&line)?;
        let status = match result.validate() {
            Ok(()) => "ok".to_string(),
            Err(e) => format!("invalid: {e}"),
        };

        println!(
            "{}\t{}\t{}ms\t{}",
            result.activity_type(),
            result.user_id,
            result.completion_time,
            status
        );
    }

    Ok(())
}
