//! CLI for lernstil.
//!
//! Drives one learning-style assessment from the shell. The session lives in a
//! JSON snapshot under `--state-dir`, so every invocation resumes where the
//! previous one stopped. Results are printed as JSON on stdout; logs go to
//! stderr and are filtered through `LERNSTIL_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lernstil_core::{
    ActivityResult, ActivityType, AssessmentState, LearningType, UserLearningProfile,
};
use lernstil_engine::{
    AssessmentController, AssessmentError, EngineConfig, JsonFileStore, SessionPhase,
};
use lernstil_insights::{activity_catalog, describe, ActivityConfig, ProfileReport};
use serde::Serialize;
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use time::OffsetDateTime;
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "LERNSTIL_LOG";
const SERVICE_URL_ENV: &str = "LERNSTIL_PATH_SERVICE_URL";
const SERVICE_TOKEN_ENV: &str = "LERNSTIL_PATH_SERVICE_TOKEN";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the assessment snapshot
    #[arg(long, global = true, default_value = "data")]
    state_dir: PathBuf,

    /// Refuse to start an activity that was already completed
    #[arg(long, global = true)]
    reject_repeats: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a fresh assessment for a user, replacing any current one
    Init {
        #[arg(long)]
        user: String,
    },
    /// Mark an activity as running (memory-challenge, problem-solving, audio-visual, reading-writing)
    Start { activity: ActivityType },
    /// Score the result of the running activity
    Complete {
        /// Activity result JSON; read from stdin when omitted
        #[arg(long)]
        result: Option<PathBuf>,
    },
    /// Print the current session
    Status,
    /// Print the next activity to take
    Next,
    /// Discard the session
    Reset,
    /// Print the profile report of a completed assessment
    Report,
    /// Send the profile report to the learning-path service
    Publish,
    /// List the assessment activities
    Activities,
    /// Describe a learning type
    Describe { learning_type: LearningType },
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct StatusView<'a> {
    phase: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_seconds: Option<i64>,
    can_proceed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_activity: Option<ActivityType>,
    assessment_state: &'a AssessmentState,
    user_profile: Option<&'a UserLearningProfile>,
}

impl<'a> StatusView<'a> {
    fn of(controller: &'a AssessmentController<JsonFileStore>) -> Self {
        let state = controller.state();
        let phase = controller.phase();
        let elapsed_seconds = state
            .activity_started_at
            .map(|started| (OffsetDateTime::now_utc() - started).whole_seconds());
        let next_activity = match phase {
            SessionPhase::Ready => controller.recommended_next_activity(),
            _ => None,
        };
        Self {
            phase: phase_name(phase),
            elapsed_seconds,
            can_proceed: controller.can_proceed_to_next_activity(),
            next_activity,
            assessment_state: state,
            user_profile: controller.profile(),
        }
    }
}

fn phase_name(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Idle => "idle",
        SessionPhase::Ready => "ready",
        SessionPhase::InProgress(_) => "in_progress",
        SessionPhase::Complete => "complete",
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn engine_config(reject_repeats: bool) -> EngineConfig {
    EngineConfig {
        reject_repeated_activities: reject_repeats,
    }
}

fn open_session(
    state_dir: &Path,
    reject_repeats: bool,
) -> Result<AssessmentController<JsonFileStore>> {
    let store = JsonFileStore::in_dir(state_dir);
    let path = store.path().to_path_buf();
    AssessmentController::resume(store, engine_config(reject_repeats))
        .with_context(|| format!("Failed to load assessment snapshot from {:?}", path))
}

/// Controller that ignores whatever snapshot is on disk. `init` and `reset`
/// discard the old session anyway, so an unreadable snapshot must not block them.
fn fresh_session(state_dir: &Path, reject_repeats: bool) -> AssessmentController<JsonFileStore> {
    AssessmentController::with_config(
        JsonFileStore::in_dir(state_dir),
        engine_config(reject_repeats),
    )
}

/// Maps an engine outcome to a CLI error, telling a rejected call apart from
/// one that changed the session but could not be saved.
fn settle(outcome: Result<(), AssessmentError>, action: &str) -> Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(err) if err.transition_applied() => Err(anyhow::Error::new(err)
            .context(format!("{action} applied, but the snapshot could not be saved"))),
        Err(err) => Err(anyhow::Error::new(err).context(format!("{action} rejected"))),
    }
}

fn read_result(path: Option<&Path>) -> Result<ActivityResult> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open result file {:?}", path))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Invalid activity result in {:?}", path))
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read activity result from stdin")?;
            serde_json::from_str(&input).context("Invalid activity result on stdin")
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn completed_report(controller: &AssessmentController<JsonFileStore>) -> Result<ProfileReport> {
    let profile = controller
        .profile()
        .context("No assessment session; run `lernstil init` first")?;
    ProfileReport::from_profile(profile).context("Cannot build profile report")
}

fn build_profile_url(base: &str) -> Result<reqwest::Url> {
    let mut target_url = reqwest::Url::parse(base).context("Invalid base URL")?;

    let mut segments: Vec<String> = target_url
        .path_segments()
        .map(|iter| iter.map(String::from).collect())
        .unwrap_or_default();

    if segments.last().is_some_and(|last| last.is_empty()) {
        segments.pop();
    }

    let endpoint = ["api", "v1", "learning", "profile"];
    if segments.ends_with(&endpoint.map(String::from)) {
        segments.truncate(segments.len() - endpoint.len());
    } else if segments.ends_with(&["api".to_string(), "v1".to_string()]) {
        segments.truncate(segments.len() - 2);
    }

    target_url
        .path_segments_mut()
        .map_err(|()| anyhow::anyhow!("URL cannot be used as a base (e.g., 'data:' or 'mailto:' schemes are not supported)"))?
        .clear()
        .extend(segments)
        .extend(endpoint);

    Ok(target_url)
}

fn publish_report(report: &ProfileReport) -> Result<reqwest::Url> {
    let base = env::var(SERVICE_URL_ENV)
        .with_context(|| format!("{SERVICE_URL_ENV} env var is required"))?;
    let target_url = build_profile_url(&base).context("Failed to build service URL")?;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("Failed to build HTTP client")?;

    let mut req = client.post(target_url.clone()).json(report);
    if let Ok(token) = env::var(SERVICE_TOKEN_ENV) {
        req = req.bearer_auth(token);
    }

    req.send()
        .with_context(|| format!("Failed to publish to {}", target_url))?
        .error_for_status()
        .with_context(|| format!("Service at {} rejected the report", target_url))?;

    info!(url = %target_url, user_id = %report.user_id, "profile report published");
    Ok(target_url)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let state_dir = cli.state_dir;
    let reject_repeats = cli.reject_repeats;
    let open = || open_session(&state_dir, reject_repeats);
    let fresh = || fresh_session(&state_dir, reject_repeats);

    match cli.command {
        Commands::Init { user } => {
            let mut controller = fresh();
            settle(controller.initialize_assessment(&user), "init")?;
            print_json(&StatusView::of(&controller))
        }
        Commands::Start { activity } => {
            let mut controller = open()?;
            settle(controller.start_activity(activity), "start")?;
            print_json(&StatusView::of(&controller))
        }
        Commands::Complete { result } => {
            let result = read_result(result.as_deref())?;
            let mut controller = open()?;
            settle(controller.complete_activity(&result), "complete")?;
            print_json(&StatusView::of(&controller))
        }
        Commands::Status => print_json(&StatusView::of(&open()?)),
        Commands::Next => {
            let controller = open()?;
            let next: Option<ActivityConfig> = match controller.phase() {
                SessionPhase::Ready => controller
                    .recommended_next_activity()
                    .map(ActivityConfig::for_activity),
                _ => None,
            };
            print_json(&next)
        }
        Commands::Reset => {
            let mut controller = fresh();
            settle(controller.reset_assessment(), "reset")?;
            print_json(&StatusView::of(&controller))
        }
        Commands::Report => print_json(&completed_report(&open()?)?),
        Commands::Publish => {
            let report = completed_report(&open()?)?;
            let url = publish_report(&report)?;
            print_json(&serde_json::json!({
                "published": true,
                "url": url.as_str(),
                "userId": report.user_id,
            }))
        }
        Commands::Activities => print_json(&activity_catalog()),
        Commands::Describe { learning_type } => {
            let description = describe(learning_type)
                .with_context(|| format!("No description for learning type {learning_type}"))?;
            print_json(&description)
        }
    }
}
