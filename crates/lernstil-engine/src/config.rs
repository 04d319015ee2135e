use serde::{Deserialize, Serialize};

/// Tunables for the assessment controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Refuse to start an activity type that was already completed in this
    /// session. Off by default: a repeated activity is scored again and
    /// appended to the completed list.
    pub reject_repeated_activities: bool,
}
