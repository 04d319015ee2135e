#![warn(clippy::unwrap_used, clippy::expect_used)]

//! Learning-style assessment engine.
//!
//! - [`aggregate`] folds one activity result into the score vector.
//! - [`classify`] derives the primary learning type and a confidence value.
//! - [`AssessmentController`] runs the four-activity session and hands every
//!   state change to a [`lernstil_core::SnapshotStore`].

pub mod aggregate;
pub mod classify;
pub mod config;
pub mod controller;
pub mod error;
pub mod store;

pub use aggregate::{aggregate, contribution};
pub use classify::{calculate_confidence, determine_primary_learning_type};
pub use config::EngineConfig;
pub use controller::{AssessmentController, SessionPhase};
pub use error::{AssessmentError, Result, StateError};
pub use store::{JsonFileStore, MemoryStore};
