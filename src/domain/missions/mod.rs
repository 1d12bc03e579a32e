//! Missions module - daily tasks aimed at the student's weakest stats.
//!
//! Missions are generated once per day from the journal entry and the current
//! stats, then completed one by one. Completion never reverts.

mod errors;
mod generator;
mod mission;

pub use errors::MissionError;
pub use generator::{template, MissionGenerator, DEFAULT_MISSION_COUNT};
pub use mission::{CompletionOutcome, Difficulty, Mission, MissionStatus};
