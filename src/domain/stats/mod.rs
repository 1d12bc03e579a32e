//! Stats module - the student's RPG attributes and the engine that moves them.

mod engine;
mod stat;

pub use engine::{Cue, CueHit, StatEngine, CUES, MAX_DELTA_PER_ENTRY};
pub use stat::{Stat, StatSet, StatSnapshot};
