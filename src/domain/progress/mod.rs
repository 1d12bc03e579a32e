//! Progress module - long-running measures derived from mission history.

mod level;
mod streak;

pub use level::{Progress, XP_PER_LEVEL};
pub use streak::streak;
