//! Journal module - daily entries written by the student.
//!
//! One entry per calendar day, editable only on that day. Everything else in
//! the daily loop (stats, missions) is derived from it.

mod entry;
mod errors;

pub use entry::{DailyMetrics, JournalEntry, Mood, MAX_CONTENT_LENGTH};
pub use errors::JournalError;
