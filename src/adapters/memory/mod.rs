//! In-memory adapters for the Entry Store ports.
//!
//! Used when no database URL is configured, and throughout the tests.
//! Data lives for the lifetime of the process.

mod journal_repository;
mod mission_repository;
mod stat_repository;

pub use journal_repository::InMemoryJournalRepository;
pub use mission_repository::InMemoryMissionRepository;
pub use stat_repository::InMemoryStatRepository;
