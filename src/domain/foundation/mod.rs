//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the SoulSync domain.

mod errors;
mod ids;
mod score;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{EntryId, MissionId, UserId};
pub use score::Score;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
