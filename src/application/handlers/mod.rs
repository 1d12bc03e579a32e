//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod chat;
pub mod dashboard;
pub mod journal;
pub mod missions;
pub mod stats;
