//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `journal` - Daily journal entries
//! - `stats` - RPG stats and the engine that updates them
//! - `missions` - Daily missions, their generator and lifecycle
//! - `chat` - Advisor modes, replies and canned fallbacks
//! - `progress` - Streaks
//! - `dashboard` - Read model for the daily screen

pub mod chat;
pub mod dashboard;
pub mod foundation;
pub mod journal;
pub mod missions;
pub mod progress;
pub mod stats;
